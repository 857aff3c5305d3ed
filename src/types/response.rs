use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A named view and the model it displays.
///
/// Pages are delivered as JSON documents rather than rendered HTML.
#[derive(Debug, Serialize)]
pub struct View<T: Serialize> {
    pub view: &'static str,
    pub model: T,
}

impl<T: Serialize> View<T> {
    pub fn new(view: &'static str, model: T) -> Self {
        Self { view, model }
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// An entry form, either blank, pre-filled for editing, or re-shown after a
/// rejected submission together with the reasons.
#[derive(Debug, Serialize)]
pub struct FormView<T: Serialize> {
    pub view: &'static str,
    pub form: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T: Serialize> FormView<T> {
    pub fn new(view: &'static str, form: T) -> Self {
        Self {
            view,
            form,
            errors: Vec::new(),
        }
    }

    pub fn rejected(view: &'static str, form: T, errors: Vec<String>) -> Self {
        Self { view, form, errors }
    }
}

impl<T: Serialize> IntoResponse for FormView<T> {
    fn into_response(self) -> Response {
        let status = if self.errors.is_empty() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        (status, Json(self)).into_response()
    }
}

/// The fixed denial view.
#[derive(Debug, Serialize)]
pub struct DeniedView {
    pub view: &'static str,
    #[serde(rename = "errorMsg")]
    pub error_msg: String,
}

impl DeniedView {
    pub const VIEW: &'static str = "403";

    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            view: Self::VIEW,
            error_msg: reason.into(),
        }
    }
}

impl IntoResponse for DeniedView {
    fn into_response(self) -> Response {
        (StatusCode::FORBIDDEN, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_form_is_unprocessable() {
        let response = FormView::rejected("bidList/add", "form", vec!["bad".into()]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_blank_form_is_ok() {
        let response = FormView::new("bidList/add", "form").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_denied_view_is_forbidden() {
        let denied = DeniedView::new("nope");
        assert_eq!(denied.view, "403");
        assert_eq!(denied.into_response().status(), StatusCode::FORBIDDEN);
    }
}
