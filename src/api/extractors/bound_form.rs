//! Form submission extractor - Binds a JSON body field by field.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;
use crate::types::FormView;

/// A submitted entry form.
///
/// A body that is valid JSON but has a field that will not bind (for example
/// `"bidQuantity": "abc"`) is kept as the raw submission, so the form can be
/// shown again with the values the user typed. A body that is not JSON at all
/// is rejected as `AppError::Validation`.
pub enum BoundForm<T> {
    Bound(T),
    Unbound { raw: Value, reason: String },
}

impl<T> BoundForm<T> {
    /// The bound form, or the re-shown `view` carrying the binding error.
    pub fn into_form(self, view: &'static str) -> Result<T, Response> {
        match self {
            BoundForm::Bound(form) => Ok(form),
            BoundForm::Unbound { raw, reason } => {
                Err(FormView::rejected(view, raw, vec![reason]).into_response())
            }
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for BoundForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<Value>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        match T::deserialize(&raw) {
            Ok(form) => Ok(BoundForm::Bound(form)),
            Err(e) => {
                tracing::debug!("Form field did not bind: {}", e);
                Ok(BoundForm::Unbound {
                    raw,
                    reason: e.to_string(),
                })
            }
        }
    }
}
