//! User directory screens (administrators only).

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use super::record_handler::{screen_paths, settle, ScreenPaths};
use crate::api::middleware::guard;
use crate::api::AppState;
use crate::domain::{Requirement, Role, UserForm, UserResponse};
use crate::errors::{validation_messages, AppResult};
use crate::types::{FormView, View};

const PATHS: ScreenPaths = screen_paths!("user");

/// Create user directory routes
pub fn user_routes() -> Router<AppState> {
    let router = Router::new()
        .route(PATHS.list, get(list_users))
        .route(PATHS.add, get(add_user_form))
        .route(PATHS.validate, post(create_user))
        .route(PATHS.update, get(update_user_form).post(update_user))
        .route(PATHS.delete, get(delete_user));

    guard(router, Requirement::Role(Role::Admin))
}

/// Re-show a form that failed its field rules, without the password.
fn rejected(view: &'static str, mut form: UserForm) -> Option<Response> {
    let errors = form.validate().err()?;
    form.password.clear();
    Some(FormView::rejected(view, form, validation_messages(&errors)).into_response())
}

/// List every user
#[utoipa::path(
    get,
    path = "/user/list",
    tag = "Users",
    responses(
        (status = 200, description = "User list view", body = Vec<UserResponse>),
        (status = 303, description = "Anonymous caller, redirect to login"),
        (status = 403, description = "Denial view")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<View<Vec<UserResponse>>> {
    let users = state.services.users.list_users().await?;
    Ok(View::new(
        PATHS.list_view,
        users.into_iter().map(UserResponse::from).collect(),
    ))
}

/// Blank creation form
#[utoipa::path(
    get,
    path = "/user/add",
    tag = "Users",
    responses((status = 200, description = "Empty user form", body = UserForm))
)]
pub async fn add_user_form() -> FormView<UserForm> {
    FormView::new(PATHS.add_view, UserForm::default())
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user/validate",
    tag = "Users",
    request_body = UserForm,
    responses(
        (status = 303, description = "Created, redirect to the list"),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Form re-shown with errors", body = UserForm)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(form): Json<UserForm>,
) -> AppResult<Response> {
    if let Some(response) = rejected(PATHS.add_view, form.clone()) {
        return Ok(response);
    }

    let shown = UserForm {
        password: String::new(),
        ..form.clone()
    };
    let result = state.services.users.create_user(form).await;
    settle(result, PATHS.add_view, shown, PATHS.list)
}

/// Edit form for an existing user; the password field is blank
#[utoipa::path(
    get,
    path = "/user/update/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Pre-filled user form", body = UserForm),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<FormView<UserForm>> {
    let user = state.services.users.get_user(id).await?;
    Ok(FormView::new(PATHS.update_view, UserForm::for_edit(&user)))
}

/// Update a user; the password is always re-hashed
#[utoipa::path(
    post,
    path = "/user/update/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserForm,
    responses(
        (status = 303, description = "Updated, redirect to the list"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Form re-shown with errors", body = UserForm)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<UserForm>,
) -> AppResult<Response> {
    let form = UserForm {
        id: Some(id),
        ..form
    };
    if let Some(response) = rejected(PATHS.update_view, form.clone()) {
        return Ok(response);
    }

    let shown = UserForm {
        password: String::new(),
        ..form.clone()
    };
    let result = state.services.users.update_user(id, form).await;
    settle(result, PATHS.update_view, shown, PATHS.list)
}

/// Delete a user and, with it, their sessions
#[utoipa::path(
    get,
    path = "/user/delete/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 303, description = "Deleted, redirect to the list"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.users.delete_user(id).await?;
    Ok(Redirect::to(PATHS.list))
}
