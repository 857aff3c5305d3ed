//! Login, logout and the denial page.

use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{
    ACCESS_DENIED_REASON, ACCESS_DENIED_ROUTE, LOGIN_ROUTE, LOGOUT_ROUTE, SESSION_COOKIE,
};
use crate::errors::AppResult;
use crate::types::{DeniedView, View};

/// Login form submission
#[derive(Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is mandatory"))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is mandatory"))]
    #[schema(example = "Admin123!")]
    pub password: String,
}

/// Create login, logout and denial routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_ROUTE, get(login_page).post(login))
        .route(LOGOUT_ROUTE, post(logout))
        .route(ACCESS_DENIED_ROUTE, get(access_denied))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Show the login form
#[utoipa::path(
    get,
    path = "/login",
    tag = "Authentication",
    responses((status = 200, description = "Login view"))
)]
pub async fn login_page() -> View<()> {
    View::new("login/login", ())
}

/// Sign in and land on the page for the principal's role
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 303, description = "Session cookie set, redirect to the landing route"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Redirect)> {
    let outcome = state
        .services
        .auth
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        jar.add(session_cookie(outcome.token)),
        Redirect::to(outcome.destination),
    ))
}

/// End the session and clear the cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Authentication",
    responses((status = 303, description = "Session closed, redirect to login"))
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned());

    if let Some(token) = token {
        state.services.auth.logout(&token).await?;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((jar, Redirect::to(LOGIN_ROUTE)))
}

/// The fixed denial view
#[utoipa::path(
    get,
    path = "/access-denied",
    tag = "Authentication",
    responses((status = 403, description = "Denial view with the reason"))
)]
pub async fn access_denied() -> DeniedView {
    DeniedView::new(ACCESS_DENIED_REASON)
}
