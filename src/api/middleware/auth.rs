//! Session resolution and per-route role gates.
//!
//! `session_middleware` runs on every request and leaves the caller's
//! `Principal` in the request extensions when the `SESSION` cookie names a
//! live session. The gates only read that extension.

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::SESSION_COOKIE;
use crate::domain::{authorize, AuthorizationDecision, Principal, Requirement, Role};
use crate::errors::{AppError, AppResult};

/// Resolve the session cookie into a `Principal` extension.
///
/// Missing, forged, expired and revoked tokens all leave the request
/// anonymous.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(request.headers());

    let principal = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.services.auth.authenticate(cookie.value()).await?,
        None => None,
    };

    if let Some(principal) = principal {
        request.extensions_mut().insert(principal);
    }

    Ok(next.run(request).await)
}

fn check(request: &Request, requirement: Requirement) -> AppResult<()> {
    let principal = request.extensions().get::<Principal>();

    match authorize(principal, requirement) {
        AuthorizationDecision::Granted => Ok(()),
        AuthorizationDecision::RedirectToLogin => Err(AppError::Unauthorized),
        AuthorizationDecision::Denied { reason } => {
            tracing::debug!(
                path = %request.uri().path(),
                user = principal.map(|p| p.username.as_str()),
                "Access denied"
            );
            Err(AppError::Forbidden(reason))
        }
    }
}

/// Only administrators pass.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    check(&request, Requirement::Role(Role::Admin))?;
    Ok(next.run(request).await)
}

/// Only regular users pass.
pub async fn require_user(request: Request, next: Next) -> Result<Response, AppError> {
    check(&request, Requirement::Role(Role::User))?;
    Ok(next.run(request).await)
}

/// Any signed-in principal passes, whatever its role.
pub async fn require_login(request: Request, next: Next) -> Result<Response, AppError> {
    check(&request, Requirement::Authenticated)?;
    Ok(next.run(request).await)
}

/// Put every route of `router` behind the gate for `requirement`.
pub fn guard<S>(router: Router<S>, requirement: Requirement) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    match requirement {
        Requirement::Public => router,
        Requirement::Authenticated => router.route_layer(middleware::from_fn(require_login)),
        Requirement::Role(Role::Admin) => router.route_layer(middleware::from_fn(require_admin)),
        Requirement::Role(Role::User) => router.route_layer(middleware::from_fn(require_user)),
    }
}
