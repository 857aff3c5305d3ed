//! Landing pages.

use axum::{extract::Extension, response::Redirect, routing::get, Router};
use serde::Serialize;

use crate::api::middleware::guard;
use crate::api::AppState;
use crate::config::{
    ADMIN_HOME_TARGET, ADMIN_LANDING_ROUTE, PUBLIC_LANDING_ROUTE, USER_LANDING_ROUTE,
};
use crate::domain::{Principal, Requirement, Role};
use crate::types::View;

#[derive(Serialize)]
pub struct HomeModel {
    #[serde(rename = "remoteUser", skip_serializing_if = "Option::is_none")]
    pub remote_user: Option<String>,
}

/// Create the public and per-role landing routes
pub fn home_routes() -> Router<AppState> {
    let admin = guard(
        Router::new().route(ADMIN_LANDING_ROUTE, get(admin_home)),
        Requirement::Role(Role::Admin),
    );
    let user = guard(
        Router::new().route(USER_LANDING_ROUTE, get(user_home)),
        Requirement::Role(Role::User),
    );

    Router::new()
        .route(PUBLIC_LANDING_ROUTE, get(home))
        .merge(admin)
        .merge(user)
}

/// Public home page
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses((status = 200, description = "Home view"))
)]
pub async fn home(principal: Option<Extension<Principal>>) -> View<HomeModel> {
    View::new(
        "home",
        HomeModel {
            remote_user: principal.map(|Extension(p)| p.username),
        },
    )
}

/// Administrator landing route; forwards to the bid list
#[utoipa::path(
    get,
    path = "/admin/home",
    tag = "Home",
    responses(
        (status = 303, description = "Redirect to the bid list"),
        (status = 403, description = "Denial view")
    )
)]
pub async fn admin_home() -> Redirect {
    Redirect::to(ADMIN_HOME_TARGET)
}

/// Regular user landing page
#[utoipa::path(
    get,
    path = "/user/home",
    tag = "Home",
    responses(
        (status = 200, description = "User home view"),
        (status = 403, description = "Denial view")
    )
)]
pub async fn user_home(Extension(principal): Extension<Principal>) -> View<HomeModel> {
    View::new(
        "userHome",
        HomeModel {
            remote_user: Some(principal.username),
        },
    )
}
