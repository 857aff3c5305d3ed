//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, home_handler, user_handler};
use crate::domain::{
    BidList, CurvePoint, Principal, Rating, Role, RuleName, Trade, UserForm, UserResponse,
};

/// OpenAPI documentation for Poseidon
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Poseidon",
        version = "0.1.0",
        description = "Back office for bids, curve points, ratings, rule names and trades",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login_page,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::access_denied,
        // Landing pages
        home_handler::home,
        home_handler::admin_home,
        home_handler::user_home,
        // User directory
        user_handler::list_users,
        user_handler::add_user_form,
        user_handler::create_user,
        user_handler::update_user_form,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            // Reference records
            BidList,
            CurvePoint,
            Rating,
            RuleName,
            Trade,
            // Users
            Role,
            Principal,
            UserForm,
            UserResponse,
            auth_handler::LoginRequest,
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Authentication", description = "Login, logout and the denial view"),
        (name = "Home", description = "Landing pages"),
        (name = "Users", description = "User directory (administrators only)")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the session cookie
struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    crate::config::SESSION_COOKIE,
                    "Signed session token set by POST /login",
                ))),
            );
        }
    }
}
