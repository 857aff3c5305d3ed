//! Post-login routing and per-route authorization decisions.

use serde::Serialize;

use super::user::{Principal, Role};
use crate::config::{
    ACCESS_DENIED_REASON, ACCESS_DENIED_ROUTE, ADMIN_LANDING_ROUTE, LOGIN_ROUTE,
    PUBLIC_LANDING_ROUTE, USER_LANDING_ROUTE,
};

/// Roles in landing priority order. The first one a principal holds wins.
pub const ROLE_PRIORITY: [Role; 2] = [Role::Admin, Role::User];

/// Landing route for a role.
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LANDING_ROUTE,
        Role::User => USER_LANDING_ROUTE,
    }
}

/// Destination after a successful login.
///
/// The order of `roles` is irrelevant; a principal without any recognised
/// role lands on the public page.
pub fn route_after_login(roles: &[Role]) -> &'static str {
    ROLE_PRIORITY
        .iter()
        .find(|role| roles.contains(role))
        .map_or(PUBLIC_LANDING_ROUTE, |role| landing_route(*role))
}

/// What a route demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
    Role(Role),
}

impl From<Option<Role>> for Requirement {
    fn from(role: Option<Role>) -> Self {
        role.map_or(Requirement::Public, Requirement::Role)
    }
}

/// Outcome of a per-request authorization check. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuthorizationDecision {
    Granted,
    RedirectToLogin,
    Denied { reason: String },
}

impl AuthorizationDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthorizationDecision::Granted)
    }

    /// Where the caller goes next; `None` means the request proceeds.
    pub fn destination(&self) -> Option<&'static str> {
        match self {
            AuthorizationDecision::Granted => None,
            AuthorizationDecision::RedirectToLogin => Some(LOGIN_ROUTE),
            AuthorizationDecision::Denied { .. } => Some(ACCESS_DENIED_ROUTE),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            AuthorizationDecision::Denied { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Decide whether `principal` may use a route with the given requirement.
///
/// Anonymous callers on a protected route are sent to login; authenticated
/// callers without exactly the required role are denied.
pub fn authorize(
    principal: Option<&Principal>,
    requirement: impl Into<Requirement>,
) -> AuthorizationDecision {
    match (requirement.into(), principal) {
        (Requirement::Public, _) => AuthorizationDecision::Granted,
        (_, None) => AuthorizationDecision::RedirectToLogin,
        (Requirement::Authenticated, Some(_)) => AuthorizationDecision::Granted,
        (Requirement::Role(role), Some(principal)) if principal.has_role(role) => {
            AuthorizationDecision::Granted
        }
        (Requirement::Role(_), Some(_)) => AuthorizationDecision::Denied {
            reason: ACCESS_DENIED_REASON.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Option<Role>) -> Principal {
        Principal {
            id: 1,
            username: "someone".to_string(),
            fullname: "Some One".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_lands_on_admin_home() {
        assert_eq!(route_after_login(&[Role::Admin]), "/admin/home");
    }

    #[test]
    fn test_user_lands_on_user_home() {
        assert_eq!(route_after_login(&[Role::User]), "/user/home");
    }

    #[test]
    fn test_no_role_lands_on_public_page() {
        assert_eq!(route_after_login(&[]), "/");
    }

    #[test]
    fn test_priority_ignores_input_order() {
        assert_eq!(route_after_login(&[Role::User, Role::Admin]), "/admin/home");
        assert_eq!(route_after_login(&[Role::Admin, Role::User]), "/admin/home");
    }

    #[test]
    fn test_public_route_is_always_granted() {
        assert!(authorize(None, None::<Role>).is_granted());
        assert!(authorize(Some(&principal(None)), Requirement::Public).is_granted());
    }

    #[test]
    fn test_anonymous_on_protected_route_redirects_to_login() {
        let decision = authorize(None, Some(Role::Admin));
        assert_eq!(decision, AuthorizationDecision::RedirectToLogin);
        assert_eq!(decision.destination(), Some("/login"));
        assert_eq!(decision.reason(), None);

        let decision = authorize(None, Requirement::Authenticated);
        assert_eq!(decision, AuthorizationDecision::RedirectToLogin);
    }

    #[test]
    fn test_wrong_role_is_denied_with_reason() {
        let user = principal(Some(Role::User));
        let decision = authorize(Some(&user), Some(Role::Admin));
        assert!(!decision.is_granted());
        assert_eq!(decision.destination(), Some("/access-denied"));
        assert!(!decision.reason().unwrap().is_empty());
    }

    #[test]
    fn test_role_match_is_exact() {
        let admin = principal(Some(Role::Admin));
        assert!(authorize(Some(&admin), Some(Role::Admin)).is_granted());
        assert!(!authorize(Some(&admin), Some(Role::User)).is_granted());
    }

    #[test]
    fn test_unknown_role_is_denied_on_role_routes_only() {
        let nobody = principal(None);
        assert!(!authorize(Some(&nobody), Some(Role::User)).is_granted());
        assert!(authorize(Some(&nobody), Requirement::Authenticated).is_granted());
    }
}
