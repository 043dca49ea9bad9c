//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation, including the first one after boot, is checked against
//! the target route's static requirements and the session's predicates.
//! The guard is a pure function of `(route, session)`; following the
//! redirects it asks for is the caller's job (see `App::navigate`).

use std::fmt;

use crate::state::session::Session;

/// Static requirements declared by each route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Snippets,
    Tags,
    Profile,
    Admin,
    Login,
}

/// Landing route for authenticated users and for denied admin access.
pub const DEFAULT_ROUTE: Route = Route::Snippets;
pub const LOGIN_ROUTE: Route = Route::Login;

impl Route {
    pub const ALL: [Route; 5] = [Route::Snippets, Route::Tags, Route::Profile, Route::Admin, Route::Login];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Snippets => "/snippets",
            Self::Tags => "/tags",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
            Self::Login => "/login",
        }
    }

    #[must_use]
    pub const fn meta(self) -> RouteMeta {
        match self {
            Self::Snippets | Self::Tags | Self::Profile => RouteMeta { requires_auth: true, requires_admin: false },
            Self::Admin => RouteMeta { requires_auth: true, requires_admin: true },
            Self::Login => RouteMeta { requires_auth: false, requires_admin: false },
        }
    }

    /// Resolve a path. `/` is a static redirect to the default route; a
    /// trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        if trimmed == "/" || trimmed.is_empty() {
            return Some(DEFAULT_ROUTE);
        }
        let normalized = trimmed.trim_end_matches('/');
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDefault,
}

impl GuardDecision {
    /// Where a redirect should land, or `None` for `Allow`.
    #[must_use]
    pub const fn redirect_target(self) -> Option<Route> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_ROUTE),
            Self::RedirectToDefault => Some(DEFAULT_ROUTE),
        }
    }
}

/// Decide a navigation to `target` for the given session.
#[must_use]
pub fn guard(target: Route, session: &Session) -> GuardDecision {
    decide(target.meta(), target == LOGIN_ROUTE, session.is_logged_in(), session.is_admin())
}

/// Order matters: auth before admin, and the login special case last so an
/// authenticated user can always leave the login route.
#[must_use]
pub fn decide(meta: RouteMeta, is_login_route: bool, logged_in: bool, admin: bool) -> GuardDecision {
    if meta.requires_auth && !logged_in {
        return GuardDecision::RedirectToLogin;
    }
    if meta.requires_admin && !admin {
        return GuardDecision::RedirectToDefault;
    }
    if is_login_route && logged_in {
        return GuardDecision::RedirectToDefault;
    }
    GuardDecision::Allow
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
