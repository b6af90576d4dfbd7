//! Route table for the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` wires these paths into `leptos_router`; the host uses
//! `AppRoute::resolve` to answer `/` with a redirect before rendering.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const LOGIN_SUCCESS: &str = "/login/success";
pub const DASHBOARD: &str = "/dashboard";

/// A page-level destination in the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/` — never rendered, always redirected to `/login`.
    Root,
    Login,
    LoginSuccess,
    Dashboard,
    NotFound,
}

impl AppRoute {
    /// Map a request path to its page. Query strings, fragments and a single
    /// trailing slash are ignored.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "" | ROOT => Self::Root,
            LOGIN => Self::Login,
            LOGIN_SUCCESS => Self::LoginSuccess,
            DASHBOARD => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// Where this route sends the browser instead of rendering, if anywhere.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Root => Some(LOGIN),
            _ => None,
        }
    }
}
