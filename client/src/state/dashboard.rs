//! Dashboard page state machine.
//!
//! `Loading` → `Loaded(user)` on success, `Failed` on any error. An
//! authentication failure additionally yields a delayed redirect to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Duration;

use crate::net::api::ApiError;
use crate::net::types::User;
use crate::routes;
use crate::util::schedule::ScheduledRedirect;

/// Shown when the backend rejects the session.
pub const AUTH_REQUIRED_MESSAGE: &str = "Login required. Redirecting to the login page...";
/// Shown for every other failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load user information.";
/// Pause before sending an unauthenticated visitor back to `/login`.
pub const AUTH_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Unauthenticated,
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(User),
    Failed { kind: FailureKind, message: &'static str },
}

impl DashboardState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Loaded(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Failed { message, .. } => Some(*message),
            _ => None,
        }
    }
}

/// Result of applying a profile fetch to the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardTransition {
    pub state: DashboardState,
    pub redirect: Option<ScheduledRedirect>,
}

impl DashboardTransition {
    #[must_use]
    pub fn from_fetch(result: Result<User, ApiError>) -> Self {
        match result {
            Ok(user) => Self { state: DashboardState::Loaded(user), redirect: None },
            Err(ApiError::Unauthenticated) => Self {
                state: DashboardState::Failed { kind: FailureKind::Unauthenticated, message: AUTH_REQUIRED_MESSAGE },
                redirect: Some(ScheduledRedirect { path: routes::LOGIN, delay: AUTH_REDIRECT_DELAY }),
            },
            Err(ApiError::Unknown(_)) => Self {
                state: DashboardState::Failed { kind: FailureKind::Unknown, message: FETCH_FAILED_MESSAGE },
                redirect: None,
            },
        }
    }
}
