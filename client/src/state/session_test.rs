use std::cell::Cell;
use std::future::{pending, ready};

use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::User;
use crate::state::dashboard::{AUTH_REQUIRED_MESSAGE, DashboardState, FETCH_FAILED_MESSAGE};
use crate::util::schedule::TaskGuard;

/// How the mock backend answers a logout.
#[derive(Clone, Copy)]
enum LogoutBehaviour {
    Succeed,
    Fail,
    Hang,
}

struct MockApi {
    profile: Result<User, ApiError>,
    logout: LogoutBehaviour,
    fetch_calls: Cell<u32>,
    logout_calls: Cell<u32>,
    /// Cancelled while the fetch is in flight, as a page teardown would.
    teardown: Option<TaskGuard>,
}

impl MockApi {
    fn new(profile: Result<User, ApiError>) -> Self {
        Self {
            profile,
            logout: LogoutBehaviour::Succeed,
            fetch_calls: Cell::new(0),
            logout_calls: Cell::new(0),
            teardown: None,
        }
    }

    fn torn_down_during_fetch(mut self, guard: &TaskGuard) -> Self {
        self.teardown = Some(guard.clone());
        self
    }

    fn with_logout(mut self, logout: LogoutBehaviour) -> Self {
        self.logout = logout;
        self
    }
}

impl SessionApi for MockApi {
    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if let Some(guard) = &self.teardown {
            guard.cancel();
        }
        self.profile.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        match self.logout {
            LogoutBehaviour::Succeed => Ok(()),
            LogoutBehaviour::Fail => Err(ApiError::from_status(500)),
            LogoutBehaviour::Hang => pending().await,
        }
    }
}

fn ann() -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: Some("Ann".to_owned()) }
}

// =============================================================
// load_dashboard
// =============================================================

#[test]
fn load_dashboard_200_renders_profile() {
    let api = MockApi::new(Ok(ann()));
    let transition = block_on(load_dashboard(&api));
    let user = transition.state.user().expect("user loaded");
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.display_name(), "Ann");
    assert_eq!(transition.state.error_message(), None);
    assert_eq!(transition.redirect, None);
    assert_eq!(api.fetch_calls.get(), 1);
}

#[test]
fn load_dashboard_401_schedules_login_redirect() {
    let api = MockApi::new(Err(ApiError::from_status(401)));
    let transition = block_on(load_dashboard(&api));
    assert_eq!(transition.state.error_message(), Some(AUTH_REQUIRED_MESSAGE));
    let redirect = transition.redirect.expect("redirect scheduled");
    assert_eq!(redirect.path, "/login");
    assert!(redirect.delay >= Duration::from_millis(2000));
}

#[test]
fn load_dashboard_500_shows_generic_error_without_navigation() {
    let api = MockApi::new(Err(ApiError::from_status(500)));
    let transition = block_on(load_dashboard(&api));
    assert!(matches!(transition.state, DashboardState::Failed { message: FETCH_FAILED_MESSAGE, .. }));
    assert_eq!(transition.redirect, None);
}

#[test]
fn load_dashboard_never_calls_logout() {
    let api = MockApi::new(Ok(ann()));
    let _ = block_on(load_dashboard(&api));
    assert_eq!(api.logout_calls.get(), 0);
}

// =============================================================
// load_dashboard_guarded
// =============================================================

#[test]
fn guarded_load_applies_when_page_is_alive() {
    let guard = TaskGuard::new();
    let api = MockApi::new(Ok(ann()));
    let transition = block_on(load_dashboard_guarded(&api, &guard)).expect("transition applied");
    assert_eq!(transition.state.user(), Some(&ann()));
}

#[test]
fn guarded_load_discards_profile_after_teardown() {
    let guard = TaskGuard::new();
    let api = MockApi::new(Ok(ann())).torn_down_during_fetch(&guard);
    assert_eq!(block_on(load_dashboard_guarded(&api, &guard)), None);
    assert_eq!(api.fetch_calls.get(), 1);
}

#[test]
fn guarded_load_drops_login_redirect_after_teardown() {
    let guard = TaskGuard::new();
    let api = MockApi::new(Err(ApiError::from_status(401))).torn_down_during_fetch(&guard);
    assert_eq!(block_on(load_dashboard_guarded(&api, &guard)), None);
}

#[test]
fn guarded_load_keeps_login_redirect_while_alive() {
    let guard = TaskGuard::new();
    let api = MockApi::new(Err(ApiError::from_status(401)));
    let transition = block_on(load_dashboard_guarded(&api, &guard)).expect("transition applied");
    assert_eq!(transition.redirect.map(|r| r.path), Some("/login"));
}

// =============================================================
// end_session
// =============================================================

#[test]
fn end_session_success_navigates_to_login() {
    let api = MockApi::new(Ok(ann()));
    assert_eq!(block_on(end_session(&api, pending::<()>())), "/login");
    assert_eq!(api.logout_calls.get(), 1);
}

#[test]
fn end_session_error_still_navigates_to_login() {
    let api = MockApi::new(Ok(ann())).with_logout(LogoutBehaviour::Fail);
    assert_eq!(block_on(end_session(&api, pending::<()>())), "/login");
    assert_eq!(api.logout_calls.get(), 1);
}

#[test]
fn end_session_timeout_still_navigates_to_login() {
    let api = MockApi::new(Ok(ann())).with_logout(LogoutBehaviour::Hang);
    assert_eq!(block_on(end_session(&api, ready(()))), "/login");
    assert_eq!(api.logout_calls.get(), 1);
}
