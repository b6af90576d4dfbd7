//! Profile-read and logout flows over the `SessionApi` capability.
//!
//! TRADE-OFFS
//! ==========
//! Logout is best-effort: the client always lands on `/login`, even when the
//! backend call fails or hangs, so a broken backend can never trap the user
//! on the dashboard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

use super::dashboard::DashboardTransition;
use crate::net::api::SessionApi;
use crate::routes;
use crate::util::schedule::TaskGuard;

/// Upper bound on how long logout waits for the backend.
pub const LOGOUT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Fetch the current user once and turn the outcome into a dashboard
/// transition.
pub async fn load_dashboard<A: SessionApi>(api: &A) -> DashboardTransition {
    let result = api.fetch_current_user().await;
    match &result {
        Ok(user) => log::info!("loaded profile for user {}", user.id),
        Err(err) => log::warn!("profile fetch failed: {err}"),
    }
    DashboardTransition::from_fetch(result)
}

/// `load_dashboard` for a page that may be torn down while the read is in
/// flight. Returns `None` when `guard` was cancelled before the profile
/// arrived; the caller must then neither apply state nor schedule anything.
pub async fn load_dashboard_guarded<A: SessionApi>(api: &A, guard: &TaskGuard) -> Option<DashboardTransition> {
    let transition = load_dashboard(api).await;
    if !guard.is_alive() {
        log::debug!("dashboard closed before the profile arrived");
        return None;
    }
    Some(transition)
}

/// Invalidate the session, giving up once `timeout` completes, and return
/// where the client must navigate next. Always `/login`.
pub async fn end_session<A, T>(api: &A, timeout: T) -> &'static str
where
    A: SessionApi,
    T: Future<Output = ()>,
{
    let logout = pin!(api.logout());
    let timeout = pin!(timeout);
    match select(logout, timeout).await {
        Either::Left((Ok(()), _)) => log::info!("session ended"),
        Either::Left((Err(err), _)) => log::warn!("logout failed, continuing to login: {err}"),
        Either::Right(((), _)) => log::warn!("logout timed out, continuing to login"),
    }
    routes::LOGIN
}
