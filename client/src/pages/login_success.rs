//! Confirmation screen the backend redirects to after the OAuth callback.

#[cfg(test)]
#[path = "login_success_test.rs"]
mod login_success_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::routes;
use crate::util::schedule::ScheduledRedirect;

/// How long the confirmation stays on screen.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// The navigation this page schedules on mount.
pub fn continue_to_dashboard() -> ScheduledRedirect {
    ScheduledRedirect { path: routes::DASHBOARD, delay: SUCCESS_REDIRECT_DELAY }
}

/// Shows a short confirmation, then moves on to the dashboard. Leaving the
/// page early cancels the pending navigation.
#[component]
pub fn LoginSuccessPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::schedule::{TaskGuard, spawn_navigation};

        log::info!("login succeeded, continuing to dashboard");
        let guard = TaskGuard::bound_to_owner();
        spawn_navigation(continue_to_dashboard(), guard, leptos_router::hooks::use_navigate());
    }

    view! {
        <div class="success-container">
            <div class="success-card">
                <div class="success-icon">"✅"</div>
                <h1 class="success-title">"Login successful!"</h1>
                <p class="success-desc">"Please wait a moment..."</p>
                <div class="loading-spinner"></div>
            </div>
        </div>
    }
}
