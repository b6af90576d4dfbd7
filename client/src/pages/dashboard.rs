//! Dashboard page showing the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page protects itself: it reads `/auth/me` on mount and, on a 401,
//! shows a message and schedules a return to `/login`. The profile read and
//! that redirect are both bound to the page's teardown.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::User;
use crate::state::dashboard::DashboardState;

/// Dashboard page — loading, error, or the profile card with a logout button.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let state = RwSignal::new(DashboardState::default());
    let logging_out = RwSignal::new(false);
    let next_path = RwSignal::new(None::<&'static str>);

    // Logout resolves to a path; navigation happens here, in the page scope.
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = next_path.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpSessionApi;
        use crate::state::session::load_dashboard_guarded;
        use crate::util::schedule::{TaskGuard, spawn_navigation};

        let guard = TaskGuard::bound_to_owner();
        let api = HttpSessionApi::new(config.get_value());
        let navigate_later = use_navigate();
        leptos::task::spawn_local(async move {
            let Some(transition) = load_dashboard_guarded(&api, &guard).await else {
                return;
            };
            state.set(transition.state);
            if let Some(redirect) = transition.redirect {
                spawn_navigation(redirect, guard, navigate_later);
            }
        });
    }

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::HttpSessionApi;
            use crate::state::session::{LOGOUT_TIMEOUT, end_session};

            let api = HttpSessionApi::new(config.get_value());
            leptos::task::spawn_local(async move {
                let path = end_session(&api, gloo_timers::future::sleep(LOGOUT_TIMEOUT)).await;
                let _ = next_path.try_set(Some(path));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, next_path);
        }
    };

    view! {
        {move || match state.get() {
            DashboardState::Loading => {
                view! {
                    <div class="center-screen">
                        <div class="loading-box">
                            <div class="spinner"></div>
                            <p>"Loading user information..."</p>
                        </div>
                    </div>
                }
                    .into_any()
            }
            DashboardState::Failed { message, .. } => {
                view! {
                    <div class="center-screen">
                        <div class="error-box">
                            <p>"❌ " {message}</p>
                        </div>
                    </div>
                }
                    .into_any()
            }
            DashboardState::Loaded(user) => {
                view! {
                    <div class="dashboard-container">
                        <div class="dashboard-card">
                            <header class="dashboard-header">
                                <h1>"Dashboard"</h1>
                                <button
                                    class="logout-btn"
                                    on:click=on_logout
                                    disabled=move || logging_out.get()
                                >
                                    "Log out"
                                </button>
                            </header>
                            <ProfileSection user/>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ProfileSection(user: User) -> impl IntoView {
    let greeting = format!("Welcome, {}!", user.display_name());
    let name = user.name.clone().unwrap_or_else(|| "-".to_owned());

    view! {
        <div class="user-section">
            <h2>{greeting}</h2>
            <div class="user-card">
                <div class="field">
                    <strong>"User ID"</strong>
                    <div class="value mono">{user.id}</div>
                </div>
                <div class="field">
                    <strong>"Email"</strong>
                    <div class="value">{user.email}</div>
                </div>
                <div class="field">
                    <strong>"Name"</strong>
                    <div class="value">{name}</div>
                </div>
            </div>
            <div class="info-box">
                <strong>"About this data"</strong>
                <p>
                    "This profile was read from your session token. The token lives in an HttpOnly cookie, \
                     so scripts on this page cannot read it directly."
                </p>
            </div>
        </div>
    }
}
