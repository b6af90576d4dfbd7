//! Login page with the Google OAuth entry button.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::util::browser;

/// Hand the browser over to the backend's OAuth entry point.
///
/// `navigate` performs the full-page navigation; it is called exactly once.
pub(crate) fn start_google_login<N>(config: &ClientConfig, navigate: N)
where
    N: FnOnce(&str),
{
    let url = config.google_login_url();
    log::info!("starting Google login via {url}");
    navigate(&url);
}

/// Login page — clicking the button leaves the app for the backend, which
/// redirects on to Google.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let href = config.google_login_url();

    view! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-title">"Welcome!"</h1>
                <a
                    href=href
                    class="google-login-btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        start_google_login(&config, browser::assign_location);
                    }
                >
                    <svg width="20" height="20" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                        <g fill="none" fill-rule="evenodd">
                            <path d="M17.6 9.2l-.1-1.8H9v3.4h4.8C13.6 12 13 13 12 13.6v2.2h3a8.8 8.8 0 0 0 2.6-6.6z" fill="#FFF"/>
                            <path d="M9 18c2.4 0 4.5-.8 6-2.2l-3-2.2a5.4 5.4 0 0 1-8-2.9H1V13a9 9 0 0 0 8 5z" fill="#FFF"/>
                            <path d="M4 10.7a5.4 5.4 0 0 1 0-3.4V5H1a9 9 0 0 0 0 8l3-2.3z" fill="#FFF"/>
                            <path d="M9 3.6c1.3 0 2.5.4 3.4 1.3L15 2.3A9 9 0 0 0 1 5l3 2.4a5.4 5.4 0 0 1 5-3.7z" fill="#FFF"/>
                        </g>
                    </svg>
                    "Sign in with Google"
                </a>
                <p class="login-desc">"Sign in quickly with your Google account."</p>
            </div>
        </div>
    }
}
