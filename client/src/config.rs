//! Backend location and endpoint builders.
//!
//! SYSTEM CONTEXT
//! ==============
//! One configured base URL addresses every backend call: the login
//! navigation, the profile read and the logout write. The host provides the
//! value through Leptos context during SSR and writes it into a `<meta>` tag;
//! the hydrated client reads it back from there.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Name of the `<meta>` tag carrying the backend URL into the browser.
pub const BACKEND_URL_META: &str = "backend-url";

const GOOGLE_LOGIN_PATH: &str = "/auth/google/login";
const CURRENT_USER_PATH: &str = "/auth/me";
const LOGOUT_PATH: &str = "/auth/logout";

/// Client-side view of the backend location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }
}

impl ClientConfig {
    /// Build a config from a base URL; surrounding whitespace and trailing
    /// slashes are dropped so endpoint joins never double up.
    #[must_use]
    pub fn new(backend_url: &str) -> Self {
        let trimmed = backend_url.trim().trim_end_matches('/');
        let backend_url = if trimmed.is_empty() { DEFAULT_BACKEND_URL } else { trimmed };
        Self { backend_url: backend_url.to_owned() }
    }

    /// Resolve the config in the current environment.
    ///
    /// In the browser this reads the `<meta name="backend-url">` tag written
    /// by the server shell, falling back to the build-time default.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let from_meta = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{BACKEND_URL_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            if let Some(url) = from_meta {
                return Self::new(&url);
            }
            log::warn!("backend-url meta tag missing, using build default");
        }
        Self::default()
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Entry point of the backend-driven Google OAuth dance.
    #[must_use]
    pub fn google_login_url(&self) -> String {
        self.endpoint(GOOGLE_LOGIN_PATH)
    }

    /// Profile of the user owning the session cookie.
    #[must_use]
    pub fn current_user_url(&self) -> String {
        self.endpoint(CURRENT_USER_PATH)
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        self.endpoint(LOGOUT_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url)
    }
}
