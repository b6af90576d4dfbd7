//! Session capability and its HTTP implementation.
//!
//! Client-side (hydrate): real credential-bearing calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the session cookie only
//! exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one of two kinds. A 401 becomes
//! `ApiError::Unauthenticated`; any other status, transport failure or
//! undecodable body becomes `ApiError::Unknown`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::ClientConfig;

/// HTTP status the backend uses for a missing or invalid session.
pub const STATUS_UNAUTHORIZED: u16 = 401;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the session cookie (HTTP 401).
    #[error("not authenticated")]
    Unauthenticated,
    /// Anything else: other statuses, network errors, bad bodies.
    #[error("request failed: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == STATUS_UNAUTHORIZED {
            Self::Unauthenticated
        } else {
            Self::Unknown(unexpected_status_message(status))
        }
    }
}

fn unexpected_status_message(status: u16) -> String {
    format!("unexpected status {status}")
}

/// What the pages need from the backend session, and nothing about cookies.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Read the profile of the user owning the current session.
    async fn fetch_current_user(&self) -> Result<User, ApiError>;

    /// Invalidate the current session.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// `SessionApi` backed by the configured backend over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    config: ClientConfig,
}

impl HttpSessionApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl SessionApi for HttpSessionApi {
    /// `GET /auth/me` with credentials included.
    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.current_user_url())
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Unknown(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status()));
            }
            resp.json::<User>().await.map_err(|e| ApiError::Unknown(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.config;
            Err(ApiError::Unknown("not available on server".to_owned()))
        }
    }

    /// `POST /auth/logout` with credentials included and an empty body.
    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.logout_url())
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Unknown(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.config;
            Err(ApiError::Unknown("not available on server".to_owned()))
        }
    }
}
