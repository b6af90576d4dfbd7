//! Full-page browser navigation.
//!
//! Leaving the SPA (e.g. to start the OAuth dance on the backend) must go
//! through `window.location`, not the client router.

/// Replace the current document with `url`. No-op outside the browser.
pub fn assign_location(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.location().assign(url) {
                    log::error!("navigation to {url} failed: {err:?}");
                }
            }
            None => log::error!("no window available for navigation to {url}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
