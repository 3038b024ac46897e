//! Full-page navigation issued by the gateway.
//!
//! Guards navigate through the router; the gateway needs a hard reload so
//! that no in-memory state from the invalidated session survives.

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const ADMIN_ROUTE: &str = "/admin";

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Sets `window.location.href`. Skips the reload when already on `path`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            if location.pathname().is_ok_and(|current| current == path) {
                return;
            }
            if location.set_href(path).is_err() {
                leptos::logging::warn!("navigation to {path} failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
