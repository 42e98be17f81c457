//! Injectable fire-and-forget redirect for post-auth navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store navigates after successful login/register/logout. Wrapping
//! the redirect in a value lets the store stay testable: the browser build
//! assigns `window.location`, tests record the requested paths.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::sync::Arc;

/// A programmatic redirect target.
///
/// `Send + Sync` so the auth store holding it can live in Leptos context.
#[derive(Clone)]
pub struct Navigator {
    go_to: Arc<dyn Fn(&str) + Send + Sync>,
}

impl Navigator {
    /// Wrap an arbitrary redirect closure.
    pub fn new(go_to: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            go_to: Arc::new(go_to),
        }
    }

    /// Full-page browser redirect via `window.location`. No-op outside the
    /// hydrated WASM build, where there is no window to redirect.
    pub fn browser() -> Self {
        Self::new(|path| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = path;
            }
        })
    }

    /// Request a redirect to `path`. Fire-and-forget.
    pub fn go_to(&self, path: &str) {
        (self.go_to)(path);
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Navigator")
    }
}
