//! Auth store: owns the [`AuthState`] signal and the operations that mutate it.
//!
//! DESIGN
//! ======
//! Data and behavior are deliberately separate: `AuthState` is a plain value,
//! the store holds it behind a signal and replaces it through the reducer.
//! The store is constructed once in `App` with its API client and navigator
//! injected, then shared via context; nothing here is a module-level global.
//!
//! Every remote failure is non-fatal: it becomes the state's `error` field
//! for the UI to render. No retries, no timeouts.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::{Credentials, RegisterRequest};
use crate::state::auth::{ActionError, ActionKind, AuthAction, AuthState, reduce};
use crate::util::nav::Navigator;

/// The store as wired in the running app.
pub type AppAuthStore = AuthStore<HttpAuthApi>;

/// Service object holding the auth state and its mutating operations.
#[derive(Clone)]
pub struct AuthStore<A: AuthApi> {
    state: RwSignal<AuthState>,
    api: A,
    navigator: Navigator,
}

impl<A: AuthApi> AuthStore<A> {
    /// Create a store with empty state. Call [`check_session`] once afterwards
    /// to pick up an existing session.
    ///
    /// [`check_session`]: AuthStore::check_session
    pub fn new(api: A, navigator: Navigator) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            api,
            navigator,
        }
    }

    /// The reactive state handle, for views and guards.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Current state without registering a reactive dependency.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    fn apply(&self, action: AuthAction) {
        self.state.update(|state| *state = reduce(state, action));
    }

    /// Ask the server whether a session is active and sync local state.
    ///
    /// A failed probe settles the state as signed-out rather than leaving the
    /// redirect guard waiting forever; the failure is logged, not rendered,
    /// and any error already on display stays put.
    pub async fn check_session(&self) {
        match self.api.check_session().await {
            Ok(status) => {
                self.apply(AuthAction::SessionChecked {
                    logged_in: status.logged_in,
                    user: status.user,
                });
            }
            Err(err) => {
                log::warn!("session check failed: {err}");
                let prior_error = self.snapshot().error;
                self.apply(AuthAction::SessionChecked {
                    logged_in: false,
                    user: None,
                });
                if let Some(error) = prior_error {
                    self.apply(AuthAction::SetError { error });
                }
            }
        }
    }

    /// Create an account, then establish a fresh session for it.
    ///
    /// Registration alone is not trusted to carry a session; the nested login
    /// performs the single post-registration navigation.
    pub async fn register_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        password_verify: &str,
    ) {
        let request = RegisterRequest {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            password_verify: password_verify.to_owned(),
        };
        match self.api.register_user(&request).await {
            Ok(user) => {
                self.apply(AuthAction::RegisterUser { user });
                self.login_user(email, password).await;
            }
            Err(err) => {
                log::warn!("register failed: {err}");
                self.set_error(ActionKind::RegisterUser, err.message());
            }
        }
    }

    /// Authenticate and, on success, navigate to the application root.
    pub async fn login_user(&self, email: &str, password: &str) {
        let credentials = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        match self.api.login_user(&credentials).await {
            Ok(user) => {
                self.apply(AuthAction::LoginUser { user });
                self.navigator.go_to("/");
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                self.set_error(ActionKind::LoginUser, err.message());
            }
        }
    }

    /// End the session. The local session is cleared even when the server
    /// call fails, so the UI never keeps showing an authenticated session the
    /// server may already have dropped; the failure is still recorded.
    pub async fn logout_user(&self) {
        match self.api.logout_user().await {
            Ok(()) => {
                self.apply(AuthAction::LogoutUser);
                self.navigator.go_to("/");
            }
            Err(err) => {
                log::warn!("logout failed: {err}");
                self.apply(AuthAction::LogoutUser);
                self.set_error(ActionKind::LogoutUser, err.message());
            }
        }
    }

    /// Record a failure for the UI. Local, no network call.
    pub fn set_error(&self, action: ActionKind, message: impl Into<String>) {
        self.apply(AuthAction::SetError {
            error: ActionError {
                action,
                message: message.into(),
            },
        });
    }

    /// Dismiss the current failure, if any. Local, no network call.
    pub fn clear_error(&self) {
        self.apply(AuthAction::ClearError);
    }
}
