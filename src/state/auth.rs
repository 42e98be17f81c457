//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The state is a plain value;
//! every mutation goes through [`reduce`], which is exhaustive over the
//! closed [`AuthAction`] set.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication view state: who is signed in, and the last auth failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Identity of the signed-in user, or `None`.
    pub user: Option<User>,
    /// True iff a server session is currently established.
    pub logged_in: bool,
    /// Most recent auth failure, until dismissed via `ClearError`.
    pub error: Option<ActionError>,
    /// True once the initial session probe (or any auth action) has resolved.
    /// Guards against redirecting to `/login` before the status is known.
    pub session_checked: bool,
}

impl AuthState {
    /// First character of the first name followed by the first character of
    /// the last name, exactly as stored; empty when no user is present.
    pub fn user_initials(&self) -> String {
        let Some(user) = &self.user else {
            return String::new();
        };
        user.first_name
            .chars()
            .next()
            .into_iter()
            .chain(user.last_name.chars().next())
            .collect()
    }
}

/// Which mutating operation produced an [`ActionError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    RegisterUser,
    LoginUser,
    LogoutUser,
}

/// The most recent auth failure, tagged by the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionError {
    pub action: ActionKind,
    pub message: String,
}

/// The closed set of transitions the auth state can undergo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// The session probe resolved. A `logged_in == false` payload never
    /// installs a user.
    SessionChecked { logged_in: bool, user: Option<User> },
    /// Login succeeded against the server.
    LoginUser { user: User },
    /// Registration succeeded against the server.
    RegisterUser { user: User },
    /// The local session ended (logout attempt, successful or not).
    LogoutUser,
    /// Record a failure for the UI to render.
    SetError { error: ActionError },
    /// Dismiss the current failure, if any.
    ClearError,
}

/// Compute the next auth state. Pure; last write wins.
pub fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SessionChecked { logged_in, user } => AuthState {
            user: if logged_in { user } else { None },
            logged_in,
            error: None,
            session_checked: true,
        },
        AuthAction::LoginUser { user } | AuthAction::RegisterUser { user } => AuthState {
            user: Some(user),
            logged_in: true,
            error: None,
            session_checked: true,
        },
        AuthAction::LogoutUser => AuthState {
            user: None,
            logged_in: false,
            error: None,
            session_checked: true,
        },
        AuthAction::SetError { error } => AuthState {
            error: Some(error),
            ..state.clone()
        },
        AuthAction::ClearError => AuthState {
            error: None,
            ..state.clone()
        },
    }
}
