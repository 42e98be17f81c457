use super::*;

fn ada() -> User {
    User {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

// =============================================================
// Defaults and initials
// =============================================================

#[test]
fn default_state_is_signed_out_and_unchecked() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.logged_in);
    assert!(state.error.is_none());
    assert!(!state.session_checked);
}

#[test]
fn user_initials_empty_without_user() {
    assert_eq!(AuthState::default().user_initials(), "");
}

#[test]
fn user_initials_concatenates_first_letters_as_stored() {
    let state = reduce(&AuthState::default(), AuthAction::LoginUser { user: ada() });
    assert_eq!(state.user_initials(), "AL");

    let lowercase = reduce(
        &AuthState::default(),
        AuthAction::LoginUser {
            user: User {
                first_name: "grace".to_owned(),
                last_name: "hopper".to_owned(),
                email: "grace@example.com".to_owned(),
            },
        },
    );
    assert_eq!(lowercase.user_initials(), "gh");
}

// =============================================================
// Reducer transitions
// =============================================================

#[test]
fn session_checked_applies_probe_result() {
    let state = reduce(
        &AuthState::default(),
        AuthAction::SessionChecked {
            logged_in: true,
            user: Some(ada()),
        },
    );
    assert!(state.logged_in);
    assert_eq!(state.user, Some(ada()));
    assert!(state.error.is_none());
    assert!(state.session_checked);
}

#[test]
fn session_checked_logged_out_never_installs_a_user() {
    let state = reduce(
        &AuthState::default(),
        AuthAction::SessionChecked {
            logged_in: false,
            user: Some(ada()),
        },
    );
    assert!(!state.logged_in);
    assert!(state.user.is_none());
    assert!(state.session_checked);
}

#[test]
fn login_sets_user_and_clears_error() {
    let before = AuthState {
        error: Some(ActionError {
            action: ActionKind::LoginUser,
            message: "Wrong password.".to_owned(),
        }),
        ..AuthState::default()
    };
    let state = reduce(&before, AuthAction::LoginUser { user: ada() });
    assert!(state.logged_in);
    assert_eq!(state.user, Some(ada()));
    assert!(state.error.is_none());
}

#[test]
fn logout_clears_session_and_error() {
    let before = AuthState {
        user: Some(ada()),
        logged_in: true,
        error: Some(ActionError {
            action: ActionKind::LogoutUser,
            message: "earlier failure".to_owned(),
        }),
        session_checked: true,
    };
    let state = reduce(&before, AuthAction::LogoutUser);
    assert!(!state.logged_in);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn set_error_patches_only_the_error_field() {
    let before = AuthState {
        user: Some(ada()),
        logged_in: true,
        error: None,
        session_checked: true,
    };
    let state = reduce(
        &before,
        AuthAction::SetError {
            error: ActionError {
                action: ActionKind::RegisterUser,
                message: "Email already taken.".to_owned(),
            },
        },
    );
    assert_eq!(state.user, before.user);
    assert_eq!(state.logged_in, before.logged_in);
    assert_eq!(
        state.error,
        Some(ActionError {
            action: ActionKind::RegisterUser,
            message: "Email already taken.".to_owned(),
        })
    );
}

#[test]
fn clear_error_after_set_error_restores_previous_state() {
    let before = AuthState {
        user: Some(ada()),
        logged_in: true,
        error: None,
        session_checked: true,
    };
    let errored = reduce(
        &before,
        AuthAction::SetError {
            error: ActionError {
                action: ActionKind::LoginUser,
                message: "nope".to_owned(),
            },
        },
    );
    let state = reduce(&errored, AuthAction::ClearError);
    assert_eq!(state, before);
}

#[test]
fn clear_error_is_a_noop_when_no_error_present() {
    let before = AuthState {
        user: Some(ada()),
        logged_in: true,
        error: None,
        session_checked: true,
    };
    assert_eq!(reduce(&before, AuthAction::ClearError), before);
}
