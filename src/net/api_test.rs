use super::*;

#[test]
fn auth_endpoints_are_rooted_under_api_auth() {
    assert_eq!(SESSION_ENDPOINT, "/api/auth/session");
    assert_eq!(REGISTER_ENDPOINT, "/api/auth/register");
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}

#[test]
fn session_check_failed_message_formats_status() {
    assert_eq!(session_check_failed_message(500), "session check failed: 500");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(400), "registration failed: 400");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn logout_failed_message_formats_status() {
    assert_eq!(logout_failed_message(502), "logout failed: 502");
}

#[test]
fn api_error_message_prefers_server_text() {
    let err = ApiError::Server {
        status: 401,
        message: "Wrong password.".to_owned(),
    };
    assert_eq!(err.message(), "Wrong password.");
}

#[test]
fn api_error_message_passes_through_network_text() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.message(), "connection refused");
}

#[test]
fn api_error_message_names_ssr_stub() {
    assert_eq!(ApiError::Unavailable.message(), "not available on server");
}
