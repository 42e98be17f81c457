use super::*;

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_str(
        r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
    )
    .unwrap();
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn session_status_defaults_user_to_none() {
    let status: SessionStatus = serde_json::from_str(r#"{"loggedIn":false}"#).unwrap();
    assert!(!status.logged_in);
    assert!(status.user.is_none());
}

#[test]
fn session_status_carries_user_when_logged_in() {
    let status: SessionStatus = serde_json::from_str(
        r#"{"loggedIn":true,"user":{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}}"#,
    )
    .unwrap();
    assert!(status.logged_in);
    assert_eq!(status.user.unwrap().first_name, "Ada");
}

#[test]
fn register_request_serializes_camel_case_keys() {
    let body = RegisterRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "difference-engine".to_owned(),
        password_verify: "difference-engine".to_owned(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["passwordVerify"], "difference-engine");
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.error_message.is_none());

    let body: ErrorBody =
        serde_json::from_str(r#"{"errorMessage":"Wrong password."}"#).unwrap();
    assert_eq!(body.error_message.as_deref(), Some("Wrong password."));
}
