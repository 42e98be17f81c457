use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  ada@example.com  ", "pass word"),
        Ok(("ada@example.com".to_owned(), "pass word".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_missing_email() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_rejects_missing_password() {
    assert_eq!(
        validate_login_input("ada@example.com", ""),
        Err("Enter both email and password.")
    );
}
