use super::*;

fn awaiting_login() -> AuthFlowState {
    let mut state = AuthFlowState::new(AuthPurpose::Login);
    state.email = "jane@brand.com".to_owned();
    let _ = state.begin_request();
    state.code_sent("Verification code sent! Check your inbox.");
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_collects_credentials() {
    let state = AuthFlowState::new(AuthPurpose::Signup);
    assert_eq!(state.purpose, AuthPurpose::Signup);
    assert_eq!(state.stage, AuthStage::CollectingCredentials);
    assert!(state.email.is_empty());
    assert!(state.code.is_empty());
    assert!(state.message.is_none());
    assert!(!state.busy);
}

// =============================================================
// First stage
// =============================================================

#[test]
fn begin_request_trims_email_and_sets_busy() {
    let mut state = AuthFlowState::new(AuthPurpose::Login);
    state.email = "  jane@brand.com ".to_owned();
    let creds = state.begin_request().unwrap().unwrap();
    assert_eq!(creds, Credentials { email: "jane@brand.com".to_owned(), password: None });
    assert!(state.busy);
}

#[test]
fn begin_request_rejects_missing_email() {
    let mut state = AuthFlowState::new(AuthPurpose::Login);
    state.email = "   ".to_owned();
    assert_eq!(state.begin_request(), Some(Err(ENTER_EMAIL)));
    assert!(!state.busy);
    assert_eq!(state.message, Some(StatusMessage::error(ENTER_EMAIL)));
}

#[test]
fn begin_request_ignored_while_busy() {
    let mut state = AuthFlowState::new(AuthPurpose::Login);
    state.email = "jane@brand.com".to_owned();
    assert!(state.begin_request().is_some());
    assert!(state.begin_request().is_none());
}

#[test]
fn signup_requires_password() {
    let mut state = AuthFlowState::new(AuthPurpose::Signup);
    state.email = "jane@brand.com".to_owned();
    state.password = "12345".to_owned();
    assert_eq!(state.begin_request(), Some(Err(ENTER_PASSWORD)));

    state.password = "123456".to_owned();
    let creds = state.begin_request().unwrap().unwrap();
    assert_eq!(creds.password.as_deref(), Some("123456"));
}

#[test]
fn code_sent_moves_to_code_entry() {
    let state = awaiting_login();
    assert_eq!(state.stage, AuthStage::AwaitingCode);
    assert!(!state.busy);
    assert_eq!(state.message.as_ref().map(|m| m.kind), Some(MessageKind::Success));
}

#[test]
fn request_failed_stays_on_credentials() {
    let mut state = AuthFlowState::new(AuthPurpose::Login);
    state.email = "ghost@brand.com".to_owned();
    let _ = state.begin_request();
    state.request_failed("Signups not allowed for otp");
    assert_eq!(state.stage, AuthStage::CollectingCredentials);
    assert!(!state.busy);
    assert_eq!(state.message, Some(StatusMessage::error("Signups not allowed for otp")));
}

// =============================================================
// Second stage
// =============================================================

#[test]
fn begin_verify_requires_six_digits() {
    let mut state = awaiting_login();
    state.code = "12345".to_owned();
    assert_eq!(state.begin_verify(), Some(Err(ENTER_CODE)));
    state.code = "1234567".to_owned();
    assert_eq!(state.begin_verify(), Some(Err(ENTER_CODE)));
    state.code = "12a456".to_owned();
    assert_eq!(state.begin_verify(), Some(Err(ENTER_CODE)));
    assert!(!state.busy);
}

#[test]
fn begin_verify_returns_email_and_code() {
    let mut state = awaiting_login();
    state.code = " 123 456 ".to_owned();
    assert_eq!(state.begin_verify(), Some(Ok(("jane@brand.com".to_owned(), "123456".to_owned()))));
    assert!(state.busy);
}

#[test]
fn begin_verify_ignored_before_code_sent() {
    let mut state = AuthFlowState::new(AuthPurpose::Login);
    state.code = "123456".to_owned();
    assert!(state.begin_verify().is_none());
}

#[test]
fn verify_failed_keeps_backend_text_and_stage() {
    let mut state = awaiting_login();
    state.code = "123456".to_owned();
    let _ = state.begin_verify();
    state.verify_failed("Token has expired or is invalid");
    assert_eq!(state.stage, AuthStage::AwaitingCode);
    assert!(!state.busy);
    assert_eq!(state.message, Some(StatusMessage::error("Token has expired or is invalid")));
}

#[test]
fn back_discards_code_and_message() {
    let mut state = awaiting_login();
    state.code = "123456".to_owned();
    state.back();
    assert_eq!(state.stage, AuthStage::CollectingCredentials);
    assert!(state.code.is_empty());
    assert!(state.message.is_none());
    assert_eq!(state.email, "jane@brand.com");
}

// =============================================================
// Input helpers
// =============================================================

#[test]
fn validate_email_shapes() {
    assert_eq!(validate_email(" a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_email("ab.com"), Err(ENTER_EMAIL));
    assert_eq!(validate_email("@b.com"), Err(ENTER_EMAIL));
    assert_eq!(validate_email("a@"), Err(ENTER_EMAIL));
    assert_eq!(validate_email("a@b@c"), Err(ENTER_EMAIL));
}

#[test]
fn sanitize_code_input_keeps_six_digits() {
    assert_eq!(sanitize_code_input("12a3-45678"), "123456");
    assert_eq!(sanitize_code_input("abc"), "");
}

#[test]
fn normalize_code_accepts_exact_digits() {
    assert_eq!(normalize_code("000000"), Some("000000".to_owned()));
    assert_eq!(normalize_code(""), None);
}
