use super::*;

fn rejected(status: u16) -> AuthBackendError {
    AuthBackendError::Rejected { status, message: "nope".into() }
}

#[test]
fn rejected_kinds_follow_status() {
    assert_eq!(rejected(400).kind(), ErrorKind::Rejected);
    assert_eq!(rejected(422).kind(), ErrorKind::Rejected);
    assert_eq!(rejected(429).kind(), ErrorKind::RateLimited);
    assert_eq!(rejected(503).kind(), ErrorKind::Network);
}

#[test]
fn transport_and_build_kinds() {
    assert_eq!(AuthBackendError::Request("timeout".into()).kind(), ErrorKind::Network);
    assert_eq!(AuthBackendError::HttpClientBuild("tls".into()).kind(), ErrorKind::NotConfigured);
}

#[test]
fn rejected_displays_backend_text_only() {
    let err = AuthBackendError::Rejected { status: 400, message: "Token has expired or is invalid".into() };
    assert_eq!(err.to_string(), "Token has expired or is invalid");
}

#[test]
fn otp_type_wire_names() {
    assert_eq!(OtpType::Email.as_str(), "email");
    assert_eq!(OtpType::Signup.as_str(), "signup");
}
