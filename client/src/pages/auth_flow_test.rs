use super::*;
use crate::state::auth::AuthStage;
use leptos::prelude::{Owner, Update, With};

#[test]
fn rejection_message_is_shown_verbatim() {
    let err = ApiError::new(ErrorKind::Rejected, "Token has expired or is invalid");
    assert_eq!(verify_error_text(&err), "Token has expired or is invalid");
    assert_eq!(request_error_text(&err), "Token has expired or is invalid");
}

#[test]
fn rate_limit_message_is_shown_verbatim() {
    let err = ApiError::new(ErrorKind::RateLimited, "For security purposes, you can only request this once every 60 seconds");
    assert_eq!(request_error_text(&err), err.message);
}

#[test]
fn transport_failure_uses_fixed_text() {
    let err = ApiError::network("request failed: 502");
    assert_eq!(request_error_text(&err), REQUEST_FAILED);
    assert_eq!(verify_error_text(&err), VERIFY_FAILED);
}

#[test]
fn blank_backend_message_falls_back() {
    let err = ApiError::new(ErrorKind::Rejected, "  ");
    assert_eq!(verify_error_text(&err), VERIFY_FAILED);
}


#[test]
fn remounted_login_view_starts_clean() {
    let owner = Owner::new();
    owner.with(|| {
        let first = mount_flow(AuthPurpose::Login);
        first.update(|f| f.email = "ada@example.com".to_owned());
        assert!(matches!(first.try_update(AuthFlowState::begin_request).flatten(), Some(Ok(_))));
        first.update(|f| {
            f.code_sent("Verification code sent! Check your inbox.");
            f.code = "123456".to_owned();
        });
        assert_eq!(first.with(|f| f.stage), AuthStage::AwaitingCode);

        // signup -> landing -> login mounts a new view
        let second = mount_flow(AuthPurpose::Login);
        second.with(|f| {
            assert_eq!(f.purpose, AuthPurpose::Login);
            assert_eq!(f.stage, AuthStage::CollectingCredentials);
            assert!(f.email.is_empty());
            assert!(f.code.is_empty());
            assert!(f.message.is_none());
            assert!(!f.busy);
        });
        assert_eq!(first.with(|f| f.code.clone()), "123456");
    });
}

#[test]
fn signup_view_mounts_with_signup_purpose() {
    let owner = Owner::new();
    owner.with(|| {
        let flow = mount_flow(AuthPurpose::Signup);
        assert_eq!(flow.with(|f| f.purpose), AuthPurpose::Signup);
        assert!(flow.with(|f| f.password.is_empty()));
    });
}
