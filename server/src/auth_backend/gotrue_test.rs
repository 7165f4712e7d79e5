use super::*;
use crate::auth_backend::config::AuthTimeouts;
use client::net::types::ErrorKind;

#[test]
fn otp_body_carries_create_user_flag() {
    let body = otp_body("a@b.co", false);
    assert_eq!(body["email"], "a@b.co");
    assert_eq!(body["create_user"], false);
    assert_eq!(otp_body("a@b.co", true)["create_user"], true);
}

#[test]
fn signup_body_shape() {
    let body = signup_body("a@b.co", "hunter22");
    assert_eq!(body["email"], "a@b.co");
    assert_eq!(body["password"], "hunter22");
}

#[test]
fn verify_body_uses_otp_type() {
    assert_eq!(verify_body("a@b.co", "123456", OtpType::Email)["type"], "email");
    let body = verify_body("a@b.co", "123456", OtpType::Signup);
    assert_eq!(body["type"], "signup");
    assert_eq!(body["token"], "123456");
}

#[test]
fn extract_message_field_preference() {
    assert_eq!(
        extract_message(r#"{"msg":"Token has expired or is invalid","error":"x"}"#).as_deref(),
        Some("Token has expired or is invalid")
    );
    assert_eq!(
        extract_message(r#"{"error":"invalid_grant","error_description":"Signups not allowed for otp"}"#)
            .as_deref(),
        Some("Signups not allowed for otp")
    );
    assert_eq!(extract_message(r#"{"message":"Invalid API key"}"#).as_deref(), Some("Invalid API key"));
    assert_eq!(extract_message(r#"{"error":"rate limited"}"#).as_deref(), Some("rate limited"));
}

#[test]
fn extract_message_skips_blank_and_non_string() {
    assert_eq!(extract_message(r#"{"msg":"  ","code":400,"error":"bad"}"#).as_deref(), Some("bad"));
    assert_eq!(extract_message(r#"{"message":42}"#), None);
    assert_eq!(extract_message("<html>oops</html>"), None);
}

#[test]
fn rejection_keeps_backend_text_verbatim() {
    let err = rejection(422, r#"{"msg":"User already registered"}"#);
    assert_eq!(err.to_string(), "User already registered");
    assert_eq!(err.kind(), ErrorKind::Rejected);
}

#[test]
fn rejection_without_message_mentions_status() {
    let err = rejection(502, "");
    assert_eq!(err.to_string(), "auth service returned status 502");
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[test]
fn client_builds_from_config() {
    let config = AuthBackendConfig {
        url: "https://x.supabase.co".into(),
        key: "abcdefghijklmnopqrstu".into(),
        redirect_url: Some("https://adbuy.ai".into()),
        timeouts: AuthTimeouts { request_secs: 5, connect_secs: 2 },
    };
    let client = GoTrueClient::new(&config).unwrap();
    assert_eq!(client.base_url, "https://x.supabase.co");
    assert_eq!(client.redirect_url.as_deref(), Some("https://adbuy.ai"));
}
