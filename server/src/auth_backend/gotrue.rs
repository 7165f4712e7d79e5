//! GoTrue-compatible REST client (`/auth/v1/otp`, `/signup`, `/verify`).

use std::time::Duration;

use serde_json::{Value, json};

use super::config::AuthBackendConfig;
use super::types::{AuthBackend, AuthBackendError, OtpType};

/// Fields GoTrue-style backends put their human-readable error in, by preference.
const MESSAGE_FIELDS: [&str; 4] = ["msg", "error_description", "message", "error"];

pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    redirect_url: Option<String>,
}

impl GoTrueClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AuthBackendConfig) -> Result<Self, AuthBackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthBackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.key.clone(),
            redirect_url: config.redirect_url.clone(),
        })
    }

    async fn post(&self, path: &str, body: &Value, with_redirect: bool) -> Result<(), AuthBackendError> {
        let mut request = self
            .http
            .post(format!("{}/auth/v1/{path}", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(body);
        if with_redirect {
            if let Some(redirect) = &self.redirect_url {
                request = request.query(&[("redirect_to", redirect)]);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthBackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(rejection(status, &text))
    }
}

#[async_trait::async_trait]
impl AuthBackend for GoTrueClient {
    async fn send_otp(&self, email: &str, create_user: bool) -> Result<(), AuthBackendError> {
        self.post("otp", &otp_body(email, create_user), true).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthBackendError> {
        self.post("signup", &signup_body(email, password), true).await
    }

    async fn verify_otp(&self, email: &str, token: &str, otp_type: OtpType) -> Result<(), AuthBackendError> {
        self.post("verify", &verify_body(email, token, otp_type), false).await
    }
}

fn otp_body(email: &str, create_user: bool) -> Value {
    json!({ "email": email, "create_user": create_user })
}

fn signup_body(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

fn verify_body(email: &str, token: &str, otp_type: OtpType) -> Value {
    json!({ "email": email, "token": token, "type": otp_type.as_str() })
}

/// Build a rejection carrying the backend's own message when it sent one.
fn rejection(status: u16, body: &str) -> AuthBackendError {
    let message = extract_message(body).unwrap_or_else(|| format!("auth service returned status {status}"));
    AuthBackendError::Rejected { status, message }
}

fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    MESSAGE_FIELDS.iter().find_map(|field| {
        value
            .get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
    })
}

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod tests;
