//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are decoded
//! from the server's `{ error, kind }` body; anything that cannot be decoded
//! is reported as `Network` (no usable answer) or `MalformedResponse`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdStrategy, ApiError, AuthOutcome, AuthPurpose, PublicConfig};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorKind;

pub(crate) const CONFIG_ENDPOINT: &str = "/api/config";
pub(crate) const REQUEST_CODE_ENDPOINT: &str = "/api/auth/request-code";
pub(crate) const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";
pub(crate) const VERIFY_CODE_ENDPOINT: &str = "/api/auth/verify-code";
pub(crate) const STRATEGY_ENDPOINT: &str = "/api/ai/strategy";
pub(crate) const CREATIVE_ENDPOINT: &str = "/api/ai/creative";

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::network("not available on server")
}

/// Turn a failed response into an `ApiError`, preferring the server's body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_error(status: u16, body: &str) -> ApiError {
    if let Ok(err) = serde_json::from_str::<ApiError>(body) {
        return err;
    }
    let kind = match status {
        401 | 403 => ErrorKind::Unauthorized,
        429 => ErrorKind::RateLimited,
        400..=499 => ErrorKind::Rejected,
        _ => ErrorKind::Network,
    };
    ApiError::new(kind, format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn read_json<R: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<R, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(decode_error(status, &body));
    }
    resp.json::<R>()
        .await
        .map_err(|e| ApiError::new(ErrorKind::MalformedResponse, e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B, R>(path: &str, body: &B) -> Result<R, ApiError>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(path)
        .json(body)
        .map_err(|e| ApiError::new(ErrorKind::InvalidInput, e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    read_json(resp).await
}

/// Fetch the server's resolved configuration from `/api/config`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_config() -> Result<PublicConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Ask the auth backend to email a one-time code.
///
/// # Errors
///
/// Returns the backend's rejection (message verbatim) or a transport error.
pub async fn request_code(email: &str, purpose: AuthPurpose) -> Result<AuthOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::RequestCodeBody { email: email.to_owned(), purpose };
        post_json(REQUEST_CODE_ENDPOINT, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, purpose);
        Err(unavailable())
    }
}

/// Create an account; the backend follows up with a confirmation code.
///
/// # Errors
///
/// Returns the backend's rejection (message verbatim) or a transport error.
pub async fn sign_up(email: &str, password: &str) -> Result<AuthOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::SignUpBody { email: email.to_owned(), password: password.to_owned() };
        post_json(SIGN_UP_ENDPOINT, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(unavailable())
    }
}

/// Submit a one-time code for verification.
///
/// # Errors
///
/// Returns the backend's rejection (message verbatim) or a transport error.
pub async fn verify_code(email: &str, code: &str, purpose: AuthPurpose) -> Result<AuthOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::VerifyCodeBody { email: email.to_owned(), code: code.to_owned(), purpose };
        post_json(VERIFY_CODE_ENDPOINT, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code, purpose);
        Err(unavailable())
    }
}

/// Generate a media plan for a product description.
///
/// # Errors
///
/// Returns a typed error when the model call fails or the answer is unusable.
pub async fn generate_strategy(product: &str) -> Result<AdStrategy, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::StrategyBody { product: product.to_owned() };
        post_json(STRATEGY_ENDPOINT, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product;
        Err(unavailable())
    }
}

/// Generate an ad creative image; returns a `data:` URI.
///
/// # Errors
///
/// Returns a typed error when the model call fails or no image came back.
pub async fn generate_creative(prompt: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CreativeBody { prompt: prompt.to_owned() };
        let image: super::types::CreativeImage = post_json(CREATIVE_ENDPOINT, &body).await?;
        Ok(image.image)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        Err(unavailable())
    }
}
