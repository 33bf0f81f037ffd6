//! REST helpers for the remote portfolio API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`; pages render
//! their loading state on the server and fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures become an
//! in-page error panel (or a fallback payload) rather than a crashed hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{Certification, Envelope, Profile, Project, Validate};

/// Base URL used when `PORTFOLIO_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Errors produced by API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected status {status}")]
    Status { status: u16, message: Option<String> },

    /// The body was not a well-formed envelope.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The envelope reported `success: false` or carried no data.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The payload decoded but failed boundary validation.
    #[error("invalid {entity}: {reason}")]
    Invalid { entity: &'static str, reason: String },

    /// No HTTP client in this environment (server render).
    #[error("api not available outside the browser")]
    Unavailable,
}

/// Base URL for API requests, without a trailing slash.
pub fn api_base_url() -> &'static str {
    base_url_or_default(option_env!("PORTFOLIO_API_URL"))
}

fn base_url_or_default(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

fn profile_endpoint() -> String {
    endpoint("/user/profile")
}

fn projects_endpoint() -> String {
    endpoint("/projects")
}

fn project_endpoint(slug: &str) -> String {
    endpoint(&format!("/projects/{}", encode_path_segment(slug)))
}

fn certifications_endpoint() -> String {
    endpoint("/certifications")
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Decode an envelope body, unwrap it, and validate the payload.
///
/// # Errors
///
/// Returns `Decode` for malformed JSON, `Rejected` for unsuccessful
/// envelopes, and `Invalid` for payloads that fail validation.
pub fn decode_envelope<T: DeserializeOwned + Validate>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()?.validated()
}

/// Map a non-2xx response to an error, keeping the envelope message if any.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message);
    ApiError::Status { status, message }
}

async fn get_resource<T: DeserializeOwned + Validate>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(status, &body));
        }
        decode_envelope(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the site owner's profile from `/user/profile`.
///
/// # Errors
///
/// See `ApiError`.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    get_resource(&profile_endpoint()).await
}

/// Fetch all projects from `/projects`.
///
/// # Errors
///
/// See `ApiError`.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    get_resource(&projects_endpoint()).await
}

/// Fetch one project from `/projects/{slug}`.
///
/// # Errors
///
/// See `ApiError`.
pub async fn fetch_project(slug: &str) -> Result<Project, ApiError> {
    get_resource(&project_endpoint(slug)).await
}

/// Fetch all certifications from `/certifications`.
///
/// # Errors
///
/// See `ApiError`.
pub async fn fetch_certifications() -> Result<Vec<Certification>, ApiError> {
    get_resource(&certifications_endpoint()).await
}
