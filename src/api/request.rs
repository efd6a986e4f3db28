//! Outbound request construction.
//!
//! Builds transport-agnostic request descriptors against a fixed base URL,
//! attaching bearer auth and JSON content type where needed.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;

use crate::api::error::TransportError;

pub const LOGIN_PATH: &str = "/api/user/login";
pub const USER_PATH: &str = "/api/user";

const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully described request, ready to hand to a [`Transport`](crate::api::Transport).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Path relative to the base URL.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Serialize `payload` as the JSON body.
    pub fn json<P: Serialize>(mut self, payload: &P) -> Result<Self, TransportError> {
        self.body = Some(serde_json::to_vec(payload).map_err(TransportError::Encode)?);
        Ok(self)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Produces [`ApiRequest`]s for one server.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn get(&self, path: &str, token: Option<&str>) -> ApiRequest {
        self.base_request(Method::GET, path, token)
    }

    pub fn post(&self, path: &str, token: Option<&str>) -> ApiRequest {
        let mut request = self.base_request(Method::POST, path, token);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        request
    }

    pub fn patch(&self, path: &str, token: Option<&str>) -> ApiRequest {
        let mut request = self.base_request(Method::PATCH, path, token);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        request
    }

    fn base_request(&self, method: Method, path: &str, token: Option<&str>) -> ApiRequest {
        let mut headers = HeaderMap::new();
        if let Some(value) = token.and_then(bearer_header) {
            headers.insert(AUTHORIZATION, value);
        }

        tracing::debug!(%method, path, authenticated = headers.contains_key(AUTHORIZATION), "built request");

        ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            path: path.to_string(),
            headers,
            body: None,
        }
    }
}

/// `Authorization: Bearer <token>` value. Tokens that are not valid header
/// text are dropped and the request goes out unauthenticated.
fn bearer_header(token: &str) -> Option<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).ok()?;
    value.set_sensitive(true);
    Some(value)
}
