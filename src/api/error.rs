//! Error types for API calls.
//!
//! Flows classify every failure three ways: a structured rejection from the
//! server, a body that did not decode, or anything else that went wrong on
//! the way. Only the first carries text meant for the user.

use serde::Deserialize;
use thiserror::Error;

const DETAIL_SEPARATOR: &str = "；";

/// Structured failure body returned with any non-200 status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Vec<ApiErrorDetail>>,
}

/// Field-level validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    pub name: String,
    pub messages: Vec<String>,
}

impl ApiError {
    /// User-facing text: the message, followed by one line per detail.
    pub fn user_message(&self) -> String {
        let details = match self.details.as_deref() {
            Some(details) if !details.is_empty() => details,
            _ => return self.message.clone(),
        };

        let lines = details
            .iter()
            .map(|detail| format!("{}: {}", detail.name, detail.messages.join(DETAIL_SEPARATOR)))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n{}", self.message, lines)
    }
}

/// Failures below the decoding layer: building the body, reaching the
/// server, or reading its reply.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("Invalid request URL '{0}'")]
    InvalidUrl(String),
}

/// Outcome of a failed flow.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The server rejected the request with an actionable explanation.
    #[error("{}", .0.title)]
    Api(ApiError),

    /// The response body did not have the expected shape.
    #[error("Error decoding data")]
    Decode(#[source] serde_json::Error),

    #[error("Unknown error")]
    Unknown(#[from] TransportError),
}

impl FlowError {
    /// Alert title.
    pub fn title(&self) -> String {
        self.to_string()
    }

    /// Alert body. Generic failures have none.
    pub fn message(&self) -> Option<String> {
        match self {
            FlowError::Api(error) => Some(error.user_message()),
            FlowError::Decode(_) | FlowError::Unknown(_) => None,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            FlowError::Api(_) => "api_error",
            FlowError::Decode(_) => "decode_error",
            FlowError::Unknown(_) => "unknown_error",
        }
    }
}
