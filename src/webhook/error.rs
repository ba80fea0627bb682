//! Error types for HTTP operations and message dispatch.

use thiserror::Error;

/// Error type for transport-level HTTP failures.
///
/// Describes what went wrong below the HTTP status layer: the request
/// never produced a response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused, TLS
    /// failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the client's timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// Indicates a configuration error rather than a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for message dispatch.
///
/// The webhook endpoint signals success with 204 No Content; anything
/// else, including transport failures, is a dispatch failure. Nothing is
/// retried.
#[derive(Debug, Error)]
pub enum SendError {
    /// The endpoint answered with a status other than 204.
    #[error(
        "Failed to send message. HTTP {status}: {reason}",
        status = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Unknown")
    )]
    UnexpectedStatus {
        /// The response status code.
        status: http::StatusCode,
        /// Response body, when it decodes as UTF-8.
        body: Option<String>,
    },

    /// The request failed below the HTTP status layer.
    #[error("Request failed: {0}")]
    Http(#[from] HttpError),

    /// The payload could not be serialized to JSON.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
