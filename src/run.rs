//! Application execution logic.
//!
//! This module contains the single-shot async execution path: build the
//! payload from resolved inputs, then dispatch it to the webhook.

use thiserror::Error;
use url::Url;

use discord_notify::config::ResolvedInputs;
use discord_notify::env::EnvSource;
use discord_notify::payload::{self, ValidationError};
use discord_notify::webhook::{DiscordWebhook, HttpClient, MessageSender, SendError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The payload failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The webhook target is not a parseable URL.
    #[error("Invalid webhook URL '{url}': {source}")]
    InvalidWebhookUrl {
        /// The rejected URL string.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The payload could not be serialized for logging.
    #[error("Failed to encode payload: {0}")]
    PayloadEncode(#[from] serde_json::Error),

    /// Dispatch failed after validation succeeded.
    #[error(transparent)]
    Send(#[from] SendError),
}

/// Executes one notification run.
///
/// This function:
/// 1. Builds and validates the payload from the resolved inputs
/// 2. Logs the serialized payload when `show_payload` is set
/// 3. Sends the payload to the webhook with a single POST
///
/// Validation failures short-circuit before any network I/O.
///
/// # Errors
///
/// Returns an error if:
/// - The payload violates a validation rule
/// - The webhook target is not a parseable URL
/// - The endpoint answers with a status other than 204, or the request
///   fails at the transport level
pub async fn execute<E, H>(
    inputs: &ResolvedInputs,
    env: &E,
    client: H,
) -> Result<(), RunError>
where
    E: EnvSource,
    H: HttpClient,
{
    tracing::info!("Checking inputs...");
    tracing::debug!("Repository reference: {}", inputs.reference_url);

    let payload = payload::build(inputs, env)?;

    if inputs.show_payload {
        tracing::info!("Payload: {}", serde_json::to_string(&payload)?);
    }

    let url = Url::parse(&inputs.webhook_url).map_err(|source| RunError::InvalidWebhookUrl {
        url: inputs.webhook_url.clone(),
        source,
    })?;

    let webhook = DiscordWebhook::new(client, url);

    tracing::info!("Sending message to Discord...");
    webhook.send(&payload).await?;
    tracing::info!("Message sent successfully");

    Ok(())
}
