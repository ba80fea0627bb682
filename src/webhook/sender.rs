//! Message sender trait and Discord webhook implementation.

use crate::payload::Payload;

use super::{HttpClient, HttpRequest, SendError};

/// Trait for delivering a validated payload to a chat endpoint.
///
/// This abstraction allows different delivery mechanisms and enables
/// testing the execution path with mocks.
pub trait MessageSender: Send + Sync {
    /// Delivers the payload.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if the endpoint rejects the message or the
    /// request fails at the transport level.
    fn send(
        &self,
        payload: &Payload,
    ) -> impl std::future::Future<Output = Result<(), SendError>> + Send;
}

/// Discord webhook sender.
///
/// Issues exactly one POST per [`send`](MessageSender::send) call with the
/// payload serialized as the JSON body. Discord acknowledges a webhook
/// message with 204 No Content; any other status is a failure carrying the
/// numeric code and reason text. There are no retries.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```
/// use discord_notify::webhook::{DiscordWebhook, ReqwestClient};
/// use url::Url;
///
/// let webhook = DiscordWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://discord.com/api/webhooks/id/token").unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct DiscordWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> DiscordWebhook<H> {
    /// Creates a new webhook sender targeting `url`.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient> DiscordWebhook<H> {
    /// Executes the single dispatch attempt.
    async fn dispatch(&self, payload: &Payload) -> Result<(), SendError> {
        let body = serde_json::to_vec(payload)?;
        let request = HttpRequest::post_json(self.url.clone(), body);

        let response = self.client.execute(request).await?;

        if response.status == http::StatusCode::NO_CONTENT {
            return Ok(());
        }

        Err(SendError::UnexpectedStatus {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}

impl<H: HttpClient> MessageSender for DiscordWebhook<H> {
    async fn send(&self, payload: &Payload) -> Result<(), SendError> {
        self.dispatch(payload).await
    }
}
