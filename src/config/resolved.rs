//! Resolved inputs after merging CLI arguments and environment fallbacks.
//!
//! This module contains the flat input record consumed by the payload
//! builder. Resolution never fails; missing inputs become empty strings
//! and the builder decides which combinations are valid.

use crate::env::EnvSource;

use super::cli::Cli;

/// Environment variable consulted when the `webhook_url` input is empty.
const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";

/// Placeholder used when the repository reference URL cannot be derived.
const REFERENCE_URL_PLACEHOLDER: &str = "https://github.com/owner/repo";

/// Flat record of all inputs after resolution.
///
/// String fields use the empty string for "not provided"; there is no
/// `None`-vs-empty distinction at this layer. The record is immutable once
/// resolved and lives for exactly one invocation.
#[derive(Debug, Clone, Default)]
pub struct ResolvedInputs {
    /// Webhook target URL (input, or `DISCORD_WEBHOOK_URL` fallback).
    pub webhook_url: String,
    /// Plain message content.
    pub content: String,
    /// Username override.
    pub username: String,
    /// Avatar URL override.
    pub avatar_url: String,
    /// Text-to-speech flag.
    pub tts: bool,
    /// Embed title.
    pub embed_title: String,
    /// Embed description.
    pub embed_description: String,
    /// URL the embed title links to.
    pub embed_url: String,
    /// Embed timestamp (passed through unparsed).
    pub embed_timestamp: String,
    /// Embed color as a hexadecimal string.
    pub embed_color: String,
    /// Embed author name.
    pub embed_author_name: String,
    /// Embed author URL.
    pub embed_author_url: String,
    /// Embed author icon URL.
    pub embed_author_icon_url: String,
    /// Embed footer text.
    pub embed_footer_text: String,
    /// Embed footer icon URL.
    pub embed_footer_icon_url: String,
    /// Embed fields as a raw JSON array string.
    pub embed_fields: String,
    /// Whether to log the serialized payload before sending.
    pub show_payload: bool,
    /// Repository reference URL derived from the CI environment.
    ///
    /// Informational only; never attached to the outgoing payload.
    pub reference_url: String,
}

impl ResolvedInputs {
    /// Resolves inputs from CLI arguments and the given environment.
    ///
    /// The webhook URL falls back to `DISCORD_WEBHOOK_URL` when the input
    /// is empty. Every other field comes from the CLI alone. Resolution
    /// has no failure conditions.
    #[must_use]
    pub fn resolve(cli: &Cli, env: &impl EnvSource) -> Self {
        Self {
            webhook_url: resolve_webhook_url(cli.webhook_url.as_deref(), env),
            content: string_input(cli.content.as_deref()),
            username: string_input(cli.username.as_deref()),
            avatar_url: string_input(cli.avatar_url.as_deref()),
            tts: bool_input(cli.tts.as_deref()),
            embed_title: string_input(cli.embed_title.as_deref()),
            embed_description: string_input(cli.embed_description.as_deref()),
            embed_url: string_input(cli.embed_url.as_deref()),
            embed_timestamp: string_input(cli.embed_timestamp.as_deref()),
            embed_color: string_input(cli.embed_color.as_deref()),
            embed_author_name: string_input(cli.embed_author_name.as_deref()),
            embed_author_url: string_input(cli.embed_author_url.as_deref()),
            embed_author_icon_url: string_input(cli.embed_author_icon_url.as_deref()),
            embed_footer_text: string_input(cli.embed_footer_text.as_deref()),
            embed_footer_icon_url: string_input(cli.embed_footer_icon_url.as_deref()),
            embed_fields: string_input(cli.embed_fields.as_deref()),
            show_payload: bool_input(cli.show_payload.as_deref()),
            reference_url: derive_reference_url(env),
        }
    }
}

/// Normalizes an optional string input to the empty-string convention.
fn string_input(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Resolves a boolean-as-string input: exactly `"true"` enables it.
fn bool_input(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Resolves the webhook URL: explicit input first, then the
/// `DISCORD_WEBHOOK_URL` environment variable, then empty.
fn resolve_webhook_url(input: Option<&str>, env: &impl EnvSource) -> String {
    match input {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => env.get(WEBHOOK_URL_VAR).unwrap_or_default(),
    }
}

/// Derives the repository reference URL from the CI environment.
///
/// Requires all three of `GITHUB_SERVER_URL`, `GITHUB_REPOSITORY` and
/// `GITHUB_REF_NAME` to be set and non-empty; otherwise the fixed
/// placeholder is used.
fn derive_reference_url(env: &impl EnvSource) -> String {
    let server = non_empty(env.get("GITHUB_SERVER_URL"));
    let repository = non_empty(env.get("GITHUB_REPOSITORY"));
    let ref_name = non_empty(env.get("GITHUB_REF_NAME"));

    match (server, repository, ref_name) {
        (Some(server), Some(repository), Some(ref_name)) => {
            format!("{server}/{repository}/src/branch/{ref_name}")
        }
        _ => REFERENCE_URL_PLACEHOLDER.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
