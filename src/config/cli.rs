//! CLI argument parsing using clap.
//!
//! Defines the command-line interface, one long option per named input.

use clap::Parser;

/// Discord Notify: CI webhook notifier
///
/// Builds a Discord webhook message from step inputs, validates it against
/// Discord's documented limits, and sends it with a single HTTP POST.
#[derive(Debug, Parser)]
#[command(name = "discord-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Discord webhook URL (falls back to the DISCORD_WEBHOOK_URL environment variable)
    #[arg(long = "webhook-url")]
    pub webhook_url: Option<String>,

    /// Plain message content (mutually exclusive with --embed-description)
    #[arg(long)]
    pub content: Option<String>,

    /// Username override for the webhook message
    #[arg(long)]
    pub username: Option<String>,

    /// Avatar URL override for the webhook message
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Send as a text-to-speech message; pass the literal value 'true' to enable
    #[arg(long, value_name = "BOOL")]
    pub tts: Option<String>,

    /// Embed title
    #[arg(long = "embed-title")]
    pub embed_title: Option<String>,

    /// Embed description (mutually exclusive with --content)
    #[arg(long = "embed-description")]
    pub embed_description: Option<String>,

    /// URL the embed title links to
    #[arg(long = "embed-url")]
    pub embed_url: Option<String>,

    /// Embed timestamp (ISO-8601, passed through unparsed)
    #[arg(long = "embed-timestamp")]
    pub embed_timestamp: Option<String>,

    /// Embed color as a hexadecimal string (e.g. 'ff0000')
    #[arg(long = "embed-color", value_name = "HEX")]
    pub embed_color: Option<String>,

    /// Embed author name
    #[arg(long = "embed-author-name")]
    pub embed_author_name: Option<String>,

    /// Embed author URL
    #[arg(long = "embed-author-url")]
    pub embed_author_url: Option<String>,

    /// Embed author icon URL
    #[arg(long = "embed-author-icon-url")]
    pub embed_author_icon_url: Option<String>,

    /// Embed footer text
    #[arg(long = "embed-footer-text")]
    pub embed_footer_text: Option<String>,

    /// Embed footer icon URL
    #[arg(long = "embed-footer-icon-url")]
    pub embed_footer_icon_url: Option<String>,

    /// Embed fields as a JSON array of {"name", "value"} objects
    #[arg(long = "embed-fields", value_name = "JSON")]
    pub embed_fields: Option<String>,

    /// Log the serialized payload before sending; pass the literal value 'true' to enable
    #[arg(long = "show-payload", value_name = "BOOL")]
    pub show_payload: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
