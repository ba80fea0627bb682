//! Wire payload types for the Discord webhook endpoint.
//!
//! Every optional field carries `skip_serializing_if` so absent inputs
//! produce no JSON key at all; the endpoint distinguishes a missing key
//! from an empty value.

use serde::{Deserialize, Serialize};

/// The JSON request body sent to the webhook endpoint.
///
/// Invariant: a payload carries either `content` or `embeds`, never both.
/// The builder enforces this before construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Payload {
    /// Plain message content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Username override for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Avatar URL override for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Text-to-speech flag; only serialized when enabled.
    #[serde(skip_serializing_if = "is_false")]
    pub tts: bool,

    /// Rich content blocks; this design sends at most one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
}

/// A structured rich-content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    /// Embed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Embed description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL the title links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// ISO-8601 timestamp, passed through unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Color as a decimal integer (parsed from a hex input string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    /// Author block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    /// Footer block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    /// Ordered field list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<EmbedField>>,
}

/// Author sub-record of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    /// Author display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL the author name links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Author icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Footer sub-record of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Footer icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A single name/value field of an embed.
///
/// Deserialized from the `embed_fields` JSON input and serialized back to
/// the wire. The optional `inline` flag is accepted and forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field name.
    pub name: String,

    /// Field value.
    pub value: String,

    /// Whether the field renders inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature dictated by serde
fn is_false(value: &bool) -> bool {
    !*value
}
