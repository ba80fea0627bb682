//! Error types for payload validation.

use thiserror::Error;

use super::limits;

/// Error type for payload validation failures.
///
/// One variant per rule, each message naming the violated limit so callers
/// can distinguish failure causes. Validation stops at the first violation;
/// nothing is aggregated.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Neither the `webhook_url` input nor the `DISCORD_WEBHOOK_URL`
    /// environment variable is set.
    #[error(
        "No webhook URL provided. Set the DISCORD_WEBHOOK_URL environment \
         variable or provide the webhook_url input."
    )]
    MissingWebhookUrl,

    /// Both `content` and `embed_description` were supplied.
    #[error(
        "Both content and embed description provided. Ensure only one of \
         content or embed_description is set."
    )]
    ContentConflict,

    /// Plain content is longer than the documented maximum.
    #[error("Content exceeds {max} characters (got {length})", max = limits::CONTENT_MAX)]
    ContentTooLong {
        /// Actual content length.
        length: usize,
    },

    /// The `embed_fields` input is not a valid JSON array of field objects.
    #[error("Invalid JSON for embed fields: {source}")]
    InvalidFieldsJson {
        /// Underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Embed title is longer than the documented maximum.
    #[error("Embed title exceeds {max} characters (got {length})", max = limits::EMBED_TITLE_MAX)]
    TitleTooLong {
        /// Actual title length.
        length: usize,
    },

    /// Embed description is longer than the documented maximum.
    #[error(
        "Embed description exceeds {max} characters (got {length})",
        max = limits::EMBED_DESCRIPTION_MAX
    )]
    DescriptionTooLong {
        /// Actual description length.
        length: usize,
    },

    /// Embed has more field objects than the documented maximum.
    #[error(
        "Embed fields exceed {max} field objects (got {count})",
        max = limits::EMBED_FIELDS_MAX
    )]
    TooManyFields {
        /// Actual field count.
        count: usize,
    },

    /// A field name is longer than the documented maximum.
    #[error(
        "Embed field name exceeds {max} characters (field {index}, got {length})",
        max = limits::EMBED_FIELD_NAME_MAX
    )]
    FieldNameTooLong {
        /// Zero-based index of the offending field.
        index: usize,
        /// Actual name length.
        length: usize,
    },

    /// A field value is longer than the documented maximum.
    #[error(
        "Embed field value exceeds {max} characters (field {index}, got {length})",
        max = limits::EMBED_FIELD_VALUE_MAX
    )]
    FieldValueTooLong {
        /// Zero-based index of the offending field.
        index: usize,
        /// Actual value length.
        length: usize,
    },

    /// Embed footer text is longer than the documented maximum.
    #[error(
        "Embed footer text exceeds {max} characters (got {length})",
        max = limits::EMBED_FOOTER_TEXT_MAX
    )]
    FooterTextTooLong {
        /// Actual footer text length.
        length: usize,
    },

    /// Embed author name is longer than the documented maximum.
    #[error(
        "Embed author name exceeds {max} characters (got {length})",
        max = limits::EMBED_AUTHOR_NAME_MAX
    )]
    AuthorNameTooLong {
        /// Actual author name length.
        length: usize,
    },
}
