//! The pure transformation from resolved inputs to a wire payload.
//!
//! Rules are checked in a fixed precedence order and the first violation
//! short-circuits, so callers never observe a partially validated payload.

use crate::config::ResolvedInputs;
use crate::env::EnvSource;

use super::error::ValidationError;
use super::interpolate::expand_env_vars;
use super::limits;
use super::types::{Embed, EmbedAuthor, EmbedField, EmbedFooter, Payload};

/// Builds a validated payload from resolved inputs.
///
/// Precedence order:
/// 1. missing webhook target
/// 2. content and embed description both set
/// 3. content over length
/// 4. embed fields JSON unparseable (only when an embed is constructed)
/// 5. structural embed limits
///
/// An embed is constructed only when content is absent and at least one
/// embed input is non-empty; with content present, embed inputs are
/// silently dropped. Environment variable tokens are expanded in content
/// and embed description only.
///
/// The transformation is pure: identical inputs and environment produce an
/// identical payload.
///
/// # Errors
///
/// Returns the first violated [`ValidationError`] per the order above.
pub fn build(inputs: &ResolvedInputs, env: &impl EnvSource) -> Result<Payload, ValidationError> {
    if inputs.webhook_url.is_empty() {
        return Err(ValidationError::MissingWebhookUrl);
    }

    if !inputs.content.is_empty() && !inputs.embed_description.is_empty() {
        return Err(ValidationError::ContentConflict);
    }

    // Content length is checked on the raw input, before expansion.
    let content_length = char_len(&inputs.content);
    if content_length > limits::CONTENT_MAX {
        return Err(ValidationError::ContentTooLong {
            length: content_length,
        });
    }

    let mut payload = Payload {
        tts: inputs.tts,
        ..Payload::default()
    };

    if !inputs.content.is_empty() {
        payload.content = Some(expand_env_vars(&inputs.content, env));
    }

    if !inputs.username.is_empty() {
        payload.username = Some(inputs.username.clone());
    }

    if !inputs.avatar_url.is_empty() {
        payload.avatar_url = Some(inputs.avatar_url.clone());
    }

    if inputs.content.is_empty() {
        if let Some(embed) = build_embed(inputs, env)? {
            validate_embed(&embed)?;
            payload.embeds = Some(vec![embed]);
        }
    }

    Ok(payload)
}

/// Constructs the embed when content is absent and any embed input is set.
///
/// The description is expanded before the embed is validated, so the
/// description limit applies to the expanded text. A malformed hex color
/// drops the color rather than failing.
fn build_embed(
    inputs: &ResolvedInputs,
    env: &impl EnvSource,
) -> Result<Option<Embed>, ValidationError> {
    if !has_embed_inputs(inputs) {
        return Ok(None);
    }

    let mut embed = Embed {
        title: non_empty(&inputs.embed_title),
        url: non_empty(&inputs.embed_url),
        timestamp: non_empty(&inputs.embed_timestamp),
        ..Embed::default()
    };

    if !inputs.embed_description.is_empty() {
        embed.description = Some(expand_env_vars(&inputs.embed_description, env));
    }

    if !inputs.embed_color.is_empty() {
        embed.color = u32::from_str_radix(&inputs.embed_color, 16).ok();
    }

    if !inputs.embed_author_name.is_empty()
        || !inputs.embed_author_url.is_empty()
        || !inputs.embed_author_icon_url.is_empty()
    {
        embed.author = Some(EmbedAuthor {
            name: non_empty(&inputs.embed_author_name),
            url: non_empty(&inputs.embed_author_url),
            icon_url: non_empty(&inputs.embed_author_icon_url),
        });
    }

    if !inputs.embed_footer_text.is_empty() || !inputs.embed_footer_icon_url.is_empty() {
        embed.footer = Some(EmbedFooter {
            text: non_empty(&inputs.embed_footer_text),
            icon_url: non_empty(&inputs.embed_footer_icon_url),
        });
    }

    if !inputs.embed_fields.is_empty() {
        let fields: Vec<EmbedField> = serde_json::from_str(&inputs.embed_fields)
            .map_err(|source| ValidationError::InvalidFieldsJson { source })?;
        embed.fields = Some(fields);
    }

    Ok(Some(embed))
}

/// Checks the constructed embed against Discord's limits, first violation
/// wins: title, description, field count, per-field name then value,
/// footer text, author name.
fn validate_embed(embed: &Embed) -> Result<(), ValidationError> {
    if let Some(length) = over_limit(embed.title.as_deref(), limits::EMBED_TITLE_MAX) {
        return Err(ValidationError::TitleTooLong { length });
    }

    if let Some(length) = over_limit(embed.description.as_deref(), limits::EMBED_DESCRIPTION_MAX) {
        return Err(ValidationError::DescriptionTooLong { length });
    }

    if let Some(fields) = &embed.fields {
        if fields.len() > limits::EMBED_FIELDS_MAX {
            return Err(ValidationError::TooManyFields {
                count: fields.len(),
            });
        }

        for (index, field) in fields.iter().enumerate() {
            let name_length = char_len(&field.name);
            if name_length > limits::EMBED_FIELD_NAME_MAX {
                return Err(ValidationError::FieldNameTooLong {
                    index,
                    length: name_length,
                });
            }

            let value_length = char_len(&field.value);
            if value_length > limits::EMBED_FIELD_VALUE_MAX {
                return Err(ValidationError::FieldValueTooLong {
                    index,
                    length: value_length,
                });
            }
        }
    }

    let footer_text = embed.footer.as_ref().and_then(|f| f.text.as_deref());
    if let Some(length) = over_limit(footer_text, limits::EMBED_FOOTER_TEXT_MAX) {
        return Err(ValidationError::FooterTextTooLong { length });
    }

    let author_name = embed.author.as_ref().and_then(|a| a.name.as_deref());
    if let Some(length) = over_limit(author_name, limits::EMBED_AUTHOR_NAME_MAX) {
        return Err(ValidationError::AuthorNameTooLong { length });
    }

    Ok(())
}

/// True when any embed-related input is non-empty.
fn has_embed_inputs(inputs: &ResolvedInputs) -> bool {
    [
        &inputs.embed_title,
        &inputs.embed_description,
        &inputs.embed_url,
        &inputs.embed_timestamp,
        &inputs.embed_color,
        &inputs.embed_author_name,
        &inputs.embed_author_url,
        &inputs.embed_author_icon_url,
        &inputs.embed_footer_text,
        &inputs.embed_footer_icon_url,
        &inputs.embed_fields,
    ]
    .iter()
    .any(|value| !value.is_empty())
}

/// Returns the length when `text` exceeds `max`, counting scalar values.
fn over_limit(text: Option<&str>, max: usize) -> Option<usize> {
    let length = char_len(text?);
    (length > max).then_some(length)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
