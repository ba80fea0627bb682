//! Discord's documented message limits.
//!
//! Centralized constants to avoid magic numbers scattered across the
//! codebase. Lengths are counted in Unicode scalar values.

/// Maximum length of plain message content.
pub const CONTENT_MAX: usize = 2000;

/// Maximum length of an embed title.
pub const EMBED_TITLE_MAX: usize = 256;

/// Maximum length of an embed description.
pub const EMBED_DESCRIPTION_MAX: usize = 4096;

/// Maximum number of field objects in an embed.
pub const EMBED_FIELDS_MAX: usize = 25;

/// Maximum length of an embed field name.
pub const EMBED_FIELD_NAME_MAX: usize = 256;

/// Maximum length of an embed field value.
pub const EMBED_FIELD_VALUE_MAX: usize = 1024;

/// Maximum length of embed footer text.
pub const EMBED_FOOTER_TEXT_MAX: usize = 2048;

/// Maximum length of an embed author name.
pub const EMBED_AUTHOR_NAME_MAX: usize = 256;
