//! Environment variable interpolation for text inputs.
//!
//! Expands `${NAME}` and bare `$NAME` tokens (word characters only) using
//! the provided environment lookup. Substitution is a single left-to-right
//! pass; substituted values are not re-scanned.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::env::EnvSource;

/// Matches `${NAME}` (group 1) or bare `$NAME` (group 2).
static VAR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("hardcoded pattern is valid")
});

/// Expands environment variable tokens in `text`.
///
/// Unset variables substitute to the empty string. Applied to message
/// content and embed descriptions only; other text fields are sent as-is.
///
/// # Example
///
/// ```
/// use discord_notify::env::StaticEnv;
/// use discord_notify::payload::expand_env_vars;
///
/// let env = StaticEnv::from_pairs([("USER", "alice")]);
/// assert_eq!(expand_env_vars("hi $USER", &env), "hi alice");
/// assert_eq!(expand_env_vars("hi ${USER}!", &env), "hi alice!");
/// ```
#[must_use]
pub fn expand_env_vars(text: &str, env: &impl EnvSource) -> String {
    VAR_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            env.get(name).unwrap_or_default()
        })
        .into_owned()
}
