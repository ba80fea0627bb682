//! Environment lookup abstraction for testability.
//!
//! This module provides an [`EnvSource`] trait that allows injecting a
//! fixed key-value table in tests while reading the real process
//! environment in production. Both input resolution and `$VAR`
//! interpolation take the lookup capability as an argument instead of
//! touching global state directly.

use std::collections::HashMap;

/// Abstraction over named environment values.
///
/// Implementations return the value for a name, or `None` when the
/// variable is unset. A variable set to the empty string is reported as
/// set; callers that treat empty as absent do so explicitly.
///
/// # Example
///
/// ```
/// use discord_notify::env::{EnvSource, StaticEnv};
///
/// let env = StaticEnv::from_pairs([("HOME", "/root")]);
/// assert_eq!(env.get("HOME").as_deref(), Some("/root"));
/// assert_eq!(env.get("MISSING"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the value of the named variable, or `None` if unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// Production source reading the actual process environment.
///
/// Delegates to [`std::env::var`]; values that are not valid Unicode are
/// treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory source backed by a map.
///
/// Useful for deterministic tests and for callers that want to resolve
/// against a snapshot rather than the live environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Creates an empty source (every lookup returns `None`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from `(name, value)` pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<E: EnvSource> EnvSource for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
