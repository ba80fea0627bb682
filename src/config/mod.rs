//! Input layer for discord-notify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Resolved inputs ([`ResolvedInputs`])
//!
//! # Priority
//!
//! Input values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values passed via command line
//! 2. **Environment fallback** - `DISCORD_WEBHOOK_URL` for the webhook
//!    target only; no other input has an environment fallback
//!
//! Every input is optional at this layer; the payload builder decides which
//! combinations are valid.
//!
//! # Boolean Input Semantics
//!
//! `tts` and `show_payload` are boolean-as-string inputs: the literal value
//! `"true"` enables them, anything else (including absence) resolves to
//! `false`. This mirrors how CI systems hand string-typed step inputs to
//! the tool.

mod cli;
mod resolved;

#[cfg(test)]
mod cli_tests;

pub use cli::Cli;
pub use resolved::ResolvedInputs;
