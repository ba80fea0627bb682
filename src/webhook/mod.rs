//! Webhook layer for dispatching the message to Discord.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Message dispatch ([`MessageSender`], [`DiscordWebhook`])
//!
//! Dispatch is a single POST per invocation; there is no retry loop and no
//! state between invocations.

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{DiscordWebhook, MessageSender};
