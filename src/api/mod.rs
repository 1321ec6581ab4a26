//! Client for the ZeroTier Central REST API.
//!
//! This module provides:
//! - Endpoint templates ([`Endpoint`])
//! - The bearer credential ([`ApiToken`])
//! - The API client and its read operations ([`ZeroTierClient`])
//! - Error types ([`ApiError`])

mod client;
mod endpoint;
mod error;
mod token;

#[cfg(test)]
mod client_tests;

pub use client::ZeroTierClient;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use token::ApiToken;
