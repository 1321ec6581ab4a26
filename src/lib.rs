//! gozer: ZeroTier network inspector
//!
//! A client library for the ZeroTier Central REST API that lists the
//! networks owned by an account, resolves their members, and renders
//! one-line summaries of both.

pub mod api;
pub mod config;
pub mod inspect;
pub mod model;
pub mod report;
pub mod transport;
