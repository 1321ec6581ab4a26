//! Configuration layer for gozer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (only when `--config` is given)
//! 3. **Built-in defaults**
//!
//! `--online` uses OR semantics with `output.online_only`: either one enables it.
//!
//! # Token Resolution
//!
//! A literal token (`--api-token`, then `api.token`) wins. Otherwise the token
//! is read from a file: `--api-token-file`, then `api.token_file`, then
//! `~/.gozer-token`. The file's contents are trimmed. A missing file is not an
//! error by itself, but ending up without any token is. Any other failure to
//! read the file is an error.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{TokenSource, ValidatedConfig, expand_path, write_default_config};
