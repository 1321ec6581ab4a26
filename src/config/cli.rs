//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gozer: ZeroTier network inspector
///
/// Lists the networks owned by a ZeroTier Central account and the devices
/// that have joined them.
#[derive(Debug, Parser)]
#[command(name = "gozer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// ZeroTier API token
    #[arg(long = "api-token", value_name = "TOKEN")]
    pub api_token: Option<String>,

    /// File containing the ZeroTier API token [default: ~/.gozer-token]
    #[arg(long = "api-token-file", value_name = "PATH")]
    pub api_token_file: Option<String>,

    /// Base URL of the ZeroTier Central API
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Show only online network members
    #[arg(long)]
    pub online: bool,

    /// List the account's networks and exit
    #[arg(long)]
    pub list: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Network IDs or names to inspect (default: all networks)
    #[arg(value_name = "NETWORK")]
    pub networks: Vec<String>,
}

/// Subcommands for gozer
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
