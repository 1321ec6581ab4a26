//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API access section
    #[serde(default)]
    pub api: ApiSection,

    /// Report output section
    #[serde(default)]
    pub output: OutputSection,
}

/// API access configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Base URL of the API
    pub url: Option<String>,

    /// Literal API token
    pub token: Option<String>,

    /// Path of a file holding the API token
    pub token_file: Option<String>,
}

/// Report output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Show only online members
    #[serde(default)]
    pub online_only: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# gozer configuration file
# Use it with: gozer --config gozer.toml

[api]
# Base URL of the ZeroTier Central API (default shown)
# url = "https://my.zerotier.com/api"

# API token. Prefer token_file so the token stays out of this file.
# token = "your-token-here"

# File containing the API token (default: ~/.gozer-token)
# ~ and $VAR / ${VAR} are expanded.
# token_file = "~/.gozer-token"

[output]
# Show only online members (--online also enables this)
# online_only = false
"#
    .to_string()
}
