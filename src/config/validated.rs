//! Validated configuration after merging CLI, TOML and token file sources.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use url::Url;

use crate::api::ApiToken;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to read the optional config file named by the
/// CLI, or [`ValidatedConfig::from_raw`] with already-parsed sources.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Base URL of the API
    pub api_url: Url,

    /// Bearer token for every request
    pub token: ApiToken,

    /// Where the token came from
    pub token_source: TokenSource,

    /// Only show online members
    pub online_only: bool,

    /// Only list the account's networks
    pub list_only: bool,

    /// Network IDs or names to inspect; empty means all networks
    pub networks: Vec<String>,
}

/// Origin of the API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// `--api-token`
    Cli,
    /// `api.token` in the config file
    ConfigFile,
    /// A token file at the given path
    File(PathBuf),
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "command line"),
            Self::ConfigFile => write!(f, "config file"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let networks = if self.networks.is_empty() {
            "all".to_string()
        } else {
            self.networks.join(",")
        };

        write!(
            f,
            "Config {{ api_url: {}, token: from {}, online_only: {}, list_only: {}, networks: {} }}",
            self.api_url, self.token_source, self.online_only, self.list_only, networks,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API URL is invalid
    /// - No token can be found
    /// - The token file exists but cannot be read
    /// - The token is not a valid header value
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_url = Self::resolve_api_url(cli, toml)?;
        let (token, token_source) = Self::resolve_token(cli, toml)?;
        let online_only = cli.online || toml.is_some_and(|t| t.output.online_only);

        Ok(Self {
            api_url,
            token,
            token_source,
            online_only,
            list_only: cli.list,
            networks: cli.networks.clone(),
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_api_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .api_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.url.as_deref()))
            .unwrap_or(defaults::API_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_token(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<(ApiToken, TokenSource), ConfigError> {
        if let Some(token) = non_empty(cli.api_token.as_deref()) {
            return Ok((parse_token(token)?, TokenSource::Cli));
        }

        if let Some(token) = non_empty(toml.and_then(|t| t.api.token.as_deref())) {
            return Ok((parse_token(token)?, TokenSource::ConfigFile));
        }

        let path = cli
            .api_token_file
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.token_file.as_deref()))
            .map(expand_path)
            .or_else(defaults::token_file);

        if let Some(path) = path {
            if let Some(token) = read_token_file(&path)? {
                return Ok((parse_token(&token)?, TokenSource::File(path)));
            }
        }

        Err(ConfigError::missing(
            field::API_TOKEN,
            "Use --api-token, --api-token-file, or write the token to ~/.gozer-token",
        ))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Expands `$VAR`, `${VAR}` and a leading `~` in a path.
///
/// Unset variables expand to the empty string.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    expand_path_with(raw, |name| std::env::var(name).ok(), dirs::home_dir())
}

// Helper functions

fn expand_path_with(
    raw: &str,
    lookup: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> PathBuf {
    let expanded = expand_vars(raw, lookup);

    if let Some(home) = home {
        if expanded == "~" {
            return home;
        }
        if let Some(rest) = expanded.strip_prefix("~/") {
            return home.join(rest);
        }
    }

    PathBuf::from(expanded)
}

fn expand_vars(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, tail) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], &braced[end + 1..]),
                None => ("", after),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
            continue;
        }

        out.push_str(&lookup(name).unwrap_or_default());
        rest = tail;
    }

    out.push_str(rest);
    out
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_token(token: &str) -> Result<ApiToken, ConfigError> {
    ApiToken::new(token).map_err(|e| ConfigError::InvalidToken {
        reason: e.to_string(),
    })
}

/// Reads and trims a token file.
///
/// Returns `Ok(None)` if the file does not exist or holds only whitespace.
fn read_token_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(non_empty(Some(content.as_str())).map(ToString::to_string)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No token file {}", path.display());
            Ok(None)
        }
        Err(e) => Err(ConfigError::TokenFileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
