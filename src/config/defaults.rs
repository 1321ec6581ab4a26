//! Default values for configuration options.

/// Base URL of the ZeroTier Central API.
pub const API_URL: &str = "https://my.zerotier.com/api";

/// Name of the token file in the user's home directory.
pub const TOKEN_FILE_NAME: &str = ".gozer-token";

/// Default path of the configuration file written by `gozer init`.
pub const CONFIG_FILE_NAME: &str = "gozer.toml";

/// Default token file path (`~/.gozer-token`).
///
/// Returns `None` if the home directory cannot be determined.
#[must_use]
pub fn token_file() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(TOKEN_FILE_NAME))
}
