//! Application execution logic.
//!
//! Builds the API client from the validated configuration and runs the
//! requested report against standard output.

use std::io::Write;

use thiserror::Error;

use gozer::api::ZeroTierClient;
use gozer::config::ValidatedConfig;
use gozer::inspect::{InspectError, inspect_networks, print_networks};
use gozer::transport::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The network listing or report failed.
    #[error(transparent)]
    Inspect(#[from] InspectError),

    /// Flushing standard output failed.
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// Executes the requested report.
///
/// With `--list` only the account's network summaries are printed. Otherwise
/// every requested network (or every network, if none was named) is printed
/// with its members.
///
/// # Errors
///
/// Returns an error if the network list is needed and cannot be fetched, or
/// if standard output cannot be written.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = ZeroTierClient::new(ReqwestClient::new(), config.api_url, config.token);
    let mut out = std::io::stdout().lock();

    if config.list_only {
        print_networks(&client, &mut out).await?;
    } else {
        inspect_networks(&client, &config.networks, config.online_only, &mut out).await?;
    }

    out.flush().map_err(RunError::Output)
}
