//! Network inspection: the report loops behind the binary's output.
//!
//! [`print_networks`] writes one summary line per network owned by the
//! account. [`inspect_networks`] prints each requested network followed by its
//! members, one per line; a network that cannot be fetched is reported inline
//! and the loop moves on.

use std::io::Write;

use thiserror::Error;

use crate::api::{ApiError, ZeroTierClient};
use crate::model::NetworkList;
use crate::transport::HttpClient;

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;

/// Indentation written before each member line.
const MEMBER_INDENT: &str = "    ";

/// Error type for inspection runs.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The account's networks were needed and could not be listed.
    #[error("Failed to list networks: {0}")]
    ListNetworks(#[source] ApiError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Lists the account's networks, writing each summary to `out` in the order
/// the service returned them.
///
/// # Errors
///
/// Returns [`InspectError::ListNetworks`] if the list cannot be fetched, or
/// [`InspectError::Output`] if writing to `out` fails.
pub async fn print_networks<H, W>(
    client: &ZeroTierClient<H>,
    out: &mut W,
) -> Result<NetworkList, InspectError>
where
    H: HttpClient,
    W: Write,
{
    let list = client
        .list_networks()
        .await
        .map_err(InspectError::ListNetworks)?;

    for network in &list {
        writeln!(out, "{network}")?;
    }

    Ok(list)
}

/// Writes a report for each target network to `out`.
///
/// `targets` are network IDs or names. When empty, every network owned by the
/// account is reported once, in the order the service lists them. Names are
/// resolved through the account's network list; a target that is not in the
/// list is used as a literal network ID.
///
/// # Errors
///
/// Returns [`InspectError::ListNetworks`] if `targets` is empty and the
/// network list cannot be fetched, or [`InspectError::Output`] if writing to
/// `out` fails. Failures for individual networks are written to the report
/// as `"<target> NOT FOUND <error>"` and do not stop the run.
pub async fn inspect_networks<H, W>(
    client: &ZeroTierClient<H>,
    targets: &[String],
    online_only: bool,
    out: &mut W,
) -> Result<(), InspectError>
where
    H: HttpClient,
    W: Write,
{
    let index = match client.list_networks().await {
        Ok(list) => Some(list),
        Err(e) if targets.is_empty() => return Err(InspectError::ListNetworks(e)),
        Err(e) => {
            tracing::warn!("Cannot list networks, treating arguments as IDs: {e}");
            None
        }
    };

    let targets = if targets.is_empty() {
        index.as_ref().map(|list| list.ids()).unwrap_or_default()
    } else {
        targets.to_vec()
    };
    tracing::debug!("Showing detail for: {targets:?}");

    for target in &targets {
        let id = index
            .as_ref()
            .and_then(|list| list.find(target))
            .map_or(target.as_str(), |network| network.id.as_str());

        let network = match client.get_network_details(id).await {
            Ok(network) => network,
            Err(e) => {
                writeln!(out, "{target} NOT FOUND {e}")?;
                continue;
            }
        };
        writeln!(out, "{network}")?;

        for member in client
            .get_network_member_details(&network, online_only)
            .await
        {
            writeln!(out, "{MEMBER_INDENT}{member}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}
