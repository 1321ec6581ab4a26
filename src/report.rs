//! One-line summaries of networks and members.

use crate::model::{Network, NetworkMember};

/// Width the member name is padded to.
const MEMBER_NAME_WIDTH: usize = 25;

/// Formats a network as `"<id> <name> <description>"`.
#[must_use]
pub fn network_summary(network: &Network) -> String {
    format!(
        "{} {} {}",
        network.id, network.config.name, network.description
    )
}

/// Formats a member as a tab-led line followed by its state flags.
///
/// The line is `"\t<name> <node id> [<ips>] \t<description>"`, with the name
/// left-aligned in a 25 character column, then ` Unauthorized`, ` Bridged`,
/// ` Hidden` and ` Offline` in that order for each flag that applies.
#[must_use]
pub fn member_summary(member: &NetworkMember) -> String {
    let mut summary = format!(
        "\t{:<width$} {} {} \t{}",
        member.name,
        member.node_id,
        ip_list(&member.config.ip_assignments),
        member.description,
        width = MEMBER_NAME_WIDTH,
    );
    for flag in member.flags() {
        summary.push(' ');
        summary.push_str(flag);
    }
    summary
}

/// Renders addresses as `[a b c]`.
fn ip_list(addresses: &[String]) -> String {
    format!("[{}]", addresses.join(" "))
}
