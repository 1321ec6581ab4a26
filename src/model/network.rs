//! Network types and the name/ID index.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A single virtual network as returned by `/network` and `/network/{id}`.
///
/// Only the fields needed for summaries are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Network {
    /// Network ID assigned by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Free-form description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Network configuration.
    #[serde(deserialize_with = "null_as_default")]
    pub config: NetworkConfig,
}

/// Configuration block of a [`Network`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Human-readable name. Not guaranteed to be unique.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Whether members need authorization to join.
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Address ranges used for automatic IP assignment.
    #[serde(deserialize_with = "null_as_default")]
    pub ip_assignment_pools: Vec<IpAssignmentPool>,
}

/// An inclusive address range for automatic IP assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IpAssignmentPool {
    /// First address of the range.
    #[serde(deserialize_with = "null_as_default")]
    pub ip_range_start: String,
    /// Last address of the range.
    #[serde(deserialize_with = "null_as_default")]
    pub ip_range_end: String,
}

impl Network {
    /// Creates a network with the given ID, name and description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            config: NetworkConfig {
                name: name.into(),
                ..NetworkConfig::default()
            },
        }
    }

    /// Returns the network's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::network_summary(self))
    }
}

/// The networks owned by an account, indexed by ID and by name.
///
/// The list keeps the order the service returned. Both indexes are built once
/// at construction and map to positions in that list.
///
/// # Duplicates
///
/// If two networks share a key the later one wins that key. Network names are
/// not unique, so a name lookup may return only the last of several networks
/// with the same name; every network stays reachable by ID and by iteration.
#[derive(Debug, Clone, Default)]
pub struct NetworkList {
    networks: Vec<Network>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl NetworkList {
    /// Builds the list and both indexes from networks in service order.
    #[must_use]
    pub fn new(networks: Vec<Network>) -> Self {
        let mut by_id = HashMap::with_capacity(networks.len());
        let mut by_name = HashMap::with_capacity(networks.len());

        for (position, network) in networks.iter().enumerate() {
            if by_id.insert(network.id.clone(), position).is_some() {
                tracing::warn!(id = %network.id, "Duplicate network ID, keeping the last one");
            }
            if by_name.insert(network.config.name.clone(), position).is_some() {
                tracing::warn!(name = %network.config.name, "Duplicate network name, keeping the last one");
            }
        }

        Self {
            networks,
            by_id,
            by_name,
        }
    }

    /// Looks up a network by ID.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Network> {
        self.by_id.get(id).map(|&i| &self.networks[i])
    }

    /// Looks up a network by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Network> {
        self.by_name.get(name).map(|&i| &self.networks[i])
    }

    /// Looks up a network by ID, falling back to name.
    #[must_use]
    pub fn find(&self, id_or_name: &str) -> Option<&Network> {
        self.by_id(id_or_name).or_else(|| self.by_name(id_or_name))
    }

    /// Iterates over the networks in service order.
    pub fn iter(&self) -> std::slice::Iter<'_, Network> {
        self.networks.iter()
    }

    /// Returns each distinct network ID once, in service order.
    ///
    /// A duplicated ID is listed at the position of the network the ID index
    /// kept, i.e. its last occurrence.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.networks
            .iter()
            .enumerate()
            .filter(|(position, network)| self.by_id.get(&network.id) == Some(position))
            .map(|(_, network)| network.id.clone())
            .collect()
    }

    /// Returns the number of networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Returns true if the account owns no networks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl From<Vec<Network>> for NetworkList {
    fn from(networks: Vec<Network>) -> Self {
        Self::new(networks)
    }
}

impl<'a> IntoIterator for &'a NetworkList {
    type Item = &'a Network;
    type IntoIter = std::slice::Iter<'a, Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
