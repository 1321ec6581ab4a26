//! Network member types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{SchemaError, null_as_default};

/// A device that has joined a network, as returned by
/// `/network/{id}/member/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkMember {
    /// ID of the network this member belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub network_id: String,
    /// Node address, unique within the network.
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,
    /// Whether the member is hidden in the web UI.
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-form description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether the node is currently online.
    #[serde(deserialize_with = "null_as_default")]
    pub online: bool,
    /// Authorization state.
    #[serde(deserialize_with = "null_as_default")]
    pub config: MemberConfig,
}

/// Authorization state of a [`NetworkMember`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberConfig {
    /// Whether the member may use the network.
    #[serde(deserialize_with = "null_as_default")]
    pub authorized: bool,
    /// Whether the member bridges other traffic onto the network.
    #[serde(deserialize_with = "null_as_default")]
    pub active_bridge: bool,
    /// Managed IP addresses assigned to the member.
    #[serde(deserialize_with = "null_as_default")]
    pub ip_assignments: Vec<String>,
}

impl NetworkMember {
    /// Creates an authorized, online member with the given node ID and name.
    #[must_use]
    pub fn new(node_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            name: name.into(),
            online: true,
            config: MemberConfig {
                authorized: true,
                ..MemberConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the state flags that apply to this member, in display order.
    #[must_use]
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if !self.config.authorized {
            flags.push("Unauthorized");
        }
        if self.config.active_bridge {
            flags.push("Bridged");
        }
        if self.hidden {
            flags.push("Hidden");
        }
        if !self.online {
            flags.push("Offline");
        }
        flags
    }
}

impl fmt::Display for NetworkMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::member_summary(self))
    }
}

/// Sorts members by display name.
///
/// The sort is stable: members with equal names keep their relative order.
pub fn sort_by_name(members: &mut [NetworkMember]) {
    members.sort_by(|a, b| a.name.cmp(&b.name));
}

/// One entry of the `/network/{id}/member` collection.
///
/// The collection's schema is loosely documented, so the entry is kept as raw
/// JSON and only the fields actually used are extracted, through accessors
/// that fail with a [`SchemaError`] instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberRef(serde_json::Value);

impl MemberRef {
    /// Wraps a raw JSON value.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the member's node address from `config.address`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if `config` or `config.address` is missing,
    /// or if either has the wrong JSON type.
    pub fn address(&self) -> Result<&str, SchemaError> {
        let config = self
            .0
            .get("config")
            .ok_or(SchemaError::MissingField { path: "config" })?;
        if !config.is_object() {
            return Err(SchemaError::WrongType {
                path: "config",
                expected: "object",
            });
        }

        config
            .get("address")
            .ok_or(SchemaError::MissingField {
                path: "config.address",
            })?
            .as_str()
            .ok_or(SchemaError::WrongType {
                path: "config.address",
                expected: "string",
            })
    }
}

impl From<serde_json::Value> for MemberRef {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}
