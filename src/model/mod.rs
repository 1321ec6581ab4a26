//! Domain model for ZeroTier Central resources.
//!
//! This module provides:
//! - Networks and their configuration ([`Network`], [`NetworkConfig`])
//! - A name/ID index over a fetched network list ([`NetworkList`])
//! - Network members ([`NetworkMember`], [`MemberConfig`])
//! - The partial schema of a member-collection entry ([`MemberRef`])
//!
//! Wire names are camelCase. Missing and `null` fields decode to their
//! zero value; unknown fields are ignored.

mod error;
mod member;
mod network;


pub use error::SchemaError;
pub use member::{MemberConfig, MemberRef, NetworkMember, sort_by_name};
pub use network::{IpAssignmentPool, Network, NetworkConfig, NetworkList};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
