//! The ZeroTier Central API client.

use http::header::{ACCEPT, AUTHORIZATION};
use http::{HeaderValue, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::model::{MemberRef, Network, NetworkList, NetworkMember, sort_by_name};
use crate::transport::{HttpClient, HttpRequest};

use super::{ApiError, ApiToken, Endpoint};

/// Read-only client for the ZeroTier Central REST API.
///
/// Every call is a single authenticated GET; nothing is cached and nothing is
/// retried.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use gozer::api::{ApiToken, ZeroTierClient};
/// use gozer::transport::ReqwestClient;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ZeroTierClient::new(
///     ReqwestClient::new(),
///     Url::parse("https://my.zerotier.com/api")?,
///     ApiToken::new("my-token")?,
/// );
/// let networks = client.list_networks().await?;
/// for network in &networks {
///     println!("{network}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ZeroTierClient<H> {
    http: H,
    base_url: Url,
    token: ApiToken,
}

impl<H> ZeroTierClient<H> {
    /// Creates a client for the service at `base_url`.
    #[must_use]
    pub const fn new(http: H, base_url: Url, token: ApiToken) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl<H: HttpClient> ZeroTierClient<H> {
    /// Fetches every network owned by the account and indexes it by ID and name.
    ///
    /// The list keeps the order the service returned; see
    /// [`crate::inspect::print_networks`] to write it out.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the service rejects it.
    pub async fn list_networks(&self) -> Result<NetworkList, ApiError> {
        tracing::debug!("Listing networks");

        let networks: Vec<Network> = self.get_json(Endpoint::Networks).await?;
        Ok(NetworkList::new(networks))
    }

    /// Fetches one network.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the network is unknown.
    pub async fn get_network_details(&self, network_id: &str) -> Result<Network, ApiError> {
        tracing::debug!(network_id, "Fetching network details");
        self.get_json(Endpoint::Network(network_id)).await
    }

    /// Fetches the member collection of a network.
    ///
    /// Entries are kept as raw JSON; use [`MemberRef::address`] to get each
    /// member's node address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the network is unknown.
    pub async fn get_network_members(&self, network_id: &str) -> Result<Vec<MemberRef>, ApiError> {
        tracing::debug!(network_id, "Fetching network members");
        self.get_json(Endpoint::Members(network_id)).await
    }

    /// Fetches one member of a network.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the member is unknown.
    pub async fn get_member_detail(
        &self,
        network_id: &str,
        member_id: &str,
    ) -> Result<NetworkMember, ApiError> {
        tracing::debug!(network_id, member_id, "Fetching member detail");
        self.get_json(Endpoint::Member(network_id, member_id)).await
    }

    /// Resolves the details of every member of `network`, sorted by name.
    ///
    /// Failures never abort the whole operation: if the member collection
    /// cannot be fetched the result is empty, and a member whose entry or
    /// detail cannot be read is logged and left out. With `online_only`,
    /// offline members are dropped, and so is a member whose detail fetch
    /// failed, since it cannot be shown to be online.
    pub async fn get_network_member_details(
        &self,
        network: &Network,
        online_only: bool,
    ) -> Vec<NetworkMember> {
        tracing::debug!(network_id = %network.id, online_only, "Resolving member details");

        let entries = match self.get_network_members(&network.id).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(network_id = %network.id, "Can't list members: {e}");
                return Vec::new();
            }
        };

        let mut members = Vec::with_capacity(entries.len());
        for entry in &entries {
            let address = match entry.address() {
                Ok(address) => address,
                Err(e) => {
                    tracing::error!(network_id = %network.id, "Skipping malformed member entry: {e}");
                    continue;
                }
            };

            match self.get_member_detail(&network.id, address).await {
                Ok(member) if online_only && !member.online => {
                    tracing::debug!(member_id = address, "Skipping offline member");
                }
                Err(e) if online_only => {
                    tracing::debug!(member_id = address, "Skipping member without detail: {e}");
                }
                Err(e) => {
                    tracing::error!(member_id = address, "{e}");
                }
                Ok(member) => {
                    log_payload(&address, &member);
                    members.push(member);
                }
            }
        }

        sort_by_name(&mut members);
        members
    }

    /// Performs an authenticated GET and decodes the JSON response.
    ///
    /// The body is decoded before the status is checked, so error payloads
    /// still reach the debug log; any status other than 200 is then reported
    /// as [`ApiError::Server`] regardless of how decoding went.
    async fn get_json<T>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Serialize,
    {
        let url = endpoint.url(&self.base_url).map_err(|source| ApiError::Request {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let request = HttpRequest::get(url)
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_header(AUTHORIZATION, self.token.header_value());

        tracing::debug!("Sending request\n{}", request.dump());
        let response = self
            .http
            .request(request)
            .await
            .map_err(|source| ApiError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;
        tracing::debug!("Received response\n{}", response.dump());

        let decoded = decode_stream::<T>(&response.body);
        match &decoded {
            Ok(Some(payload)) => log_payload(&endpoint, payload),
            Ok(None) => {}
            Err(e) => tracing::debug!(%endpoint, "Cannot parse response: {e}"),
        }

        if response.status != StatusCode::OK {
            return Err(ApiError::Server {
                endpoint: endpoint.to_string(),
                status: response.status,
            });
        }

        match decoded {
            Ok(Some(payload)) => Ok(payload),
            Ok(None) => Err(ApiError::EmptyBody {
                endpoint: endpoint.to_string(),
            }),
            Err(source) => Err(ApiError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }),
        }
    }
}

/// Decodes a body holding zero or more concatenated JSON values.
///
/// Decoding runs until the input is exhausted; the last value wins.
fn decode_stream<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, serde_json::Error> {
    let mut last = None;
    for value in serde_json::Deserializer::from_slice(body).into_iter::<T>() {
        last = Some(value?);
    }
    Ok(last)
}

/// Logs a decoded payload as pretty JSON.
fn log_payload(label: &dyn std::fmt::Display, payload: &impl Serialize) {
    match serde_json::to_string_pretty(payload) {
        Ok(pretty) => tracing::debug!("Decoded {label}\n{pretty}"),
        Err(e) => tracing::warn!("JSON pretty print of {label} failed: {e}"),
    }
}
