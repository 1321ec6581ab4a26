//! REST endpoint templates.

use std::fmt;

use url::Url;

use crate::transport::HttpError;

/// A read endpoint of the API, relative to the service base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/network`: all networks owned by the account.
    Networks,
    /// `/network/{id}`: one network.
    Network(&'a str),
    /// `/network/{id}/member`: the member collection of a network.
    Members(&'a str),
    /// `/network/{id}/member/{id}`: one member of a network.
    Member(&'a str, &'a str),
}

impl Endpoint<'_> {
    fn segments(&self) -> Vec<&str> {
        match *self {
            Self::Networks => vec!["network"],
            Self::Network(network) => vec!["network", network],
            Self::Members(network) => vec!["network", network, "member"],
            Self::Member(network, member) => vec!["network", network, "member", member],
        }
    }

    /// Resolves the endpoint against a base URL.
    ///
    /// Segments are appended to the base path, so `https://host/api` and
    /// `https://host/api/` both yield `https://host/api/network/...`.
    /// IDs are percent-encoded as single path segments.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if `base` cannot have a path
    /// (e.g. `mailto:` URLs).
    pub fn url(&self, base: &Url) -> Result<Url, HttpError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| HttpError::InvalidUrl(format!("'{base}' cannot be used as a base URL")))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
