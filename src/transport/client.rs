//! reqwest-backed transport used by the `gozer` binary.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Sends the API's authenticated GET requests over a shared reqwest pool.
///
/// Requests carry headers only; the API surface used here never sends a
/// body. reqwest's defaults apply, so there is no request timeout and
/// redirects are followed.
///
/// # Example
///
/// ```no_run
/// use gozer::transport::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://my.zerotier.com/api/status")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a transport with reqwest's default connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Classifies a failed send: timeouts and malformed requests get their own
/// variants, anything else is a connection failure.
fn send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
        } = req;

        let response = self
            .inner
            .request(method, url)
            .headers(headers)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        // The whole body is buffered: every payload is one JSON document.
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}
