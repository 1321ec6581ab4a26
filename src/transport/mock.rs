//! In-memory [`HttpClient`] for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Canned behaviour for one URL path.
#[derive(Debug, Clone)]
enum Route {
    Respond(http::StatusCode, String),
    ConnectionRefused,
}

/// Mock HTTP client that answers by URL path and records every request.
///
/// Paths without a route get `404 Not Found` with a JSON error body.
#[derive(Debug, Default)]
pub struct MockClient {
    routes: HashMap<String, Route>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `path` with `200 OK` and the given JSON.
    pub fn with_json(self, path: &str, body: &serde_json::Value) -> Self {
        self.with_response(path, http::StatusCode::OK, body.to_string())
    }

    /// Answers `path` with an arbitrary status and body.
    pub fn with_response(mut self, path: &str, status: http::StatusCode, body: impl Into<String>) -> Self {
        self.routes
            .insert(path.to_string(), Route::Respond(status, body.into()));
        self
    }

    /// Fails requests to `path` at the connection level.
    pub fn with_connection_failure(mut self, path: &str) -> Self {
        self.routes
            .insert(path.to_string(), Route::ConnectionRefused);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Paths requested so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let route = self.routes.get(req.url.path()).cloned();
        self.requests.lock().unwrap().push(req);

        match route {
            Some(Route::Respond(status, body)) => Ok(json_response(status, body)),
            Some(Route::ConnectionRefused) => Err(HttpError::Connection(
                std::io::Error::from(std::io::ErrorKind::ConnectionRefused).into(),
            )),
            None => Ok(json_response(
                http::StatusCode::NOT_FOUND,
                r#"{"type":"error","message":"not found"}"#.to_string(),
            )),
        }
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn json_response(status: http::StatusCode, body: String) -> HttpResponse {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );
    HttpResponse::new(status, headers, body.into_bytes())
}
