//! The HTTP session shared by all resource instances.
//!
//! This module provides the [`Session`] type: the sole network channel of
//! the object model. It owns the underlying HTTP client, the default
//! headers, and the optional credentials that the auth guard consults.
//! Retry, rate-limit, and caching policy live outside this crate; the
//! session issues exactly one request per call and reports what happened.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::HttpError;
use crate::clients::response::HttpResponse;

/// Library version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An HTTP session for the issue-tracking service.
///
/// The session is the one shared collaborator of every resource: it holds
/// process-scoped authentication state and performs all network calls.
/// All URLs passed to it are absolute; canonical resource URLs arrive in
/// the service's JSON payloads.
///
/// # Thread Safety
///
/// `Session` is `Clone + Send + Sync`. Clones share the underlying
/// connection pool, so handing a clone to each resource instance is cheap.
///
/// # Example
///
/// ```rust
/// use tracker_api::{Credentials, Session};
///
/// let anonymous = Session::anonymous();
/// assert!(!anonymous.has_auth());
///
/// let authed = Session::authenticated(Credentials::token("abc123"));
/// assert!(authed.has_auth());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Credentials, when the session is authenticated.
    credentials: Option<Credentials>,
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

impl Session {
    /// Creates a session without credentials.
    ///
    /// Reads and listings work; mutating operations fail locally with an
    /// authentication error before any network I/O.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::build(None, None)
    }

    /// Creates a session with the given credentials.
    #[must_use]
    pub fn authenticated(credentials: Credentials) -> Self {
        Self::build(Some(credentials), None)
    }

    /// Creates a session with credentials and a User-Agent prefix.
    ///
    /// The prefix identifies the calling application, ahead of the library's
    /// own User-Agent string.
    #[must_use]
    pub fn with_user_agent_prefix(credentials: Option<Credentials>, prefix: &str) -> Self {
        Self::build(credentials, Some(prefix))
    }

    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    fn build(credentials: Option<Credentials>, user_agent_prefix: Option<&str>) -> Self {
        let prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{prefix}tracker-api-rust v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Accept-Charset".to_string(), "utf-8".to_string());

        if let Some(credentials) = &credentials {
            default_headers.insert("Authorization".to_string(), credentials.header_value());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
            credentials,
        }
    }

    /// Returns `true` if this session carries credentials.
    #[must_use]
    pub const fn has_auth(&self) -> bool {
        self.credentials.is_some()
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request never completes.
    /// Non-2xx statuses are returned as `Ok` responses.
    pub async fn get(
        &self,
        url: &str,
        params: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.send(reqwest::Method::GET, url, params, None).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request never completes.
    pub async fn patch(&self, url: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        self.send(reqwest::Method::PATCH, url, None, Some(body)).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request never completes.
    pub async fn post(&self, url: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        self.send(reqwest::Method::POST, url, None, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the request never completes.
    pub async fn delete(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.send(reqwest::Method::DELETE, url, None, None).await
    }

    async fn send(
        &self,
        method: reqwest::Method,
        url: &str,
        params: Option<&HashMap<String, String>>,
        body: Option<&Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = self.client.request(method.clone(), url);

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(params) = params {
            builder = builder.query(params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(%method, %url, "issuing request");

        let res = builder.send().await?;

        let status = res.status().as_u16();
        let headers = parse_response_headers(res.headers());
        let text = res.text().await?;

        // Empty bodies (204) and non-JSON bodies both read as "no body".
        let body = if text.is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };

        if status >= 400 {
            tracing::warn!(status, %url, "request returned non-success status");
        }

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Parses response headers into a `HashMap` with lowercased names.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}
