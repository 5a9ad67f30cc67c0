//! HTTP client for Graph API communication.
//!
//! This module provides the [`HttpClient`] type, which executes built
//! [`GraphRequest`]s with a bounded timeout and follows paging links.
//! It never retries and never looks at status codes or bodies; decoding
//! is done by [`crate::graph`].

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{GraphRequest, HttpMethod};
use crate::config::GraphConfig;
use crate::graph::{read_response, read_response_fill, GraphApiError, GraphError, RespFiller};

/// Drops the request URL from a transport error; its query carries the
/// access token.
fn redact(error: reqwest::Error) -> HttpError {
    HttpError::Network(error.without_url())
}

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Graph API.
///
/// Each call sends exactly one request and applies its own timeout; a
/// timed-out call does not affect other calls in flight. Connections may be
/// reused between calls by the underlying `reqwest` pool.
///
/// # Example
///
/// ```rust,ignore
/// use fb_graph::{GraphConfig, HttpClient};
/// use fb_graph::endpoints::pages::{list_user_pages_req, UserPagesList};
///
/// let config = GraphConfig::default();
/// let client = HttpClient::new(&config)?;
///
/// let pages: UserPagesList = client.fetch(&list_user_pages_req(&config, "TOKEN")).await?;
/// if let Some(next) = pages.paging.next_link() {
///     let more: UserPagesList = client.fetch_link(next).await?;
/// }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Configuration the client was created with.
    config: GraphConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &GraphConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}fb-graph-api v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            config: config.clone(),
            default_headers,
        })
    }

    /// Returns the configuration this client was created with.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on any network, TLS or timeout failure.
    pub async fn send(&self, request: &GraphRequest) -> Result<reqwest::Response, HttpError> {
        self.send_with_timeout(request, self.config.timeout()).await
    }

    /// Sends a request with the given timeout.
    ///
    /// The response is returned whatever its status code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on any network, TLS or timeout failure.
    pub async fn send_with_timeout(
        &self,
        request: &GraphRequest,
        timeout: Duration,
    ) -> Result<reqwest::Response, HttpError> {
        let method = match request.method() {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req_builder = self
            .client
            .request(method, request.full_url())
            .timeout(timeout);

        for (key, value) in self.default_headers.iter().chain(request.headers()) {
            req_builder = req_builder.header(key, value);
        }

        // An in-memory body lets reqwest resend it if the connection drops.
        if let Some(body) = request.body() {
            req_builder = req_builder.body(body.to_vec());
        }

        tracing::debug!(
            method = %request.method(),
            path = request.path(),
            ?timeout,
            "sending Graph API request"
        );

        req_builder.send().await.map_err(redact)
    }

    /// Fetches the page behind a paging link (`paging.next` or
    /// `paging.previous`) using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidLink`] if `link` is not an absolute
    /// http(s) URL, or [`HttpError::Network`] if the request fails.
    pub async fn follow_link(&self, link: &str) -> Result<reqwest::Response, HttpError> {
        self.follow_link_with_timeout(link, self.config.timeout()).await
    }

    /// Fetches the page behind a paging link with the given timeout.
    ///
    /// The link is used as-is; it already carries the access token and
    /// cursor parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidLink`] if `link` is not an absolute
    /// http(s) URL, or [`HttpError::Network`] if the request fails.
    pub async fn follow_link_with_timeout(
        &self,
        link: &str,
        timeout: Duration,
    ) -> Result<reqwest::Response, HttpError> {
        let url = url::Url::parse(link)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .ok_or_else(|| HttpError::InvalidLink {
                link: link.to_string(),
            })?;

        let mut req_builder = self.client.get(url.as_str()).timeout(timeout);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(path = url.path(), ?timeout, "following Graph API paging link");

        req_builder.send().await.map_err(redact)
    }

    /// Sends a request and decodes the body directly into `T`.
    ///
    /// `T` is expected to carry its own optional `error` field.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Http`] if the request fails and
    /// [`GraphError::Decode`] if the body does not decode into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: &GraphRequest) -> Result<T, GraphError> {
        let response = self.send(request).await?;
        Ok(read_response(response).await?)
    }

    /// Sends a request and runs the body through the error-envelope check,
    /// handing successful bodies to `filler`.
    ///
    /// Returns `Ok(Some(error))` when the API answered with a structured
    /// error object. A malformed error envelope is reported as
    /// [`GraphError::Decode`], which still carries the partial error (see
    /// [`crate::graph::DecodeError::partial_error`]).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Http`] if the request fails and
    /// [`GraphError::Decode`] if the body cannot be decoded.
    pub async fn fetch_fill(
        &self,
        request: &GraphRequest,
        filler: Option<&mut (dyn RespFiller + Send)>,
    ) -> Result<Option<GraphApiError>, GraphError> {
        let response = self.send(request).await?;
        Ok(read_response_fill(response, filler).await?)
    }

    /// Follows a paging link and decodes the body directly into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Http`] if the link is invalid or the request
    /// fails, and [`GraphError::Decode`] if the body does not decode into `T`.
    pub async fn fetch_link<T: DeserializeOwned>(&self, link: &str) -> Result<T, GraphError> {
        let response = self.follow_link(link).await?;
        Ok(read_response(response).await?)
    }
}
