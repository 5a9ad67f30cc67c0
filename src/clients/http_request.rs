//! HTTP request types for the Graph API SDK.
//!
//! This module provides [`GraphRequest`], a fully formed outbound request,
//! and [`GraphRequestBuilder`] for constructing one.

use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;

use crate::clients::params::{encode_params, Param, FIELDS_KEY};
use crate::config::GraphConfig;

/// Content type of `POST` bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP methods used with the Graph API.
///
/// `Delete` is shaped like `Get`: its parameters travel in the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a node or edge.
    Get,
    /// Create or update; parameters are sent as a form body.
    Post,
    /// Delete a node or edge.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if this method carries its parameters in the body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to the Graph API, ready to be sent.
///
/// Exactly one of [`query`](Self::query) and [`body`](Self::body) is set:
/// `POST` requests carry the encoded parameters as a form body, all other
/// methods carry them as the query string. The access token is always part
/// of that encoding.
///
/// The body is kept in memory, so it can be read again from the start as
/// many times as needed (see [`body_reader`](Self::body_reader)).
///
/// # Example
///
/// ```rust
/// use fb_graph::{GraphConfig, GraphRequest, HttpMethod, Param};
///
/// let config = GraphConfig::default();
/// let request = GraphRequest::builder(HttpMethod::Get, "me/accounts", "TOKEN")
///     .fields(["id", "name"])
///     .param(Param::int("limit", 10))
///     .build(&config);
///
/// assert_eq!(request.path(), "/v2.11/me/accounts");
/// assert_eq!(request.query(), Some("access_token=TOKEN&fields=id%2Cname&limit=10"));
/// assert!(request.body().is_none());
/// ```
#[derive(Clone)]
pub struct GraphRequest {
    method: HttpMethod,
    url: String,
    path: String,
    query: Option<String>,
    body: Option<Vec<u8>>,
    headers: HashMap<String, String>,
}

impl GraphRequest {
    /// Builds a request in one call.
    ///
    /// `node_edge` must not have a leading slash or the API version. An empty
    /// `fields` slice leaves the endpoint's default field set in effect. The
    /// caller's `params` are not modified.
    #[must_use]
    pub fn new(
        config: &GraphConfig,
        method: HttpMethod,
        node_edge: &str,
        access_token: &str,
        fields: &[&str],
        params: &[Param],
    ) -> Self {
        let mut params = params.to_vec();
        if !fields.is_empty() {
            params.push(Param::str(FIELDS_KEY, fields.join(",")));
        }

        let path = format!("/{}/{}", config.api_version(), node_edge);
        let url = format!("{}{}", config.api_host(), path);
        let encoded = encode_params(access_token, &params);

        let mut headers = HashMap::new();
        let (query, body) = if method.has_body() {
            headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
            (None, Some(encoded.into_bytes()))
        } else {
            (Some(encoded), None)
        };

        Self {
            method,
            url,
            path,
            query,
            body,
            headers,
        }
    }

    /// Creates a new builder for constructing a `GraphRequest`.
    #[must_use]
    pub fn builder(
        method: HttpMethod,
        node_edge: impl Into<String>,
        access_token: impl Into<String>,
    ) -> GraphRequestBuilder {
        GraphRequestBuilder::new(method, node_edge, access_token)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the URL without the query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the URL including the query string, if any.
    #[must_use]
    pub fn full_url(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.url, query),
            None => self.url.clone(),
        }
    }

    /// Returns the URL path, e.g. `/v2.11/me`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the encoded query string for body-less methods.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the encoded body for `POST` requests.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Returns a fresh reader over the body, positioned at its start.
    #[must_use]
    pub fn body_reader(&self) -> Option<Cursor<&[u8]>> {
        self.body().map(Cursor::new)
    }

    /// Returns the body length in bytes, or `None` for body-less methods.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.body.as_ref().map(|body| body.len() as u64)
    }

    /// Returns the request-specific headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

// The query and body carry the access token, so they are left out.
impl fmt::Debug for GraphRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("content_length", &self.content_length())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing [`GraphRequest`] instances.
#[derive(Debug)]
pub struct GraphRequestBuilder {
    method: HttpMethod,
    node_edge: String,
    access_token: String,
    fields: Vec<String>,
    params: Vec<Param>,
}

impl GraphRequestBuilder {
    fn new(method: HttpMethod, node_edge: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            method,
            node_edge: node_edge.into(),
            access_token: access_token.into(),
            fields: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Adds a single field to the selection. Nested selections such as
    /// `picture{url}` are passed through unchanged.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Adds several fields to the selection, in order.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Adds several parameters, in order.
    #[must_use]
    pub fn params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = Param>,
    {
        self.params.extend(params);
        self
    }

    /// Builds the [`GraphRequest`] against the given configuration.
    #[must_use]
    pub fn build(self, config: &GraphConfig) -> GraphRequest {
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        GraphRequest::new(
            config,
            self.method,
            &self.node_edge,
            &self.access_token,
            &fields,
            &self.params,
        )
    }
}
