//! HTTP client types for Graph API communication.
//!
//! This module provides the transport layer for the Graph API: building
//! requests and sending them with a bounded timeout.
//!
//! # Overview
//!
//! - [`Param`] and [`encode_params`]: the key/value parameters of a call and
//!   their form encoding, with the access token always present
//! - [`GraphRequest`]: a fully built request (URL, query or form body,
//!   headers)
//! - [`HttpClient`]: sends requests and follows paging links
//! - [`HttpError`]: transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use fb_graph::{GraphConfig, GraphRequest, HttpClient, HttpMethod};
//!
//! let config = GraphConfig::default();
//! let client = HttpClient::new(&config)?;
//!
//! let request = GraphRequest::builder(HttpMethod::Get, "me/accounts", "TOKEN")
//!     .fields(["id", "name"])
//!     .param(("limit", 25_i64))
//!     .build(&config);
//!
//! let response = client.send(&request).await?;
//! ```
//!
//! Responses are returned as-is, whatever their status; see
//! [`crate::graph`] for decoding. There is no automatic retry.

mod errors;
mod http_client;
mod http_request;
mod params;

pub use errors::HttpError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{GraphRequest, GraphRequestBuilder, HttpMethod, FORM_CONTENT_TYPE};
pub use params::{encode_params, Param, ACCESS_TOKEN_KEY, FIELDS_KEY};
