//! # Facebook Graph API Rust SDK
//!
//! A Rust SDK for the Facebook Graph API, providing request building,
//! a bounded-timeout HTTP transport, and response decoding that separates
//! API errors from transport and decoding failures.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`GraphConfig`] and [`GraphConfigBuilder`]
//! - Parameter encoding with the access token always present via [`encode_params`]
//! - Request construction for any node or edge via [`GraphRequest`]
//! - An async HTTP client with per-call timeouts via [`HttpClient`]
//! - Response decoding that surfaces the API's `error` envelope via [`graph`]
//! - Cursor, time and offset paging descriptors
//! - Endpoint helpers for pages, apps, system users and tokens via [`endpoints`]
//! - Webhook signature verification and payloads via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fb_graph::{GraphConfig, GraphRequest, HttpMethod};
//!
//! let config = GraphConfig::default();
//!
//! let request = GraphRequest::builder(HttpMethod::Get, "me/accounts", "user-token")
//!     .fields(["id", "name"])
//!     .build(&config);
//!
//! assert_eq!(request.url(), "https://graph.facebook.com/v2.11/me/accounts");
//! assert_eq!(request.query(), Some("access_token=user-token&fields=id%2Cname"));
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use fb_graph::{GraphConfig, HttpClient};
//! use fb_graph::endpoints::me::{me_req, GraphResponseMe};
//!
//! let config = GraphConfig::default();
//! let client = HttpClient::new(&config)?;
//!
//! let me: GraphResponseMe = client.fetch(&me_req(&config, access_token)).await?;
//! match me.error {
//!     Some(error) => println!("API error: {}", error.user_err_message()),
//!     None => println!("Hello, {}", me.name),
//! }
//! ```
//!
//! ## Checking the Error Envelope
//!
//! The Graph API reports errors inside the JSON body. [`graph::decode_fill`]
//! tells a successful body, a structured API error and a malformed error
//! apart:
//!
//! ```rust
//! use fb_graph::graph::decode_fill;
//! use serde_json::Map;
//!
//! let mut body = Map::new();
//! assert!(decode_fill(br#"{"id":"1"}"#, Some(&mut body)).unwrap().is_none());
//!
//! let api_error = decode_fill(br#"{"error":{"message":"m","code":4}}"#, None)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(api_error.code, 4);
//!
//! let malformed = decode_fill(br#"{"error":"oops"}"#, None).unwrap_err();
//! assert_eq!(malformed.partial_error().unwrap().message, "oops");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: No automatic retries or page traversal

pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod graph;
pub mod signing;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{AppId, AppSecret, ApiVersion, GraphConfig, GraphConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    encode_params, GraphRequest, GraphRequestBuilder, HttpClient, HttpError, HttpMethod, Param,
};

// Re-export decoding types
pub use graph::{
    CursorPaging, DecodeError, GraphApiError, GraphError, OffsetPaging, Paging, RespFiller,
    TimePaging,
};
