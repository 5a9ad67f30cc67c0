//! Transport error types for the Graph API SDK.
//!
//! The transport never interprets status codes or bodies, so the only
//! failures it reports are network-level ones and unusable continuation
//! links.
//!
//! # Example
//!
//! ```rust,ignore
//! use fb_graph::clients::{HttpClient, HttpError};
//!
//! match client.send(&request).await {
//!     Ok(response) => { /* decode it */ }
//!     Err(HttpError::Network(e)) if e.is_timeout() => println!("timed out"),
//!     Err(e) => println!("transport error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request could not be carried out.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, DNS, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A continuation link is not an absolute http(s) URL.
    #[error("Invalid paging link '{link}'. Expected an absolute http(s) URL.")]
    InvalidLink {
        /// The link that was provided.
        link: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_link_error_includes_link() {
        let error = HttpError::InvalidLink {
            link: "/v2.11/me".to_string(),
        };
        assert!(error.to_string().contains("/v2.11/me"));
        assert!(error.to_string().contains("absolute"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &HttpError::InvalidLink {
            link: String::new(),
        };
        let _ = error;
    }
}
