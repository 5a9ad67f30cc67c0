//! Error types for the Graph API SDK.
//!
//! This module contains the configuration error type. Transport and
//! decoding errors live next to the code that produces them in
//! [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use fb_graph::{AppId, ConfigError};
//!
//! let result = AppId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App ID cannot be empty.
    #[error("App ID cannot be empty. Please provide a valid Facebook app ID.")]
    EmptyAppId,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide a valid Facebook app secret.")]
    EmptyAppSecret,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'vMAJOR.MINOR' (e.g., 'v2.11').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://graph.facebook.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Request timeout must be greater than zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,
}
