//! Configuration types for the Graph API SDK.
//!
//! This module provides the configuration used to build requests and
//! drive the HTTP transport.
//!
//! # Overview
//!
//! - [`GraphConfig`]: The configuration struct holding all SDK settings
//! - [`GraphConfigBuilder`]: A builder for constructing [`GraphConfig`] instances
//! - [`AppId`]: A validated app ID newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`HostUrl`]: A validated API host URL
//! - [`ApiVersion`]: The Graph API version to use
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use fb_graph::{ApiVersion, GraphConfig};
//!
//! let config = GraphConfig::builder()
//!     .api_version(ApiVersion::V2_12)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().as_ref(), "https://graph.facebook.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AppId, AppSecret, HostUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Graph API SDK.
///
/// `GraphConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct GraphConfig {
    api_version: ApiVersion,
    api_host: HostUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
}

impl GraphConfig {
    /// Creates a new builder for constructing a `GraphConfig`.
    #[must_use]
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host (scheme, host and optional port).
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the default per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the app ID, if configured.
    #[must_use]
    pub const fn app_id(&self) -> Option<&AppId> {
        self.app_id.as_ref()
    }

    /// Returns the app secret, if configured.
    #[must_use]
    pub const fn app_secret(&self) -> Option<&AppSecret> {
        self.app_secret.as_ref()
    }

    /// Returns the base URL requests are built against, e.g.
    /// `https://graph.facebook.com/v2.11/`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{}/", self.api_host, self.api_version)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            api_host: HostUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent_prefix: None,
            app_id: None,
            app_secret: None,
        }
    }
}

// Verify GraphConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphConfig>();
};

/// Builder for constructing [`GraphConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: `v2.11`
/// - `api_host`: `https://graph.facebook.com`
/// - `timeout`: 10 seconds
/// - `user_agent_prefix`, `app_id`, `app_secret`: `None`
#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
}

impl GraphConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API host. Useful for proxies and local test servers.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the default per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the app ID.
    #[must_use]
    pub fn app_id(mut self, id: AppId) -> Self {
        self.app_id = Some(id);
        self
    }

    /// Sets the app secret used for app secret proofs and webhook signatures.
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Builds the [`GraphConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<GraphConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(GraphConfig {
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host.unwrap_or_default(),
            timeout,
            user_agent_prefix: self.user_agent_prefix,
            app_id: self.app_id,
            app_secret: self.app_secret,
        })
    }
}
