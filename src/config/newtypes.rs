//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Facebook app ID.
///
/// # Example
///
/// ```rust
/// use fb_graph::AppId;
///
/// let id = AppId::new("1234567890").unwrap();
/// assert_eq!(id.as_ref(), "1234567890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated app ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for AppId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AppId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Facebook app secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AppSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use fb_graph::AppSecret;
///
/// let secret = AppSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AppSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    /// Creates a new validated app secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyAppSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AppSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(*****)")
    }
}

/// A validated API host URL (scheme, host and optional port).
///
/// Any trailing slash is dropped so that paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use fb_graph::HostUrl;
///
/// let url = HostUrl::new("https://graph.facebook.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://graph.facebook.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "graph.facebook.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// The production Graph API host.
    pub const GRAPH: &'static str = "https://graph.facebook.com";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme, has an
    /// empty host, or carries a path, query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        if remainder.contains(['/', '?', '#']) {
            return Err(invalid());
        }
        let host_end = remainder.find(':').map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the production Graph API host.
    #[must_use]
    pub fn graph() -> Self {
        let scheme_end = "https".len();
        let host_start = scheme_end + 3;
        Self {
            url: Self::GRAPH.to_string(),
            scheme_end,
            host_start,
            host_end: Self::GRAPH.len(),
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for HostUrl {
    fn default() -> Self {
        Self::graph()
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_rejects_empty_string() {
        assert!(matches!(AppId::new(""), Err(ConfigError::EmptyAppId)));
        assert!(matches!(AppId::new("   "), Err(ConfigError::EmptyAppId)));
    }

    #[test]
    fn test_app_id_serde_round_trip() {
        let id = AppId::new("42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""42""#);
        let restored: AppId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);
        assert!(serde_json::from_str::<AppId>(r#""""#).is_err());
    }

    #[test]
    fn test_app_secret_masks_value_in_debug() {
        let secret = AppSecret::new("super-secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "AppSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_app_secret_rejects_empty_string() {
        assert!(matches!(AppSecret::new(""), Err(ConfigError::EmptyAppSecret)));
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://graph.facebook.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "graph.facebook.com");

        let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("graph.facebook.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://graph.facebook.com").is_err());
        assert!(HostUrl::new("https://graph.facebook.com/v2.11").is_err());
        assert!(HostUrl::new("https://:443").is_err());
    }

    #[test]
    fn test_default_host_is_graph() {
        let host = HostUrl::default();
        assert_eq!(host, HostUrl::new("https://graph.facebook.com").unwrap());
        assert_eq!(host.host_name(), "graph.facebook.com");
    }
}
