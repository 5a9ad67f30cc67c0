//! Graph API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Graph API to use. The version is the first path segment of every
//! request URL (`/<version>/<node-edge>`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Graph API version.
///
/// Provides variants for the versions this SDK was written against, plus a
/// `Custom` variant for any other `vMAJOR.MINOR` version.
///
/// # Example
///
/// ```rust
/// use fb_graph::ApiVersion;
///
/// let version: ApiVersion = "v2.11".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2_11);
/// assert_eq!(ApiVersion::default_version().to_string(), "v2.11");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version v2.11
    V2_11,
    /// API version v2.12
    V2_12,
    /// Any other version, stored normalized (e.g. `v3.0`).
    Custom(String),
}

impl ApiVersion {
    /// Returns the version requests are sent to unless configured otherwise.
    #[must_use]
    pub const fn default_version() -> Self {
        Self::V2_11
    }

    /// Returns the version as a URL path segment (e.g. `v2.11`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2_11 => "v2.11",
            Self::V2_12 => "v2.12",
            Self::Custom(s) => s,
        }
    }

    /// Returns `(major, minor)` for ordering.
    fn numbers(&self) -> (u32, u32) {
        Self::parse_numbers(self.as_str()).unwrap_or((u32::MAX, u32::MAX))
    }

    fn parse_numbers(s: &str) -> Option<(u32, u32)> {
        let rest = s.strip_prefix('v')?;
        let (major, minor) = rest.split_once('.')?;
        if major.is_empty()
            || minor.is_empty()
            || !major.chars().all(|c| c.is_ascii_digit())
            || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        Some((major.parse().ok()?, minor.parse().ok()?))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::default_version()
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.numbers().cmp(&other.numbers())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let s = if s.starts_with('v') { s } else { format!("v{s}") };

        match s.as_str() {
            "v2.11" => Ok(Self::V2_11),
            "v2.12" => Ok(Self::V2_12),
            _ => {
                if Self::parse_numbers(&s).is_some() {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v2.11".parse::<ApiVersion>().unwrap(), ApiVersion::V2_11);
        assert_eq!("v2.12".parse::<ApiVersion>().unwrap(), ApiVersion::V2_12);
        assert_eq!("2.11".parse::<ApiVersion>().unwrap(), ApiVersion::V2_11);
        assert_eq!(" V2.12 ".parse::<ApiVersion>().unwrap(), ApiVersion::V2_12);
    }

    #[test]
    fn test_api_version_parses_other_versions_as_custom() {
        let version: ApiVersion = "v3.0".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v3.0".to_string()));
        assert_eq!(version.to_string(), "v3.0");
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("v2".parse::<ApiVersion>().is_err());
        assert!("v2.".parse::<ApiVersion>().is_err());
        assert!("v.11".parse::<ApiVersion>().is_err());
        assert!("2024-01".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V2_11.to_string(), "v2.11");
        assert_eq!(ApiVersion::V2_12.to_string(), "v2.12");
    }

    #[test]
    fn test_default_version() {
        assert_eq!(ApiVersion::default(), ApiVersion::V2_11);
    }

    #[test]
    fn test_version_ordering_is_numeric() {
        assert!(ApiVersion::V2_11 < ApiVersion::V2_12);
        assert!(ApiVersion::V2_12 < ApiVersion::Custom("v2.100".to_string()));
        assert!(ApiVersion::Custom("v2.9".to_string()) < ApiVersion::V2_11);
        assert!(ApiVersion::V2_12 < ApiVersion::Custom("v3.0".to_string()));
    }
}
