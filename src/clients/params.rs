//! Typed request parameters and their form encoding.
//!
//! Every Graph API request carries its parameters as a single
//! `application/x-www-form-urlencoded` string, either as the query string
//! (`GET`, `DELETE`) or as the body (`POST`). [`encode_params`] produces that
//! string from an access token and a list of [`Param`]s.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// The key under which the access token is sent.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// The key under which a field selection is sent.
pub const FIELDS_KEY: &str = "fields";

/// A key/value pair to be sent with a request.
///
/// # Example
///
/// ```rust
/// use fb_graph::Param;
///
/// let limit = Param::int("limit", 25);
/// assert_eq!(limit.key(), "limit");
/// assert_eq!(limit.value(), "25");
///
/// let input: Param = ("input_token", "abc").into();
/// assert_eq!(input.value(), "abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Param {
    /// A string value, sent as-is.
    Str {
        /// Parameter name.
        key: String,
        /// Parameter value.
        value: String,
    },
    /// An integer value, sent in decimal.
    Int {
        /// Parameter name.
        key: String,
        /// Parameter value.
        value: i64,
    },
}

impl Param {
    /// Creates a string-valued parameter.
    #[must_use]
    pub fn str(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Str {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an integer-valued parameter.
    #[must_use]
    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::Int {
            key: key.into(),
            value,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Str { key, .. } | Self::Int { key, .. } => key,
        }
    }

    /// Returns the wire representation of the value.
    #[must_use]
    pub fn value(&self) -> Cow<'_, str> {
        match self {
            Self::Str { value, .. } => Cow::Borrowed(value),
            Self::Int { value, .. } => Cow::Owned(value.to_string()),
        }
    }
}

impl From<(&str, &str)> for Param {
    fn from((key, value): (&str, &str)) -> Self {
        Self::str(key, value)
    }
}

impl From<(&str, String)> for Param {
    fn from((key, value): (&str, String)) -> Self {
        Self::str(key, value)
    }
}

impl From<(&str, i64)> for Param {
    fn from((key, value): (&str, i64)) -> Self {
        Self::int(key, value)
    }
}

/// Encodes the access token and parameters into a form-encoded string.
///
/// The access token is set first and each parameter then overwrites any
/// earlier value with the same key, so the last value per key wins. This
/// includes `access_token` itself; a warning is logged when that happens.
/// Keys are emitted in sorted order. Parameters with an empty key are
/// skipped with a warning.
///
/// # Example
///
/// ```rust
/// use fb_graph::{encode_params, Param};
///
/// let encoded = encode_params("T", &[Param::str("q", "a b"), Param::int("limit", 5)]);
/// assert_eq!(encoded, "access_token=T&limit=5&q=a+b");
/// ```
#[must_use]
pub fn encode_params(access_token: &str, params: &[Param]) -> String {
    let mut values: BTreeMap<&str, Cow<'_, str>> = BTreeMap::new();
    values.insert(ACCESS_TOKEN_KEY, Cow::Borrowed(access_token));

    for param in params {
        if param.key().is_empty() {
            tracing::warn!("skipping request parameter with an empty key");
            continue;
        }
        if param.key() == ACCESS_TOKEN_KEY {
            tracing::warn!("request parameter overrides the access token");
        }
        values.insert(param.key(), param.value());
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &values {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
