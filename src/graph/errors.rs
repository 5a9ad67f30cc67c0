//! Error types produced when decoding Graph API responses.
//!
//! - [`GraphApiError`]: the structured error object the API embeds under the
//!   `error` key of an otherwise successful response
//! - [`DecodeError`]: the body could not be read or did not have the
//!   expected shape
//! - [`GraphError`]: unified error for the `fetch*` helpers on
//!   [`crate::clients::HttpClient`]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::HttpError;

/// A structured error returned by the Graph API.
///
/// This is an API-level answer, not a transport failure: the HTTP call
/// itself succeeded. Fields missing from the payload are left at their zero
/// value.
///
/// # Example
///
/// ```rust
/// use fb_graph::GraphApiError;
///
/// let error = GraphApiError {
///     message: "Invalid OAuth access token.".to_string(),
///     error_type: "OAuthException".to_string(),
///     code: 190,
///     ..Default::default()
/// };
///
/// assert_eq!(error.to_string(), "graph: error code 190, subcode 0; msg: Invalid OAuth access token.");
/// assert_eq!(error.user_err_message(), "OAuthException: Invalid OAuth access token.");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("graph: error code {code}, subcode {error_subcode}; msg: {message}")]
#[serde(default)]
pub struct GraphApiError {
    /// Developer-facing description.
    pub message: String,
    /// Error type, e.g. `OAuthException`.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error code.
    pub code: i64,
    /// Additional detail code.
    pub error_subcode: i64,
    /// Title to show to the user, if the API provides one.
    pub error_user_title: String,
    /// Message to show to the user, if the API provides one.
    pub error_user_message: String,
    /// Internal trace ID for support requests.
    pub fbtrace_id: String,
}

impl GraphApiError {
    /// Builds an error from the decoded `error` object, field by field.
    ///
    /// Fields that are missing or of the wrong type keep their zero value.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let string = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default()
        };
        let int = |key: &str| map.get(key).and_then(Value::as_i64).unwrap_or_default();

        Self {
            message: string("message"),
            error_type: string("type"),
            code: int("code"),
            error_subcode: int("error_subcode"),
            error_user_title: string("error_user_title"),
            error_user_message: string("error_user_message"),
            fbtrace_id: string("fbtrace_id"),
        }
    }

    /// Returns a summary suitable for showing to end users.
    ///
    /// Uses `error_user_title` and `error_user_message`, falling back to
    /// `error_type` and `message` respectively when they are empty.
    #[must_use]
    pub fn user_err_message(&self) -> String {
        let title = if self.error_user_title.is_empty() {
            &self.error_type
        } else {
            &self.error_user_title
        };
        let message = if self.error_user_message.is_empty() {
            &self.message
        } else {
            &self.error_user_message
        };
        format!("{title}: {message}")
    }
}

/// Error returned when a response body cannot be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body could not be read from the connection.
    #[error("error reading response: {0}")]
    Read(#[source] reqwest::Error),

    /// The body is not valid JSON of the expected shape.
    #[error("error decoding response: {0}")]
    Json(#[from] serde_json::Error),

    /// The body has an `error` key whose value is not an object.
    ///
    /// `partial` holds whatever could be recovered: its `message` is set
    /// when the value was a string, every other field is zero.
    #[error("got an error response, but error value is not a JSON object; check the partial error's message")]
    ErrorNotObject {
        /// The partially populated error.
        partial: GraphApiError,
    },
}

impl DecodeError {
    /// Returns the partially populated API error for a malformed error
    /// envelope, so callers can inspect both together.
    #[must_use]
    pub const fn partial_error(&self) -> Option<&GraphApiError> {
        match self {
            Self::ErrorNotObject { partial } => Some(partial),
            _ => None,
        }
    }
}

/// Unified error type for send-and-decode operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The request could not be carried out.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The API answered with a structured error.
    #[error(transparent)]
    Api(#[from] GraphApiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_from_map_reads_all_fields() {
        let map = as_map(json!({
            "message": "Invalid parameter",
            "type": "OAuthException",
            "code": 100,
            "error_subcode": 1_487_390,
            "error_user_title": "Bad form",
            "error_user_message": "Please pick a form",
            "fbtrace_id": "AbCdEf"
        }));

        let error = GraphApiError::from_map(&map);
        assert_eq!(error.message, "Invalid parameter");
        assert_eq!(error.error_type, "OAuthException");
        assert_eq!(error.code, 100);
        assert_eq!(error.error_subcode, 1_487_390);
        assert_eq!(error.error_user_title, "Bad form");
        assert_eq!(error.error_user_message, "Please pick a form");
        assert_eq!(error.fbtrace_id, "AbCdEf");
    }

    #[test]
    fn test_from_map_defaults_missing_and_mistyped_fields() {
        let map = as_map(json!({"message": "m", "code": "4", "error_subcode": null}));

        let error = GraphApiError::from_map(&map);
        assert_eq!(error.message, "m");
        assert_eq!(error.code, 0);
        assert_eq!(error.error_subcode, 0);
        assert!(error.error_type.is_empty());
        assert!(error.fbtrace_id.is_empty());
    }

    #[test]
    fn test_deserialize_matches_from_map() {
        let value = json!({"message": "m", "type": "T", "code": 4});
        let deserialized: GraphApiError = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(deserialized, GraphApiError::from_map(&as_map(value)));
    }

    #[test]
    fn test_display_combines_code_subcode_and_message() {
        let error = GraphApiError {
            message: "Too many calls".to_string(),
            code: 4,
            error_subcode: 2,
            ..Default::default()
        };
        assert_eq!(
            error.to_string(),
            "graph: error code 4, subcode 2; msg: Too many calls"
        );
    }

    #[test]
    fn test_user_err_message_prefers_user_fields() {
        let error = GraphApiError {
            message: "dev message".to_string(),
            error_type: "OAuthException".to_string(),
            error_user_title: "Session expired".to_string(),
            error_user_message: "Please log in again".to_string(),
            ..Default::default()
        };
        assert_eq!(error.user_err_message(), "Session expired: Please log in again");
    }

    #[test]
    fn test_user_err_message_falls_back_per_field() {
        let no_title = GraphApiError {
            message: "dev message".to_string(),
            error_type: "OAuthException".to_string(),
            error_user_message: "Please log in again".to_string(),
            ..Default::default()
        };
        assert_eq!(no_title.user_err_message(), "OAuthException: Please log in again");

        let no_user_message = GraphApiError {
            message: "dev message".to_string(),
            error_type: "OAuthException".to_string(),
            error_user_title: "Session expired".to_string(),
            ..Default::default()
        };
        assert_eq!(no_user_message.user_err_message(), "Session expired: dev message");
    }

    #[test]
    fn test_partial_error_only_for_malformed_envelope() {
        let partial = GraphApiError {
            message: "oops".to_string(),
            ..Default::default()
        };
        let error = DecodeError::ErrorNotObject {
            partial: partial.clone(),
        };
        assert_eq!(error.partial_error(), Some(&partial));

        let json_error = serde_json::from_str::<Value>("{").unwrap_err();
        assert!(DecodeError::from(json_error).partial_error().is_none());
    }

    #[test]
    fn test_graph_error_is_transparent() {
        let api = GraphApiError {
            message: "m".to_string(),
            code: 1,
            ..Default::default()
        };
        let error = GraphError::from(api.clone());
        assert_eq!(error.to_string(), api.to_string());
    }
}
