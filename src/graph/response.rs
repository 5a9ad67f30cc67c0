//! Response decoding for the Graph API.
//!
//! The Graph API reports application errors inside a normal JSON body
//! under an `error` key. [`decode_fill`] reads a body once and sorts it into
//! one of four outcomes:
//!
//! | Body                          | Result                                   |
//! |-------------------------------|------------------------------------------|
//! | not a JSON object             | `Err(DecodeError::Json)`, filler untouched |
//! | no `error` key                | `Ok(None)`, filler called once           |
//! | `error` is an object          | `Ok(Some(GraphApiError))`                |
//! | `error` is anything else      | `Err(DecodeError::ErrorNotObject { partial })` |
//!
//! [`decode_into`] skips the envelope check and deserializes straight into a
//! typed target that has its own `error` field.
//!
//! The async variants take ownership of the `reqwest::Response`, so the
//! connection is released on every path, including read failures.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::graph::errors::{DecodeError, GraphApiError};

/// The key under which the API reports errors.
pub const ERROR_KEY: &str = "error";

/// A type that can populate itself from a generically decoded response.
///
/// [`decode_fill`] calls [`fill`](Self::fill) only when the body was decoded
/// without problems and has no `error` key.
///
/// # Example
///
/// ```rust
/// use fb_graph::graph::{decode_fill, RespFiller};
/// use serde_json::{Map, Value};
///
/// #[derive(Default)]
/// struct PageName(String);
///
/// impl RespFiller for PageName {
///     fn fill(&mut self, body: &Map<String, Value>) {
///         if let Some(name) = body.get("name").and_then(Value::as_str) {
///             self.0 = name.to_string();
///         }
///     }
/// }
///
/// let mut page = PageName::default();
/// let api_error = decode_fill(br#"{"id":"1","name":"Cafe"}"#, Some(&mut page)).unwrap();
/// assert!(api_error.is_none());
/// assert_eq!(page.0, "Cafe");
/// ```
pub trait RespFiller {
    /// Absorbs the decoded response body.
    fn fill(&mut self, body: &Map<String, Value>);
}

impl RespFiller for Map<String, Value> {
    fn fill(&mut self, body: &Map<String, Value>) {
        self.clone_from(body);
    }
}

/// Decodes a response body, checking for the API's error envelope.
///
/// Returns `Ok(None)` after handing the body to `filler` (if any) when there
/// is no `error` key, and `Ok(Some(_))` with the structured error when the
/// `error` value is an object.
///
/// The whole body must be a single JSON object. Trailing bytes after it and
/// a literal `null` are both rejected rather than ignored.
///
/// # Errors
///
/// - [`DecodeError::Json`] if the body is not exactly one JSON object;
///   `filler` is not called.
/// - [`DecodeError::ErrorNotObject`] if the `error` value is not an object.
///   The error carries a partial [`GraphApiError`] whose `message` holds the
///   value when it was a string; check it together with the error.
pub fn decode_fill(
    body: &[u8],
    filler: Option<&mut dyn RespFiller>,
) -> Result<Option<GraphApiError>, DecodeError> {
    let tree: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Graph API response is not a JSON object");
        DecodeError::from(e)
    })?;

    match tree.get(ERROR_KEY) {
        None => {
            tracing::debug!("Graph API response carries no error");
            if let Some(filler) = filler {
                filler.fill(&tree);
            }
            Ok(None)
        }
        Some(Value::Object(error)) => {
            let api_error = GraphApiError::from_map(error);
            tracing::debug!(
                code = api_error.code,
                subcode = api_error.error_subcode,
                "Graph API response carries an error"
            );
            Ok(Some(api_error))
        }
        Some(other) => {
            let partial = GraphApiError {
                message: other.as_str().map(str::to_string).unwrap_or_default(),
                ..GraphApiError::default()
            };
            tracing::warn!(
                message = %partial.message,
                "Graph API error value is not a JSON object"
            );
            Err(DecodeError::ErrorNotObject { partial })
        }
    }
}

/// Decodes a response body directly into `T`.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if the body does not decode into `T`.
pub fn decode_into<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Reads the whole response body and runs it through [`decode_fill`].
///
/// # Errors
///
/// Returns [`DecodeError::Read`] if the body cannot be read, otherwise the
/// errors of [`decode_fill`].
pub async fn read_response_fill(
    response: reqwest::Response,
    filler: Option<&mut (dyn RespFiller + Send)>,
) -> Result<Option<GraphApiError>, DecodeError> {
    let body = read_body(response).await?;
    decode_fill(&body, filler.map(|f| f as &mut dyn RespFiller))
}

/// Reads the whole response body and decodes it into `T`.
///
/// # Errors
///
/// Returns [`DecodeError::Read`] if the body cannot be read and
/// [`DecodeError::Json`] if it does not decode into `T`.
pub async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DecodeError> {
    let body = read_body(response).await?;
    decode_into(&body)
}

async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, DecodeError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| DecodeError::Read(e.without_url()))?;
    Ok(body.to_vec())
}
