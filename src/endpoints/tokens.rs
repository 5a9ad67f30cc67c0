//! Access tokens: system user tokens, token debugging and app secret proofs.

use serde::{Deserialize, Serialize};

use crate::clients::{GraphRequest, HttpMethod, Param};
use crate::config::GraphConfig;
use crate::graph::GraphApiError;
use crate::signing::compute_signature;

/// Builds a request for a system user access token.
///
/// `appsecret_proof` is the [`appsecret_proof`] of `user_token`; `scope` is
/// sent comma-joined.
#[must_use]
pub fn create_system_token_req(
    config: &GraphConfig,
    user_token: &str,
    appsecret_proof: &str,
    app_id: &str,
    scope: &[&str],
) -> GraphRequest {
    GraphRequest::new(
        config,
        HttpMethod::Get,
        "",
        user_token,
        &[],
        &[
            Param::str("business_app", app_id),
            Param::str("appsecret_proof", appsecret_proof),
            Param::str("scope", scope.join(",")),
        ],
    )
}

/// Builds a request inspecting `token_to_debug`.
#[must_use]
pub fn debug_token_req(config: &GraphConfig, access_token: &str, token_to_debug: &str) -> GraphRequest {
    GraphRequest::new(
        config,
        HttpMethod::Get,
        "debug_token",
        access_token,
        &[],
        &[Param::str("input_token", token_to_debug)],
    )
}

/// Computes the `appsecret_proof` for an access token: the lowercase hex
/// HMAC-SHA256 of the token keyed by the app secret.
///
/// # Example
///
/// ```rust
/// use fb_graph::endpoints::tokens::appsecret_proof;
///
/// let proof = appsecret_proof("user-token", "app-secret");
/// assert_eq!(proof.len(), 64);
/// ```
#[must_use]
pub fn appsecret_proof(access_token: &str, app_secret: &str) -> String {
    compute_signature(access_token.as_bytes(), app_secret)
}

/// Response of [`debug_token_req`].
///
/// When `error` is set no `data` is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDebug {
    /// Token metadata.
    pub data: TokenDebugData,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// Metadata about an inspected token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDebugData {
    /// Whether the token can still be used.
    pub is_valid: bool,
    /// App the token was issued for.
    pub app_id: String,
    /// Name of that app.
    pub application: String,
    /// `USER`, `PAGE`, `APP` or `SYSTEM_USER`.
    #[serde(rename = "type")]
    pub token_type: String,
    /// Unix timestamp of issue.
    pub issued_at: i64,
    /// Unix timestamp of expiry; zero if it never expires.
    pub expires_at: i64,
    /// Granted permissions.
    pub scopes: Vec<String>,
    /// User the token belongs to.
    pub user_id: String,
    /// Problem with the inspected token; zero when there is none.
    pub error: TokenDebugError,
}

/// Why an inspected token is invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDebugError {
    /// Error code.
    pub code: i64,
    /// Error description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_map(request: &GraphRequest) -> HashMap<String, String> {
        url::form_urlencoded::parse(request.query().unwrap_or_default().as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn test_create_system_token_req_targets_version_root() {
        let request = create_system_token_req(
            &GraphConfig::default(),
            "user",
            "proof",
            "42",
            &["ads_management", "manage_pages"],
        );

        assert_eq!(request.path(), "/v2.11/");
        let query = query_map(&request);
        assert_eq!(query["access_token"], "user");
        assert_eq!(query["business_app"], "42");
        assert_eq!(query["appsecret_proof"], "proof");
        assert_eq!(query["scope"], "ads_management,manage_pages");
    }

    #[test]
    fn test_debug_token_req_sends_input_token() {
        let request = debug_token_req(&GraphConfig::default(), "app|token", "user-token");
        assert_eq!(request.path(), "/v2.11/debug_token");
        assert_eq!(query_map(&request)["input_token"], "user-token");
    }

    #[test]
    fn test_appsecret_proof_is_hmac_of_token() {
        assert_eq!(
            appsecret_proof("message", "key"),
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_token_debug_decodes() {
        let debug: TokenDebug = serde_json::from_str(
            r#"{"data":{
                "app_id":"42",
                "type":"USER",
                "application":"My App",
                "expires_at":1522862162,
                "is_valid":true,
                "scopes":["email","manage_pages"],
                "user_id":"7"
            }}"#,
        )
        .unwrap();

        assert!(debug.data.is_valid);
        assert_eq!(debug.data.token_type, "USER");
        assert_eq!(debug.data.scopes, vec!["email", "manage_pages"]);
        assert_eq!(debug.data.error, TokenDebugError::default());
        assert!(debug.error.is_none());
    }
}
