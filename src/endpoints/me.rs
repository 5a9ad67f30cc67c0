//! The current user (`/me`).

use serde::{Deserialize, Serialize};

use crate::clients::{GraphRequest, HttpMethod};
use crate::config::GraphConfig;
use crate::graph::GraphApiError;

/// Builds a request for the user or page that owns `access_token`.
#[must_use]
pub fn me_req(config: &GraphConfig, access_token: &str) -> GraphRequest {
    GraphRequest::new(config, HttpMethod::Get, "me", access_token, &[], &[])
}

/// Response of [`me_req`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphResponseMe {
    /// App-scoped user ID.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Primary email; empty without the `email` permission.
    pub email: String,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_req_targets_me() {
        let request = me_req(&GraphConfig::default(), "tok");
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/v2.11/me");
        assert_eq!(request.query(), Some("access_token=tok"));
    }

    #[test]
    fn test_me_response_decodes_error() {
        let me: GraphResponseMe = serde_json::from_str(
            r#"{"error":{"message":"Invalid OAuth access token.","type":"OAuthException","code":190}}"#,
        )
        .unwrap();
        assert!(me.id.is_empty());
        assert_eq!(me.error.unwrap().code, 190);
    }
}
