//! App webhook subscriptions.

use serde::{Deserialize, Serialize};

use crate::clients::{GraphRequest, HttpMethod};
use crate::config::GraphConfig;
use crate::graph::GraphApiError;

/// Lists the webhook subscriptions of an app. Needs an app access token.
#[must_use]
pub fn list_app_subscriptions_req(
    config: &GraphConfig,
    app_access_token: &str,
    app_id: &str,
) -> GraphRequest {
    let edge = format!("{app_id}/subscriptions");
    GraphRequest::new(config, HttpMethod::Get, &edge, app_access_token, &[], &[])
}

/// Response of [`list_app_subscriptions_req`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSubscriptionsList {
    /// One entry per subscribed object type.
    pub data: Vec<AppSubscription>,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// A webhook subscription for one object type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSubscription {
    /// `user`, `page`, `permissions` or `payments`.
    pub object: String,
    /// Endpoint that receives the notifications.
    pub callback_url: String,
    /// Whether notifications are being delivered.
    pub active: bool,
    /// Subscribed fields of the object.
    pub fields: Vec<SubscribedField>,
}

/// A field of an object the app receives updates for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribedField {
    /// Field name, e.g. `leadgen`.
    pub name: String,
    /// API version the notifications are formatted for.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_app_subscriptions_req() {
        let request = list_app_subscriptions_req(&GraphConfig::default(), "app|token", "42");
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/v2.11/42/subscriptions");
        assert_eq!(request.query(), Some("access_token=app%7Ctoken"));
    }

    #[test]
    fn test_app_subscriptions_decode() {
        let list: AppSubscriptionsList = serde_json::from_str(
            r#"{"data":[{
                "object":"page",
                "callback_url":"https://example.com/hook",
                "active":true,
                "fields":[{"name":"leadgen","version":"v2.11"}]
            }]}"#,
        )
        .unwrap();

        let subscription = &list.data[0];
        assert_eq!(subscription.object, "page");
        assert!(subscription.active);
        assert_eq!(subscription.fields[0].name, "leadgen");
    }
}
