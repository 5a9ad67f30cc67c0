//! Business Manager system users.

use serde::{Deserialize, Serialize};

use crate::clients::{GraphRequest, HttpMethod, Param};
use crate::config::GraphConfig;
use crate::graph::{CursorPaging, GraphApiError};

/// Lists the system users and admin system users of a business.
///
/// `admin_token` must belong to an admin of the business or to an admin
/// system user. The returned IDs are app-scoped.
#[must_use]
pub fn list_system_users_req(
    config: &GraphConfig,
    admin_token: &str,
    business_id: &str,
) -> GraphRequest {
    let edge = format!("{business_id}/system_users");
    GraphRequest::new(config, HttpMethod::Get, &edge, admin_token, &[], &[])
}

/// Installs an app for a system user.
///
/// `app_user_id` must be an app-scoped system user ID, as returned by
/// [`list_system_users_req`].
#[must_use]
pub fn install_system_user_app_req(
    config: &GraphConfig,
    admin_token: &str,
    app_id: &str,
    app_user_id: &str,
) -> GraphRequest {
    let edge = format!("{app_user_id}/applications");
    GraphRequest::new(
        config,
        HttpMethod::Post,
        &edge,
        admin_token,
        &[],
        &[Param::str("business_app", app_id)],
    )
}

/// Response of [`list_system_users_req`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemUserList {
    /// System users on this page of results.
    pub data: Vec<SystemUser>,
    /// Links to the neighbouring pages.
    pub paging: CursorPaging,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// A business system user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemUser {
    /// System user ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ad accounts the user can access.
    pub assigned_ad_accounts: AssignedList<AssignedAdAccount>,
    /// Pages the user can access.
    pub assigned_pages: AssignedList<AssignedPage>,
}

/// A `{"data": [...]}` wrapper around assigned assets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct AssignedList<T> {
    /// Assigned assets.
    pub data: Vec<T>,
}

impl<T> Default for AssignedList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

/// An ad account assigned to a system user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignedAdAccount {
    /// Ad account node ID, `act_<account_id>`.
    pub id: String,
    /// Numeric ad account ID.
    pub account_id: String,
    /// Role granted on the account.
    pub role: String,
}

/// A page assigned to a system user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignedPage {
    /// Page ID.
    pub id: String,
    /// Role granted on the page.
    pub role: String,
}

/// Response of [`install_system_user_app_req`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallSystemUserResponse {
    /// Whether the app was installed.
    pub data: bool,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_system_users_req() {
        let request = list_system_users_req(&GraphConfig::default(), "admin", "555");
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/v2.11/555/system_users");
    }

    #[test]
    fn test_install_app_posts_business_app() {
        let request = install_system_user_app_req(&GraphConfig::default(), "admin", "42", "1000");
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/v2.11/1000/applications");
        assert_eq!(
            request.body(),
            Some(&b"access_token=admin&business_app=42"[..])
        );
    }

    #[test]
    fn test_system_user_list_decodes_assigned_assets() {
        let list: SystemUserList = serde_json::from_str(
            r#"{
                "data": [{
                    "id": "1000081799813",
                    "name": "Reporting server",
                    "assigned_ad_accounts": {
                        "data": [{"id": "act_1", "account_id": "1", "role": "ADMIN"}]
                    },
                    "assigned_pages": {
                        "data": [{"id": "1750248626186", "role": "INSIGHTS_ANALYST"}]
                    }
                }]
            }"#,
        )
        .unwrap();

        let user = &list.data[0];
        assert_eq!(user.name, "Reporting server");
        assert_eq!(user.assigned_ad_accounts.data[0].role, "ADMIN");
        assert_eq!(user.assigned_pages.data[0].role, "INSIGHTS_ANALYST");
    }

    #[test]
    fn test_install_response_decodes() {
        let response: InstallSystemUserResponse =
            serde_json::from_str(r#"{"data":true}"#).unwrap();
        assert!(response.data);
    }
}
