//! Pages: listing a user's pages, app subscriptions and lead ads setup.

use serde::{Deserialize, Serialize};

use crate::clients::{GraphRequest, HttpMethod};
use crate::config::GraphConfig;
use crate::graph::{CursorPaging, GraphApiError};

/// Fields requested by [`list_user_pages_req`].
pub const LIST_USER_PAGES_FIELDS: &[&str] = &[
    "id",
    "name",
    "access_token",
    "category",
    "perms",
    "picture{url}",
];

/// Fields requested by [`page_leadgen_setup_req`].
pub const LEADGEN_SETUP_FIELDS: &[&str] = &[
    "id",
    "name",
    "leadgen_has_crm_integration",
    "leadgen_forms{id,name,status}",
];

/// Lists the pages of the user owning `access_token`, with
/// [`LIST_USER_PAGES_FIELDS`].
#[must_use]
pub fn list_user_pages_req(config: &GraphConfig, access_token: &str) -> GraphRequest {
    list_user_pages_fields_req(config, access_token, LIST_USER_PAGES_FIELDS)
}

/// Lists the pages of the user owning `access_token`, with the given fields.
#[must_use]
pub fn list_user_pages_fields_req(
    config: &GraphConfig,
    access_token: &str,
    fields: &[&str],
) -> GraphRequest {
    GraphRequest::new(config, HttpMethod::Get, "me/accounts", access_token, fields, &[])
}

/// Subscribes the app to a page's events. Needs a page access token.
#[must_use]
pub fn subscribe_app_to_page_req(
    config: &GraphConfig,
    page_access_token: &str,
    page_id: &str,
) -> GraphRequest {
    let edge = format!("{page_id}/subscribed_apps");
    GraphRequest::new(config, HttpMethod::Post, &edge, page_access_token, &[], &[])
}

/// Lists the apps subscribed to a page's events.
#[must_use]
pub fn list_page_subscribed_apps_req(
    config: &GraphConfig,
    page_access_token: &str,
    page_id: &str,
) -> GraphRequest {
    let edge = format!("{page_id}/subscribed_apps");
    GraphRequest::new(config, HttpMethod::Get, &edge, page_access_token, &[], &[])
}

/// Reads a page's lead ads setup, with [`LEADGEN_SETUP_FIELDS`].
#[must_use]
pub fn page_leadgen_setup_req(
    config: &GraphConfig,
    page_access_token: &str,
    page_id: &str,
) -> GraphRequest {
    GraphRequest::new(
        config,
        HttpMethod::Get,
        page_id,
        page_access_token,
        LEADGEN_SETUP_FIELDS,
        &[],
    )
}

/// Reads a single lead submitted through a lead ads form.
#[must_use]
pub fn lead_req(config: &GraphConfig, page_access_token: &str, lead_id: &str) -> GraphRequest {
    GraphRequest::new(config, HttpMethod::Get, lead_id, page_access_token, &[], &[])
}

/// Pages belonging to a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPagesList {
    /// Pages on this page of results.
    pub data: Vec<UserPage>,
    /// Links to the neighbouring pages.
    pub paging: CursorPaging,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// A page managed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPage {
    /// Page ID.
    pub id: String,
    /// Page name.
    pub name: String,
    /// Page access token.
    pub access_token: String,
    /// Main category.
    pub category: String,
    /// All categories.
    pub category_list: Vec<PageCategory>,
    /// Profile picture.
    pub picture: PagePicture,
    /// Tasks the user can perform on the page.
    pub perms: Vec<String>,
}

/// One of the categories a page is listed under.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCategory {
    /// Category ID.
    pub id: String,
    /// Category name.
    pub name: String,
}

/// A page's profile picture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagePicture {
    /// Picture details.
    pub data: PictureData,
}

/// Profile picture details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PictureData {
    /// Picture URL.
    pub url: String,
}

/// Response of [`subscribe_app_to_page_req`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeAppResponse {
    /// Whether the app is now subscribed.
    pub success: bool,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// Apps subscribed to a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribedAppsList {
    /// Subscribed apps on this page of results.
    pub data: Vec<SubscribedApp>,
    /// Links to the neighbouring pages.
    pub paging: CursorPaging,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// An app subscribed to a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribedApp {
    /// App category.
    pub category: String,
    /// App URL.
    pub link: String,
    /// App name.
    pub name: String,
    /// App ID.
    pub id: String,
}

/// A page's lead ads setup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLeadgenSetup {
    /// The page ID.
    pub id: String,
    /// Page name.
    pub name: String,
    /// Whether a CRM is connected to the page's lead ads.
    pub leadgen_has_crm_integration: bool,
    /// First page of the page's forms; continue with [`PageLeadgenFormList`].
    pub leadgen_forms: PageLeadgenFormList,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// A lead ads form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLeadgenForm {
    /// Form ID.
    pub id: String,
    /// Form name.
    pub name: String,
    /// `ACTIVE`, `ARCHIVED`, `DELETED` or `DRAFT`.
    pub status: String,
}

/// A page of lead ads forms, as returned when following the `next` link of
/// [`PageLeadgenSetup::leadgen_forms`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLeadgenFormList {
    /// Forms on this page of results.
    pub data: Vec<PageLeadgenForm>,
    /// Links to the neighbouring pages.
    pub paging: CursorPaging,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// A lead submitted through a lead ads form.
///
/// `field_data` is always encoded as an array, `[]` when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLead {
    /// Submission time as sent by the API, e.g. `2018-04-04T17:16:02+0000`.
    pub created_time: String,
    /// Lead ID.
    pub id: String,
    /// Answers, one per form question.
    pub field_data: Vec<LeadFieldData>,
    /// API error, when the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GraphApiError>,
}

/// One answer in a lead form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadFieldData {
    /// Question key.
    pub name: String,
    /// Submitted answers.
    pub values: Vec<String>,
}
