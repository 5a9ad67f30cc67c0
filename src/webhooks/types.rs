//! Webhook notification payloads.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The change field carrying lead ads notifications.
pub const LEADGEN_FIELD: &str = "leadgen";

/// Any webhook notification payload.
///
/// # Example
///
/// ```rust
/// use fb_graph::webhooks::WebhookNotif;
///
/// let notif: WebhookNotif = serde_json::from_str(r#"{
///     "object": "page",
///     "entry": [{
///         "id": "32097042",
///         "time": 1522862162,
///         "changes": [{
///             "field": "leadgen",
///             "value": {"leadgen_id": "432532509", "page_id": "32097042", "created_time": 1522862162}
///         }]
///     }]
/// }"#).unwrap();
///
/// let leads = notif.leadgen_entries();
/// assert_eq!(leads.len(), 1);
/// assert_eq!(leads[0].leadgen_id, "432532509");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookNotif {
    /// `user`, `page`, `permissions` or `payments`.
    pub object: String,
    /// Batched changes, one entry per object.
    pub entry: Vec<WebhookEntry>,
}

/// Changes to one object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEntry {
    /// ID of the changed object.
    pub id: String,
    /// For pages, e.g. `leadgen`, `location` or `messages`.
    pub changed_fields: Vec<String>,
    /// The individual changes.
    pub changes: Vec<WebhookChange>,
    /// Unix timestamp.
    pub time: i64,
}

/// A single change. `value` is not set for some endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookChange {
    /// Name of the changed field.
    pub field: String,
    /// Field-specific payload.
    pub value: Value,
}

impl WebhookNotif {
    /// Collects the lead ads notifications of every entry.
    ///
    /// Changes whose value does not decode as a [`LeadGenEntry`] are skipped
    /// with a warning.
    #[must_use]
    pub fn leadgen_entries(&self) -> Vec<LeadGenEntry> {
        self.entry
            .iter()
            .flat_map(|entry| &entry.changes)
            .filter(|change| change.field == LEADGEN_FIELD)
            .filter_map(|change| match LeadGenEntry::deserialize(&change.value) {
                Ok(lead) => Some(lead),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed leadgen change");
                    None
                }
            })
            .collect()
    }
}

/// A page webhook notification value for the `leadgen` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadGenEntry {
    /// Ad the lead came from.
    pub ad_id: String,
    /// Form that was submitted.
    pub form_id: String,
    /// Lead ID; fetch it with the lead endpoint.
    pub leadgen_id: String,
    /// Page owning the form.
    pub page_id: String,
    /// Ad group the lead came from.
    pub adgroup_id: String,
    /// Unix timestamp.
    pub created_time: i64,
}

impl LeadGenEntry {
    /// Returns `created_time` as a UTC date, or `None` if it is out of range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created_time, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_leadgen_entry_encodes_all_fields_in_order() {
        assert_eq!(
            serde_json::to_string(&LeadGenEntry::default()).unwrap(),
            r#"{"ad_id":"","form_id":"","leadgen_id":"","page_id":"","adgroup_id":"","created_time":0}"#
        );
    }

    #[test]
    fn test_leadgen_entry_encodes_values() {
        let lead = LeadGenEntry {
            ad_id: "123".to_string(),
            form_id: "23425".to_string(),
            leadgen_id: "432532509".to_string(),
            page_id: "32097042".to_string(),
            adgroup_id: "9253195".to_string(),
            created_time: 1_522_862_162,
        };
        assert_eq!(
            serde_json::to_string(&lead).unwrap(),
            r#"{"ad_id":"123","form_id":"23425","leadgen_id":"432532509","page_id":"32097042","adgroup_id":"9253195","created_time":1522862162}"#
        );
    }

    #[test]
    fn test_created_at() {
        let lead = LeadGenEntry {
            created_time: 1_522_862_162,
            ..Default::default()
        };
        assert_eq!(
            lead.created_at().unwrap().to_rfc3339(),
            "2018-04-04T17:16:02+00:00"
        );
    }

    #[test]
    fn test_leadgen_entries_skips_other_fields() {
        let notif: WebhookNotif = serde_json::from_str(
            r#"{
                "object": "page",
                "entry": [
                    {
                        "id": "1",
                        "time": 10,
                        "changed_fields": ["leadgen", "feed"],
                        "changes": [
                            {"field": "feed", "value": {"item": "status"}},
                            {"field": "leadgen", "value": {"leadgen_id": "a", "form_id": "f"}}
                        ]
                    },
                    {
                        "id": "2",
                        "time": 11,
                        "changes": [
                            {"field": "leadgen", "value": {"leadgen_id": "b"}},
                            {"field": "leadgen", "value": "not an object"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let leads = notif.leadgen_entries();
        let ids: Vec<&str> = leads.iter().map(|lead| lead.leadgen_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(leads[0].form_id, "f");
        assert_eq!(notif.entry[0].changed_fields, vec!["leadgen", "feed"]);
    }

    #[test]
    fn test_change_without_value() {
        let notif: WebhookNotif =
            serde_json::from_str(r#"{"object":"user","entry":[{"changes":[{"field":"email"}]}]}"#)
                .unwrap();
        assert_eq!(notif.entry[0].changes[0].value, Value::Null);
        assert!(notif.leadgen_entries().is_empty());
    }
}
