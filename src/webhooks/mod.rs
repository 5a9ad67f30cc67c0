//! Webhook notifications from the Graph API.
//!
//! # Overview
//!
//! - [`WebhookNotif`]: any notification payload, with
//!   [`WebhookNotif::leadgen_entries`] for lead ads changes
//! - [`LeadGenEntry`]: the value of a `leadgen` change
//! - [`verify_webhook`] / [`verify_signature`]: `X-Hub-Signature-256` checks
//! - [`WebhookError`]: verification and parsing failures
//!
//! # Example
//!
//! ```rust
//! use fb_graph::signing::compute_signature;
//! use fb_graph::webhooks::{verify_webhook, HEADER_SIGNATURE};
//! use fb_graph::{AppSecret, GraphConfig};
//!
//! let config = GraphConfig::builder()
//!     .app_secret(AppSecret::new("app-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Raw body and the value of the X-Hub-Signature-256 header
//! let body = br#"{"object":"page","entry":[]}"#;
//! let signature = format!("sha256={}", compute_signature(body, "app-secret"));
//! assert_eq!(HEADER_SIGNATURE, "X-Hub-Signature-256");
//!
//! let notif = verify_webhook(&config, body, &signature).unwrap();
//! assert_eq!(notif.object, "page");
//! ```

mod errors;
mod types;
mod verification;

pub use errors::WebhookError;
pub use types::{LeadGenEntry, WebhookChange, WebhookEntry, WebhookNotif, LEADGEN_FIELD};
pub use verification::{verify_signature, verify_webhook, HEADER_SIGNATURE};
