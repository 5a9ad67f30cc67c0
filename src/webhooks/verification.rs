//! Webhook signature verification.
//!
//! The Graph API signs webhook deliveries with HMAC-SHA256 of the raw body,
//! keyed by the app secret, and sends it in the `X-Hub-Signature-256` header
//! as `sha256=<hex>`.
//!
//! - [`verify_webhook`]: verifies with the configured app secret and parses
//!   the notification
//! - [`verify_signature`]: low-level check for custom integrations
//!
//! All comparisons are constant-time.

use crate::config::GraphConfig;
use crate::signing::{compute_signature, constant_time_compare};
use crate::webhooks::{WebhookError, WebhookNotif};

/// HTTP header carrying the body signature.
pub const HEADER_SIGNATURE: &str = "X-Hub-Signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Verifies a signature header against the raw request body.
///
/// Returns `false` if the header lacks the `sha256=` prefix.
///
/// # Example
///
/// ```rust
/// use fb_graph::signing::compute_signature;
/// use fb_graph::webhooks::verify_signature;
///
/// let body = br#"{"object":"page","entry":[]}"#;
/// let header = format!("sha256={}", compute_signature(body, "app-secret"));
///
/// assert!(verify_signature(body, &header, "app-secret"));
/// assert!(!verify_signature(body, &header, "other-secret"));
/// ```
#[must_use]
pub fn verify_signature(raw_body: &[u8], signature_header: &str, secret: &str) -> bool {
    let Some(received) = signature_header.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let computed = compute_signature(raw_body, secret);
    constant_time_compare(&computed, &received.to_ascii_lowercase())
}

/// Verifies a webhook delivery with the configured app secret and parses
/// its payload.
///
/// # Errors
///
/// - [`WebhookError::AppSecretNotConfigured`] if the config has no app secret
/// - [`WebhookError::InvalidSignature`] if the signature does not match
/// - [`WebhookError::Payload`] if the body is not a notification
pub fn verify_webhook(
    config: &GraphConfig,
    raw_body: &[u8],
    signature_header: &str,
) -> Result<WebhookNotif, WebhookError> {
    let secret = config
        .app_secret()
        .ok_or(WebhookError::AppSecretNotConfigured)?;

    if !verify_signature(raw_body, signature_header, secret.as_ref()) {
        tracing::warn!("rejected webhook delivery with invalid signature");
        return Err(WebhookError::InvalidSignature);
    }

    Ok(serde_json::from_slice(raw_body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppSecret;

    const BODY: &[u8] = br#"{"object":"page","entry":[{"id":"1","time":1,"changes":[]}]}"#;

    fn header(body: &[u8], secret: &str) -> String {
        format!("sha256={}", compute_signature(body, secret))
    }

    fn config_with_secret(secret: &str) -> GraphConfig {
        GraphConfig::builder()
            .app_secret(AppSecret::new(secret).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_verify_signature_accepts_valid_header() {
        assert!(verify_signature(BODY, &header(BODY, "secret"), "secret"));
    }

    #[test]
    fn test_verify_signature_accepts_uppercase_hex() {
        let upper = format!("sha256={}", compute_signature(BODY, "secret").to_uppercase());
        assert!(verify_signature(BODY, &upper, "secret"));
    }

    #[test]
    fn test_verify_signature_rejects_missing_prefix() {
        let bare = compute_signature(BODY, "secret");
        assert!(!verify_signature(BODY, &bare, "secret"));
        assert!(!verify_signature(BODY, "", "secret"));
    }

    #[test]
    fn test_verify_signature_rejects_tampered_body() {
        let signature = header(BODY, "secret");
        assert!(!verify_signature(b"{}", &signature, "secret"));
    }

    #[test]
    fn test_verify_webhook_parses_payload() {
        let notif = verify_webhook(&config_with_secret("secret"), BODY, &header(BODY, "secret")).unwrap();
        assert_eq!(notif.object, "page");
        assert_eq!(notif.entry[0].id, "1");
    }

    #[test]
    fn test_verify_webhook_requires_app_secret() {
        let result = verify_webhook(&GraphConfig::default(), BODY, &header(BODY, "secret"));
        assert!(matches!(result, Err(WebhookError::AppSecretNotConfigured)));
    }

    #[test]
    fn test_verify_webhook_rejects_wrong_secret() {
        let result = verify_webhook(&config_with_secret("secret"), BODY, &header(BODY, "other"));
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn test_verify_webhook_rejects_invalid_payload() {
        let body = b"not json";
        let result = verify_webhook(&config_with_secret("secret"), body, &header(body, "secret"));
        assert!(matches!(result, Err(WebhookError::Payload(_))));
    }
}
