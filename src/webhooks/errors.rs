//! Webhook-specific error types.
//!
//! - [`WebhookError::AppSecretNotConfigured`]: `config.app_secret()` is `None`
//! - [`WebhookError::InvalidSignature`]: signature verification failed
//! - [`WebhookError::Payload`]: the verified body is not a notification

use thiserror::Error;

/// Error type for webhook verification and parsing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The app secret is not configured in `GraphConfig`.
    #[error("App secret is not configured. Please set app_secret in GraphConfig to verify webhooks.")]
    AppSecretNotConfigured,

    /// The `X-Hub-Signature-256` header does not match the body.
    ///
    /// The message is intentionally generic.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The body is not a valid notification payload.
    #[error("Invalid webhook payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_secret_not_configured_message() {
        let message = WebhookError::AppSecretNotConfigured.to_string();
        assert!(message.contains("app_secret"));
        assert!(message.contains("GraphConfig"));
    }

    #[test]
    fn test_invalid_signature_message_is_generic() {
        assert_eq!(
            WebhookError::InvalidSignature.to_string(),
            "Webhook signature verification failed"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: WebhookError = json_error.into();
        assert!(matches!(error, WebhookError::Payload(_)));
    }
}
