//! Signing configuration module
//!
//! Loads the shared webhook secret and verification settings from the
//! environment. The secret is an opaque value supplied by the embedding
//! application; it is wrapped in `secrecy::SecretString` so it never appears
//! in debug output.
//!
//! # Example
//!
//! ```no_run
//! use checkout_signing::config::SigningConfig;
//!
//! let config = SigningConfig::from_env().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let verifier = config.verifier().expect("usable secret");
//! ```

mod error;

pub use error::ValidationError;

use secrecy::{ExposeSecret, SecretString};

use crate::signing::{ReplayWindow, SignatureCodec, SigningError, WebhookVerifier};

/// Signing configuration for one shared-secret relationship.
#[derive(Clone)]
pub struct SigningConfig {
    /// Shared webhook signing secret.
    webhook_secret: SecretString,

    /// Replay window applied by verifiers built from this config.
    /// `None` disables timestamp validation.
    replay_window: Option<ReplayWindow>,
}

impl SigningConfig {
    /// Creates a configuration with an explicit secret and default replay window.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            webhook_secret: SecretString::new(secret.into()),
            replay_window: Some(ReplayWindow::default()),
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads:
    /// - `WEBHOOK_SIGNING_SECRET`
    /// - `WEBHOOK_REPLAY_WINDOW_SECS` (optional; `0` disables the window)
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let secret = std::env::var("WEBHOOK_SIGNING_SECRET")?;

        let replay_window = match std::env::var("WEBHOOK_REPLAY_WINDOW_SECS") {
            Ok(raw) => match raw.trim().parse::<i64>() {
                Ok(0) => None,
                Ok(secs) if secs > 0 => Some(ReplayWindow {
                    max_age_secs: secs,
                    ..ReplayWindow::default()
                }),
                _ => Some(ReplayWindow::default()),
            },
            Err(_) => Some(ReplayWindow::default()),
        };

        Ok(Self {
            webhook_secret: SecretString::new(secret),
            replay_window,
        })
    }

    /// Overrides the replay window.
    pub fn with_replay_window(mut self, window: Option<ReplayWindow>) -> Self {
        self.replay_window = window;
        self
    }

    /// Validate signing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.webhook_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK_SIGNING_SECRET"));
        }
        Ok(())
    }

    /// Builds a signing codec keyed by the configured secret.
    pub fn codec(&self) -> Result<SignatureCodec, SigningError> {
        SignatureCodec::new(self.webhook_secret.expose_secret().clone())
    }

    /// Builds a webhook verifier with the configured replay window.
    pub fn verifier(&self) -> Result<WebhookVerifier, SigningError> {
        let verifier = WebhookVerifier::new(self.webhook_secret.expose_secret().clone())?;
        Ok(match self.replay_window {
            Some(window) => verifier.with_replay_window(window),
            None => verifier.without_replay_window(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_rejects_empty_secret() {
        let config = SigningConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_accepts_non_empty_secret() {
        let config = SigningConfig::new("whsec_abc123");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn codec_fails_on_empty_secret() {
        let config = SigningConfig::new("");
        assert!(config.codec().is_err());
    }

    #[test]
    fn codec_and_verifier_share_the_secret() {
        let config = SigningConfig::new("whsec_abc123");
        let codec = config.codec().unwrap();
        let verifier = config.verifier().unwrap();

        let payload = json!({"type": "ping"});
        let message = codec.sign(&payload);

        assert!(verifier
            .verify_request(&message.header_value(), &payload)
            .is_ok());
    }

    #[test]
    fn disabled_replay_window_accepts_stale_messages() {
        let config = SigningConfig::new("whsec_abc123").with_replay_window(None);
        let codec = config.codec().unwrap();
        let verifier = config.verifier().unwrap();

        let payload = json!({"type": "ping"});
        let message = codec.sign_at(1500000000, &payload);

        assert!(verifier
            .verify_request(&message.header_value(), &payload)
            .is_ok());
    }
}
