//! Webhook verification with replay protection.
//!
//! Wraps the codec for the receiving side: parses signature metadata off the
//! wire, bounds the timestamp to a replay window, and checks the tag with
//! constant-time comparison.

use serde_json::Value;

use super::codec::{SignatureCodec, SignedMessage};
use super::errors::{SigningError, WebhookError};
use super::strategy::HashStrategy;
use crate::wire::SignatureHeader;

/// Maximum allowed age for inbound requests (5 minutes).
const DEFAULT_MAX_AGE_SECS: i64 = 300;

/// Maximum allowed clock skew for future timestamps (1 minute).
const DEFAULT_CLOCK_SKEW_SECS: i64 = 60;

/// Bounds on how far a request timestamp may drift from the local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayWindow {
    /// Requests older than this are rejected.
    pub max_age_secs: i64,

    /// Requests this far in the future are tolerated as clock skew.
    pub clock_skew_secs: i64,
}

impl Default for ReplayWindow {
    fn default() -> Self {
        Self {
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
        }
    }
}

/// Verifier for inbound signed requests.
pub struct WebhookVerifier {
    codec: SignatureCodec,
    replay_window: Option<ReplayWindow>,
}

impl WebhookVerifier {
    /// Creates a verifier with the default replay window.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::EmptySecret` if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, SigningError> {
        Ok(Self {
            codec: SignatureCodec::new(secret)?,
            replay_window: Some(ReplayWindow::default()),
        })
    }

    /// Creates a verifier with an explicit hash strategy.
    pub fn with_strategy(
        secret: impl Into<String>,
        strategy: HashStrategy,
    ) -> Result<Self, SigningError> {
        Ok(Self {
            codec: SignatureCodec::with_strategy(secret, strategy)?,
            replay_window: Some(ReplayWindow::default()),
        })
    }

    /// Overrides the replay window bounds.
    pub fn with_replay_window(mut self, window: ReplayWindow) -> Self {
        self.replay_window = Some(window);
        self
    }

    /// Disables timestamp validation entirely.
    ///
    /// Intended for offline reprocessing of stored requests; live endpoints
    /// should keep the window.
    pub fn without_replay_window(mut self) -> Self {
        self.replay_window = None;
        self
    }

    /// Verifies a request carried in the header wire convention.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the `t=<timestamp>,v1=<signature>` header
    /// 2. Validate the timestamp against the replay window
    /// 3. Recompute the tag and compare in constant time
    ///
    /// # Errors
    ///
    /// - `ParseError` - header format invalid
    /// - `TimestampOutOfRange` - request older than the window allows
    /// - `InvalidTimestamp` - timestamp in the future beyond skew tolerance
    /// - `InvalidSignature` - tag mismatch
    pub fn verify_request(&self, header: &str, payload: &Value) -> Result<(), WebhookError> {
        let header = SignatureHeader::parse(header)?;

        self.validate_timestamp(header.timestamp)?;

        if !self
            .codec
            .verify_parts(header.timestamp, payload, &header.v1_signature)
        {
            return Err(WebhookError::InvalidSignature);
        }

        Ok(())
    }

    /// Verifies a request carried in the inline-fields wire convention.
    pub fn verify_message(&self, message: &SignedMessage) -> Result<(), WebhookError> {
        self.validate_timestamp(message.timestamp)?;

        if !self.codec.verify(message) {
            return Err(WebhookError::InvalidSignature);
        }

        Ok(())
    }

    fn validate_timestamp(&self, timestamp: i64) -> Result<(), WebhookError> {
        let Some(window) = self.replay_window else {
            return Ok(());
        };

        let age = chrono::Utc::now().timestamp() - timestamp;

        if age > window.max_age_secs {
            return Err(WebhookError::TimestampOutOfRange);
        }
        if age < -window.clock_skew_secs {
            return Err(WebhookError::InvalidTimestamp);
        }

        Ok(())
    }
}
