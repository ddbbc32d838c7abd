//! Signing codec for timestamped JSON payloads.
//!
//! Computes and checks authentication tags binding a payload to a timestamp
//! with a shared secret. The signing string is
//! `"{timestamp}.{canonical_json(payload)}"`; the tag is hex-encoded and
//! carried on the wire in one of the conventions in [`crate::wire`].

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::canonical::to_canonical_string;
use super::compare::secure_compare;
use super::errors::SigningError;
use super::strategy::HashStrategy;

/// A freshly signed request.
///
/// Constructed once per outgoing request and consumed exactly once by the
/// receiving verifier; never mutated after creation. Its serde
/// representation is the inline-fields wire convention: `timestamp`,
/// `payload`, and `signature` alongside each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedMessage {
    /// Unix timestamp (seconds) captured at signing time.
    pub timestamp: i64,

    /// The payload the signature covers.
    pub payload: Value,

    /// Hex-encoded authentication tag over `"{timestamp}.{canonical(payload)}"`.
    pub signature: String,
}

impl SignedMessage {
    /// Renders the structured header value for the header wire convention.
    ///
    /// Format: `t=<timestamp>,v1=<signature>`.
    pub fn header_value(&self) -> String {
        format!("t={},v1={}", self.timestamp, self.signature)
    }

    /// Canonical JSON encoding of the payload, i.e. the request body the
    /// signature was computed over.
    pub fn canonical_payload(&self) -> String {
        to_canonical_string(&self.payload)
    }
}

/// Produces and checks authentication tags with a shared secret.
///
/// Stateless between calls: each `sign`/`verify` re-derives its own signing
/// string, so concurrent calls interleave freely.
pub struct SignatureCodec {
    secret: SecretString,
    strategy: HashStrategy,
}

impl SignatureCodec {
    /// Creates a codec with the strategy selected by [`HashStrategy::detect`].
    ///
    /// # Errors
    ///
    /// Returns `SigningError::EmptySecret` if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, SigningError> {
        Self::with_strategy(secret, HashStrategy::detect())
    }

    /// Creates a codec with an explicit strategy.
    ///
    /// Selecting the insecure fallback logs a warning; tags produced in that
    /// mode are not forgery resistant.
    pub fn with_strategy(
        secret: impl Into<String>,
        strategy: HashStrategy,
    ) -> Result<Self, SigningError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SigningError::EmptySecret);
        }

        if !strategy.is_secure() {
            tracing::warn!(
                "secure hashing primitive unavailable; signing with insecure fallback hash"
            );
        }

        Ok(Self {
            secret: SecretString::new(secret),
            strategy,
        })
    }

    /// The strategy tags are computed with.
    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// Signs a payload at the current time.
    pub fn sign(&self, payload: &Value) -> SignedMessage {
        self.sign_at(chrono::Utc::now().timestamp(), payload)
    }

    /// Signs a payload at an explicit timestamp.
    pub fn sign_at(&self, timestamp: i64, payload: &Value) -> SignedMessage {
        SignedMessage {
            timestamp,
            payload: payload.clone(),
            signature: self.compute_tag(timestamp, payload),
        }
    }

    /// Checks a signed message against its own signature.
    ///
    /// Mismatch is a normal `false` result, never an error. A malformed
    /// signature string simply fails to match.
    pub fn verify(&self, message: &SignedMessage) -> bool {
        self.verify_parts(message.timestamp, &message.payload, &message.signature)
    }

    /// Checks a signature reconstructed from its wire components.
    pub fn verify_parts(&self, timestamp: i64, payload: &Value, provided_signature: &str) -> bool {
        let expected = self.compute_tag(timestamp, payload);
        secure_compare(&expected, provided_signature)
    }

    /// Computes the hex tag over `"{timestamp}.{canonical(payload)}"`.
    fn compute_tag(&self, timestamp: i64, payload: &Value) -> String {
        let signing_string = format!("{}.{}", timestamp, to_canonical_string(payload));
        self.strategy
            .tag(self.secret.expose_secret().as_bytes(), &signing_string)
    }
}
