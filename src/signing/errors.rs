//! Error types for signing and webhook verification.

use thiserror::Error;

use crate::wire::HeaderParseError;

/// Errors constructing a signing codec.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The shared secret is empty and cannot key a tag.
    #[error("Signing secret must not be empty")]
    EmptySecret,
}

/// Errors surfaced by webhook verification at the wire boundary.
///
/// The codec itself folds every mismatch into a boolean; these variants
/// distinguish the reasons for rejection so an endpoint can log and respond
/// appropriately. A signature mismatch is still a normal outcome, not a
/// programming error.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature did not match the recomputed tag.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Request timestamp is older than the replay window allows.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Request timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Failed to parse the signature metadata.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<HeaderParseError> for WebhookError {
    fn from(err: HeaderParseError) -> Self {
        WebhookError::ParseError(err.to_string())
    }
}

impl WebhookError {
    /// Returns true if the sender should retry delivering this request.
    ///
    /// None of the verification failures are retryable: a bad signature or
    /// an expired timestamp will not become valid on a second delivery.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_displays_correctly() {
        assert_eq!(format!("{}", WebhookError::InvalidSignature), "Invalid signature");
    }

    #[test]
    fn timestamp_out_of_range_displays_correctly() {
        assert_eq!(
            format!("{}", WebhookError::TimestampOutOfRange),
            "Timestamp out of range"
        );
    }

    #[test]
    fn parse_error_displays_message() {
        let err = WebhookError::ParseError("missing timestamp".to_string());
        assert_eq!(format!("{}", err), "Parse error: missing timestamp");
    }

    #[test]
    fn empty_secret_displays_correctly() {
        assert_eq!(
            format!("{}", SigningError::EmptySecret),
            "Signing secret must not be empty"
        );
    }

    #[test]
    fn verification_failures_are_not_retryable() {
        assert!(!WebhookError::InvalidSignature.is_retryable());
        assert!(!WebhookError::TimestampOutOfRange.is_retryable());
        assert!(!WebhookError::InvalidTimestamp.is_retryable());
        assert!(!WebhookError::ParseError("bad".to_string()).is_retryable());
    }

    #[test]
    fn header_parse_error_converts_to_parse_error() {
        let err: WebhookError = HeaderParseError::MissingTimestamp.into();
        assert!(matches!(err, WebhookError::ParseError(_)));
    }
}
