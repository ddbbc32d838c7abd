//! Structured signature header parsing.
//!
//! The header wire convention carries signature metadata separately from the
//! request body: `t=<timestamp>,v1=<signature>[,v0=<legacy>]`. The body is
//! the canonical JSON encoding of the payload.

use thiserror::Error;

/// Error parsing a signature header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderParseError {
    /// Header is empty or missing.
    #[error("Missing signature header")]
    MissingHeader,

    /// Missing timestamp component (t=...).
    #[error("Missing timestamp (t=) in signature header")]
    MissingTimestamp,

    /// Missing v1 signature component.
    #[error("Missing v1 signature in header")]
    MissingV1Signature,

    /// Invalid timestamp format.
    #[error("Invalid timestamp format")]
    InvalidTimestamp,

    /// Signature component is not valid hex.
    #[error("Invalid signature format (not valid hex)")]
    InvalidSignatureFormat,
}

/// Parsed signature header components.
///
/// Signatures are kept as the hex strings that arrived on the wire; tag
/// comparison happens over hex text in constant time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the sender signed the request.
    pub timestamp: i64,

    /// Primary v1 signature, hex-encoded.
    pub v1_signature: String,

    /// Legacy v0 signature (deprecated, may be absent).
    pub v0_signature: Option<String>,
}

impl SignatureHeader {
    /// Parses a signature header into components.
    ///
    /// Unknown keys are ignored for forward compatibility.
    ///
    /// # Errors
    ///
    /// Returns a `HeaderParseError` if the timestamp or v1 signature is
    /// missing or malformed.
    pub fn parse(header: &str) -> Result<Self, HeaderParseError> {
        if header.is_empty() {
            return Err(HeaderParseError::MissingHeader);
        }

        let mut timestamp: Option<i64> = None;
        let mut v1_signature: Option<String> = None;
        let mut v0_signature: Option<String> = None;

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or(HeaderParseError::MissingTimestamp)?;

            match key.trim() {
                "t" => {
                    timestamp = Some(
                        value
                            .trim()
                            .parse()
                            .map_err(|_| HeaderParseError::InvalidTimestamp)?,
                    );
                }
                "v1" => {
                    v1_signature = Some(validate_hex(value.trim())?);
                }
                "v0" => {
                    v0_signature = Some(validate_hex(value.trim())?);
                }
                _ => {
                    // Ignore unknown fields for forward compatibility
                }
            }
        }

        Ok(Self {
            timestamp: timestamp.ok_or(HeaderParseError::MissingTimestamp)?,
            v1_signature: v1_signature.ok_or(HeaderParseError::MissingV1Signature)?,
            v0_signature,
        })
    }

    /// Renders the header value for an outbound request.
    pub fn to_header_value(&self) -> String {
        match &self.v0_signature {
            Some(v0) => format!("t={},v1={},v0={}", self.timestamp, self.v1_signature, v0),
            None => format!("t={},v1={}", self.timestamp, self.v1_signature),
        }
    }
}

/// Checks that a signature component is non-empty hex and returns it verbatim.
fn validate_hex(value: &str) -> Result<String, HeaderParseError> {
    if value.is_empty() || hex::decode(value).is_err() {
        return Err(HeaderParseError::InvalidSignatureFormat);
    }
    Ok(value.to_string())
}
