//! Tag computation strategies.
//!
//! The hashing primitive is chosen once when a codec is constructed, not
//! rediscovered inside every call. The secure strategy is HMAC-SHA256; the
//! fallback is a non-cryptographic rolling hash kept only for wire
//! compatibility with peers that could not load the secure primitive.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// How authentication tags are computed over the signing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategy {
    /// HMAC-SHA256 keyed by the shared secret. Tag is 64 lowercase hex chars.
    HmacSha256,

    /// Insecure deterministic fallback. Not collision resistant, not forgery
    /// resistant, and does not mix in the secret. Only valid against a peer
    /// running the same degraded mode.
    SimpleHash,
}

impl HashStrategy {
    /// Probes platform capability and selects a strategy.
    ///
    /// HMAC-SHA256 is always linkable in this build, so the probe always
    /// selects the secure strategy. `SimpleHash` remains constructible
    /// explicitly for degraded-peer interop and tests.
    pub fn detect() -> Self {
        HashStrategy::HmacSha256
    }

    /// Whether this strategy provides cryptographic authentication.
    pub fn is_secure(&self) -> bool {
        matches!(self, HashStrategy::HmacSha256)
    }

    /// Computes the hex-encoded tag for a signing string.
    pub fn tag(&self, secret: &[u8], signing_string: &str) -> String {
        match self {
            HashStrategy::HmacSha256 => {
                let mut mac = HmacSha256::new_from_slice(secret)
                    .expect("HMAC accepts keys of any length");
                mac.update(signing_string.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
            HashStrategy::SimpleHash => simple_hash(signing_string),
        }
    }
}

/// Non-cryptographic rolling hash over the UTF-16 code units of the input.
///
/// Accumulator update per code unit is `acc = ((acc << 5) - acc) + unit`
/// with wrapping 32-bit signed arithmetic. The output is the absolute value
/// of the final accumulator as lowercase hex, zero-padded to 32 characters.
pub fn simple_hash(input: &str) -> String {
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit));
    }
    format!("{:032x}", acc.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_selects_secure_strategy() {
        assert_eq!(HashStrategy::detect(), HashStrategy::HmacSha256);
        assert!(HashStrategy::detect().is_secure());
    }

    #[test]
    fn simple_hash_is_not_secure() {
        assert!(!HashStrategy::SimpleHash.is_secure());
    }

    #[test]
    fn hmac_tag_matches_reference_vector() {
        // Reference: HMAC-SHA256("whsec_test", "1700000000.{\"type\":\"ping\"}")
        let tag = HashStrategy::HmacSha256.tag(
            b"whsec_test",
            "1700000000.{\"type\":\"ping\"}",
        );
        assert_eq!(
            tag,
            "bc08c591847b765241711bcbe7067e3869a219e424d3fdd9d00b3b6f915baf97"
        );
    }

    #[test]
    fn hmac_tag_is_64_lowercase_hex_chars() {
        let tag = HashStrategy::HmacSha256.tag(b"secret", "payload");
        assert_eq!(tag.len(), 64);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn simple_hash_of_empty_string() {
        assert_eq!(simple_hash(""), "0".repeat(32));
    }

    #[test]
    fn simple_hash_of_test() {
        assert_eq!(simple_hash("test"), "00000000000000000000000000364492");
    }

    #[test]
    fn simple_hash_is_32_lowercase_hex_chars() {
        for input in ["", "test", "1700000000.{\"type\":\"ping\"}", "日本語"] {
            let hash = simple_hash(input);
            assert_eq!(hash.len(), 32);
            assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        }
    }

    #[test]
    fn simple_hash_ignores_the_secret() {
        let a = HashStrategy::SimpleHash.tag(b"secret_a", "message");
        let b = HashStrategy::SimpleHash.tag(b"secret_b", "message");
        assert_eq!(a, b);
    }

    #[test]
    fn simple_hash_is_deterministic() {
        assert_eq!(simple_hash("checkout"), simple_hash("checkout"));
    }

    #[test]
    fn simple_hash_differs_on_different_input() {
        assert_ne!(simple_hash("checkout"), simple_hash("checkouts"));
    }
}
