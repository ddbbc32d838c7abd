//! Signing domain module.
//!
//! Computes and verifies authentication tags binding a JSON payload to a
//! timestamp with a shared secret.
//!
//! # Module Structure
//!
//! - `canonical` - deterministic JSON encoding for signing strings
//! - `codec` - SignatureCodec / SignedMessage sign-verify pair
//! - `compare` - constant-time signature comparison
//! - `strategy` - HMAC-SHA256 and insecure-fallback tag strategies
//! - `verifier` - inbound webhook verification with replay protection

pub mod canonical;
mod codec;
mod compare;
mod errors;
mod strategy;
mod verifier;

pub use codec::{SignatureCodec, SignedMessage};
pub use compare::secure_compare;
pub use errors::{SigningError, WebhookError};
pub use strategy::{simple_hash, HashStrategy};
pub use verifier::{ReplayWindow, WebhookVerifier};
