//! Wire conventions for signature transport.
//!
//! Two conventions carry signature metadata between signer and verifier:
//!
//! - **Header form**: a structured value `t=<timestamp>,v1=<signature>`
//!   travels alongside a body containing the canonical payload JSON. Used by
//!   the general webhook call sites. Parsed by [`SignatureHeader`].
//! - **Inline-fields form**: `timestamp`, `payload`, and `signature` travel
//!   together in one JSON document. Used by the payment-intent call sites.
//!   This is the serde representation of
//!   [`crate::signing::SignedMessage`].

mod header;

pub use header::{HeaderParseError, SignatureHeader};
