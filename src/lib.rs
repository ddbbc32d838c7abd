//! Checkout Signing - Request Authentication for the Checkout Service
//!
//! This crate implements the signing core shared by the checkout client and
//! the webhook endpoints: a keyed message-authentication codec over
//! timestamped JSON payloads, the wire conventions that carry the signature,
//! and replay protection for inbound webhooks.

pub mod config;
pub mod signing;
pub mod wire;
