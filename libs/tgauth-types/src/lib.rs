//! Claim set types and check-string verification for Telegram Login Widget
//! callbacks.
//!
//! This crate provides:
//! - `ClaimSet`, the fields the widget sends back
//! - `SharedSecret`, the bot token wrapper
//! - `verify` and the check-string/MAC primitives it is built from
//!
//! Everything here is pure: no I/O, no clock reads, no global state.

mod claims;
mod crypto;
mod errors;
mod secret;

pub use claims::{AUTH_DATE_FIELD, ClaimSet, HASH_FIELD};
pub use crypto::{FRESHNESS_WINDOW, compute_hash, data_check_string, derive_signing_key, verify};
pub use errors::{ErrorCode, SecretError, VerificationError};
pub use secret::SharedSecret;
