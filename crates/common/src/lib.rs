//! Shared security types for the veil cryptography workspace
//!
//! The primitives in the other workspace crates keep key material and
//! transient working state inside the wrapper types defined here, so
//! that zeroization on drop is guaranteed in one place.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer, SecretVec, SecureZeroingType};
