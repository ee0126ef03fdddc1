//! Secure memory handling for sensitive data

mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecretVec, SecureZeroingType};
