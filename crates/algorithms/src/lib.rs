//! Cryptographic primitives for the veil library
//!
//! This crate implements the symmetric half of the veil cryptography
//! workspace: the SHA-256 and SHA-512 hash functions, the AES block
//! cipher in its three key sizes with a chained (CBC) mode for
//! arbitrary-length messages, and the MGF1 mask-generation function
//! used by the RSA padding schemes in `veil-pke`.
//!
//! Every engine is an owned value constructed by the caller; there is
//! no shared mutable state anywhere in the crate, so per-thread use is
//! safe by construction. All AES constant tables are computed at
//! compile time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha256, Sha512};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256, BlockCipher, Cbc, CipherAlgorithm};

// Mask generation
pub mod kdf;
pub use kdf::Mgf1;

// Type system
pub mod types;
pub use types::{Digest, SecretBytes};

// Re-export security types from veil-common
pub use veil_common::security::{EphemeralSecret, SecretBuffer, SecretVec, SecureZeroingType};
