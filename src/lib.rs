//! # veil
//!
//! A modular cryptographic library built from independent sub-crates.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! veil = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `veil-algorithms`: core primitives (SHA-2, AES, CBC, MGF1)
//! - `veil-pke`: the RSA engine (OAEP encryption, PSS signatures,
//!   key interchange formats)
//! - `veil-common`: zeroizing secret containers
//! - `veil-params`: algorithm constants

#![forbid(unsafe_code)]

pub use veil_algorithms as algorithms;
pub use veil_common as common;
pub use veil_params as params;
pub use veil_pke as pke;

/// Common imports for veil users
pub mod prelude {
    // Core traits
    pub use crate::algorithms::block::{BlockCipher, CipherAlgorithm};
    pub use crate::algorithms::hash::{HashAlgorithm, HashFunction};

    // Primitives
    pub use crate::algorithms::block::{Aes128, Aes192, Aes256, Cbc};
    pub use crate::algorithms::hash::{Sha256, Sha512};
    pub use crate::algorithms::kdf::Mgf1;
    pub use crate::algorithms::types::{Digest, SecretBytes};

    // Security types
    pub use crate::common::security::{
        EphemeralSecret, SecretBuffer, SecretVec, SecureZeroingType,
    };

    // RSA engine
    pub use crate::pke::{
        KeyBundle, KeyComponents, Oaep, Pss, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
    };
}
