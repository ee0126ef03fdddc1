//! RSA public-key engine for the veil library
//!
//! Provides typed RSA key pairs (construction from supplied primes or
//! random generation), the raw integer operations, OAEP-padded
//! encryption, PSS-padded signatures, and the plain-text key
//! interchange formats. The padding schemes are generic over the hash
//! functions in `veil-algorithms`.
//!
//! Failure style follows the rest of the workspace: adversarial-input
//! failures (bad padding, wrong label, tampered signature) come back as
//! `None`/`false`, while API misuse (malformed key material, invalid
//! primes) is a hard [`Error`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod rsa;

pub use error::{Error, Result};
pub use rsa::{KeyBundle, KeyComponents, Oaep, Pss, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
