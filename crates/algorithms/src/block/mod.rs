//! Block cipher traits, implementations and chaining modes

use crate::error::Result;
use rand::{CryptoRng, RngCore};

pub mod aes;
pub mod modes;

pub use aes::{Aes128, Aes192, Aes256};
pub use modes::Cbc;

/// Compile-time parameters of a block cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A block cipher over fixed-size blocks.
///
/// The key schedule is derived at construction; the same instance may
/// encrypt and decrypt any number of blocks.
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;
    /// Key material type
    type Key;

    /// Expand the key schedule and build a cipher instance
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generate fresh random key material
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }
}
