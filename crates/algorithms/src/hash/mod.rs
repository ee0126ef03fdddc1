//! Hash function traits and implementations
//!
//! Operations that consume a hash (MGF1 and the RSA padding schemes)
//! are generic over [`HashFunction`], so the 256-bit and 512-bit
//! variants are interchangeable without duplicated code.

use crate::error::Result;

pub mod sha2;
pub use sha2::{Sha256, Sha512};

/// Compile-time parameters of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Compression block size in bytes
    const BLOCK_SIZE: usize;
    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// A streaming hash accumulator.
///
/// A fresh value starts at the algorithm's initialization vector.
/// [`update`](Self::update) may be called any number of times;
/// [`finalize`](Self::finalize) pads, emits the digest and leaves the
/// state stale — call [`reset`](Self::reset) (or build a new value)
/// before hashing again.
pub trait HashFunction: Sized {
    /// The algorithm this function implements
    type Algorithm: HashAlgorithm;
    /// Digest type produced by finalization
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh accumulator at the initialization vector
    fn new() -> Self;

    /// Restore the initialization vector and clear all counters
    fn reset(&mut self);

    /// Absorb input, compressing once per full block
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Apply padding and produce the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// One-shot convenience: hash `data` in a fresh accumulator
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Compression block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
