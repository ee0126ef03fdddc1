//! Fixed-size symmetric key material

use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret byte array of a fixed size, zeroized on drop.
///
/// Used for symmetric cipher keys whose size is part of the algorithm
/// definition.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Wrap an existing byte array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Build key material from an arbitrary byte slice.
    ///
    /// Input shorter than `N` is zero-padded on the right; input longer
    /// than `N` is truncated. This is the legacy key-loading convention
    /// of the chained cipher interface.
    pub fn from_slice_padded(slice: &[u8]) -> Self {
        let mut data = [0u8; N];
        let take = slice.len().min(N);
        data[..take].copy_from_slice(&slice[..take]);
        Self { data }
    }

    /// Fill fresh key material from a cryptographic RNG
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Length of the key in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the key is zero-sized
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>([REDACTED])", N)
    }
}
