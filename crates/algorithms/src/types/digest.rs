//! Type-safe digest output with a compile-time size

use core::fmt;
use core::ops::Deref;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A cryptographic digest with a fixed size
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Length of the digest in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the digest is zero-sized
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Render the digest as a lowercase hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Compare against another byte string in constant time
    pub fn ct_eq_slice(&self, other: &[u8]) -> bool {
        other.len() == N && bool::from(self.data.as_slice().ct_eq(other))
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.data.ct_eq(&other.data))
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({})", N, self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rendering_is_lowercase() {
        let d = Digest::new([0xAB, 0x00, 0xFF, 0x10]);
        assert_eq!(d.to_hex(), "ab00ff10");
    }

    #[test]
    fn constant_time_slice_compare() {
        let d = Digest::new([1, 2, 3, 4]);
        assert!(d.ct_eq_slice(&[1, 2, 3, 4]));
        assert!(!d.ct_eq_slice(&[1, 2, 3, 5]));
        assert!(!d.ct_eq_slice(&[1, 2, 3]));
    }
}
