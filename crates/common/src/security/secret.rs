//! Secret data types with guaranteed zeroization
//!
//! Type-safe wrappers for sensitive data that ensure the underlying
//! memory is wiped when the value is dropped.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Trait for types that can be created in a zeroed state and cloned
/// without weakening their zeroization guarantees.
pub trait SecureZeroingType: Zeroize + Clone {
    /// Create a zeroed instance
    fn zeroed() -> Self;
}

/// Fixed-size secret buffer, zeroized on drop.
///
/// Used for derived key material whose size is known at compile time,
/// such as block-cipher round-key schedules.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Wrap an existing byte array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Length of the buffer in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the buffer holds zero bytes
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> SecureZeroingType for SecretBuffer<N> {
    fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Variable-size secret byte vector, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Wrap an existing byte vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new secret vector
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Length of the vector in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec([REDACTED; {}])", self.data.len())
    }
}

/// Short-lived secret value, zeroized when it leaves scope.
///
/// Wraps transient working state inside a single operation, for
/// example a hash message schedule or an unmasked padding block.
pub struct EphemeralSecret<T: Zeroize> {
    value: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Wrap a value for the duration of the current operation
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_buffer_redacts_debug() {
        let buf = SecretBuffer::new([0xAAu8; 16]);
        assert_eq!(format!("{:?}", buf), "SecretBuffer<16>([REDACTED])");
        assert_eq!(buf.as_ref().len(), 16);
    }

    #[test]
    fn secret_vec_roundtrip() {
        let v = SecretVec::from_slice(b"key material");
        assert_eq!(v.as_ref(), b"key material");
        assert_eq!(v.len(), 12);
    }

    #[test]
    fn ephemeral_secret_derefs() {
        let mut w = EphemeralSecret::new([0u32; 4]);
        w[0] = 7;
        assert_eq!(w[0], 7);
    }
}
