//! RSA keys, raw operations, padding schemes and interchange formats
//!
//! Key pairs are built from caller-supplied primes ([`RsaKeyPair::from_primes`]
//! and the validating [`RsaKeyPair::from_primes_checked`]) or generated
//! outright ([`RsaKeyPair::generate`]). The public exponent is the
//! smallest usable value rather than a fixed 65537, and the private
//! exponent is taken modulo the Carmichael function `lcm(p-1, q-1)`.
//!
//! [`Oaep`] and [`Pss`] operate on whole byte strings; OAEP splits long
//! plaintexts into as many blocks as needed, so the ciphertext length
//! is always a multiple of the modulus size.

use num_bigint::BigUint;

pub mod format;
pub mod keys;
pub mod oaep;
pub mod pss;

pub use format::{KeyBundle, KeyComponents};
pub use keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use oaep::Oaep;
pub use pss::Pss;

/// Serialize `value` big-endian into exactly `len` bytes, left-padded
/// with zeros. Callers guarantee `value` fits (it is reduced modulo an
/// `len`-byte modulus).
pub(crate) fn to_fixed_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len];
    let start = len.saturating_sub(bytes.len());
    out[start..].copy_from_slice(&bytes[bytes.len().saturating_sub(len)..]);
    out
}

pub(crate) fn xor_in_place(data: &mut [u8], mask: &[u8]) {
    for (d, m) in data.iter_mut().zip(mask) {
        *d ^= m;
    }
}
