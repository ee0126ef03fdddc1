//! PSS signature padding
//!
//! Randomized signatures over a message hash. The encoded block is
//! `0x00 || maskedDB || H` where `H = hash(8x00 || mHash || salt)` and
//! `DB = PS || 0x01 || salt`; the salt is one hash-output long. The
//! layout keeps the trailing hash in the clear, so verification
//! recovers the salt from the masked half and recomputes `H` directly.
//!
//! Verification never explains itself: every defect is plain `false`.

use core::marker::PhantomData;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use veil_algorithms::hash::HashFunction;
use veil_algorithms::kdf::Mgf1;

use super::keys::{RsaPrivateKey, RsaPublicKey};
use super::{to_fixed_bytes, xor_in_place};

/// PSS over a caller-selected hash function
pub struct Pss<H: HashFunction> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Pss<H> {
    /// Sign `message` with `key`, drawing a fresh salt from `rng`.
    ///
    /// The signature is exactly one modulus-sized block. `None` when
    /// the modulus is too small to hold the encoding.
    pub fn sign<R: RngCore + CryptoRng>(
        key: &RsaPrivateKey,
        message: &[u8],
        rng: &mut R,
    ) -> Option<Vec<u8>> {
        let k = key.modulus_size();
        let hash_len = H::output_size();
        let db_len = k.checked_sub(hash_len + 1)?;
        let ps_len = db_len.checked_sub(hash_len + 1)?;

        let m_hash = H::digest(message).ok()?;
        let mut salt = vec![0u8; hash_len];
        rng.fill_bytes(&mut salt);
        let h = salted_hash::<H>(m_hash.as_ref(), &salt)?;

        // DB = PS || 0x01 || salt
        let mut db = vec![0u8; db_len];
        db[ps_len] = 0x01;
        db[ps_len + 1..].copy_from_slice(&salt);
        let mask = Mgf1::<H>::derive(h.as_ref(), db_len).ok()?;
        xor_in_place(&mut db, &mask);

        // EM = 0x00 || maskedDB || H, always below N
        let mut em = Vec::with_capacity(k);
        em.push(0x00);
        em.extend_from_slice(&db);
        em.extend_from_slice(h.as_ref());

        let s = key.transform(&BigUint::from_bytes_be(&em))?;
        Some(to_fixed_bytes(&s, k))
    }

    /// Check `signature` against `message` under `key`
    pub fn verify(key: &RsaPublicKey, message: &[u8], signature: &[u8]) -> bool {
        let k = key.modulus_size();
        let hash_len = H::output_size();
        if signature.len() != k || k < 2 * hash_len + 2 {
            return false;
        }

        let em = match key.transform(&BigUint::from_bytes_be(signature)) {
            Some(m) => to_fixed_bytes(&m, k),
            None => return false,
        };
        if em[0] != 0x00 {
            return false;
        }

        let db_len = k - hash_len - 1;
        let (masked_db, h) = em[1..].split_at(db_len);
        let mut db = masked_db.to_vec();
        let mask = match Mgf1::<H>::derive(h, db_len) {
            Ok(mask) => mask,
            Err(_) => return false,
        };
        xor_in_place(&mut db, &mask);

        // PS must be all zero up to the 0x01 delimiter
        let mut idx = 0;
        while idx < db.len() && db[idx] == 0x00 {
            idx += 1;
        }
        if idx == db.len() || db[idx] != 0x01 {
            return false;
        }
        let salt = &db[idx + 1..];
        if salt.len() != hash_len {
            return false;
        }

        let m_hash = match H::digest(message) {
            Ok(digest) => digest,
            Err(_) => return false,
        };
        match salted_hash::<H>(m_hash.as_ref(), salt) {
            Some(expected) => bool::from(expected.as_ref().ct_eq(h)),
            None => false,
        }
    }
}

/// `hash(8x00 || mHash || salt)`
fn salted_hash<H: HashFunction>(m_hash: &[u8], salt: &[u8]) -> Option<H::Output> {
    let mut hasher = H::new();
    hasher.update(&[0u8; 8]).ok()?;
    hasher.update(m_hash).ok()?;
    hasher.update(salt).ok()?;
    hasher.finalize().ok()
}
