//! OAEP padding with multi-block chunking
//!
//! Standard RSAES-OAEP encoding (RFC 8017 section 7.1) applied per
//! block: plaintexts longer than one block's capacity are split into
//! maximal chunks and each chunk is padded and encrypted on its own,
//! so the ciphertext is always a whole number of modulus-sized blocks.
//!
//! Decryption failures are indistinguishable by design: a wrong key,
//! wrong label or corrupted block all come back as `None` with no
//! detail attached.

use core::marker::PhantomData;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use veil_algorithms::hash::HashFunction;
use veil_algorithms::kdf::Mgf1;
use veil_common::security::SecretVec;

use super::keys::{RsaPrivateKey, RsaPublicKey};
use super::{to_fixed_bytes, xor_in_place};

/// OAEP over a caller-selected hash function
pub struct Oaep<H: HashFunction> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Oaep<H> {
    /// Message bytes one block can carry under `key`, or `None` when
    /// the modulus is too small for this hash
    pub fn max_message_len(key: &RsaPublicKey) -> Option<usize> {
        key.modulus_size().checked_sub(2 * H::output_size() + 2)
    }

    /// Encrypt `message` under `key`, binding the optional `label`.
    ///
    /// An empty message still produces one full ciphertext block.
    /// `None` when the modulus is too small to carry any payload.
    pub fn encrypt<R: RngCore + CryptoRng>(
        key: &RsaPublicKey,
        message: &[u8],
        label: &[u8],
        rng: &mut R,
    ) -> Option<Vec<u8>> {
        let k = key.modulus_size();
        let hash_len = H::output_size();
        let capacity = Self::max_message_len(key)?;
        if capacity == 0 {
            return None;
        }
        let label_hash = H::digest(label).ok()?;

        let mut out = Vec::with_capacity(message.len().div_ceil(capacity).max(1) * k);
        let chunks: Vec<&[u8]> = if message.is_empty() {
            vec![&[][..]]
        } else {
            message.chunks(capacity).collect()
        };

        for chunk in chunks {
            // DB = lHash || PS || 0x01 || chunk
            let db_len = k - hash_len - 1;
            let mut db = vec![0u8; db_len];
            db[..hash_len].copy_from_slice(label_hash.as_ref());
            db[db_len - chunk.len() - 1] = 0x01;
            db[db_len - chunk.len()..].copy_from_slice(chunk);

            let mut seed = vec![0u8; hash_len];
            rng.fill_bytes(&mut seed);

            let db_mask = Mgf1::<H>::derive(&seed, db_len).ok()?;
            xor_in_place(&mut db, &db_mask);
            let seed_mask = Mgf1::<H>::derive(&db, hash_len).ok()?;
            xor_in_place(&mut seed, &seed_mask);

            // EM = 0x00 || maskedSeed || maskedDB, always below N
            let mut em = Vec::with_capacity(k);
            em.push(0x00);
            em.extend_from_slice(&seed);
            em.extend_from_slice(&db);

            let c = key.transform(&BigUint::from_bytes_be(&em))?;
            out.extend_from_slice(&to_fixed_bytes(&c, k));
        }
        Some(out)
    }

    /// Decrypt a ciphertext produced by [`encrypt`](Self::encrypt).
    ///
    /// The same `label` must be supplied. Any structural defect in any
    /// block yields `None`.
    pub fn decrypt(key: &RsaPrivateKey, ciphertext: &[u8], label: &[u8]) -> Option<Vec<u8>> {
        let k = key.modulus_size();
        let hash_len = H::output_size();
        if k < 2 * hash_len + 2 || ciphertext.is_empty() || ciphertext.len() % k != 0 {
            return None;
        }
        let label_hash = H::digest(label).ok()?;

        let mut out = Vec::new();
        for block in ciphertext.chunks(k) {
            let m = key.transform(&BigUint::from_bytes_be(block))?;
            let em = SecretVec::new(to_fixed_bytes(&m, k));
            let em = em.as_ref();
            if em[0] != 0x00 {
                return None;
            }

            let (masked_seed, masked_db) = em[1..].split_at(hash_len);
            let mut seed = masked_seed.to_vec();
            let seed_mask = Mgf1::<H>::derive(masked_db, hash_len).ok()?;
            xor_in_place(&mut seed, &seed_mask);

            let mut db = SecretVec::from_slice(masked_db);
            let db_mask = Mgf1::<H>::derive(&seed, masked_db.len()).ok()?;
            xor_in_place(db.as_mut(), &db_mask);
            let db = db.as_ref();

            if !bool::from(db[..hash_len].ct_eq(label_hash.as_ref())) {
                return None;
            }

            // Skip the zero padding, require the 0x01 delimiter
            let mut idx = hash_len;
            while idx < db.len() && db[idx] == 0x00 {
                idx += 1;
            }
            if idx == db.len() || db[idx] != 0x01 {
                return None;
            }
            out.extend_from_slice(&db[idx + 1..]);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests;
