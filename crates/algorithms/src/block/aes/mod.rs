//! AES block cipher implementations
//!
//! Implements the Advanced Encryption Standard (FIPS 197) for 128-,
//! 192- and 256-bit keys. All substitution and multiplication tables
//! are immutable compile-time constants (see [`tables`]); the round-key
//! schedule is derived once at construction and held in zeroizing
//! storage.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;
use veil_common::security::SecretBuffer;
use veil_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE, AES256_ROUNDS,
    AES_BLOCK_SIZE,
};

mod tables;
use tables::{INV_SBOX, MUL11, MUL13, MUL14, MUL2, MUL3, MUL9, RCON, SBOX};

/// Substitute each byte of a key-schedule word through the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

/// Key expansion shared by all three variants.
///
/// `NK` is the key length in 32-bit words, `RK` the round-key buffer
/// size in bytes. Every `NK` words the previous word is rotated,
/// substituted and XORed with the round constant; the 256-bit schedule
/// additionally substitutes at the half-way word.
fn expand_key<const NK: usize, const RK: usize>(key: &[u8]) -> SecretBuffer<RK> {
    let total_words = RK / 4;
    let mut w = [0u32; 60];

    for (i, chunk) in key.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in NK..total_words {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / NK];
        } else if NK == 8 && i % NK == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - NK] ^ temp;
    }

    let mut round_keys = [0u8; RK];
    for (chunk, word) in round_keys.chunks_exact_mut(4).zip(w.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    w.zeroize();
    SecretBuffer::new(round_keys)
}

#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

// State layout is column-major as in FIPS 197: byte index = 4*col + row.
const SHIFT_ROWS_MAP: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];
const INV_SHIFT_ROWS_MAP: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

fn shift_rows(state: &mut [u8; 16]) {
    let temp = *state;
    for (i, &src) in SHIFT_ROWS_MAP.iter().enumerate() {
        state[i] = temp[src];
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let temp = *state;
    for (i, &src) in INV_SHIFT_ROWS_MAP.iter().enumerate() {
        state[i] = temp[src];
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [col[0], col[1], col[2], col[3]];
        col[0] = MUL2[s0 as usize] ^ MUL3[s1 as usize] ^ s2 ^ s3;
        col[1] = s0 ^ MUL2[s1 as usize] ^ MUL3[s2 as usize] ^ s3;
        col[2] = s0 ^ s1 ^ MUL2[s2 as usize] ^ MUL3[s3 as usize];
        col[3] = MUL3[s0 as usize] ^ s1 ^ s2 ^ MUL2[s3 as usize];
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [col[0], col[1], col[2], col[3]];
        col[0] = MUL14[s0 as usize] ^ MUL11[s1 as usize] ^ MUL13[s2 as usize] ^ MUL9[s3 as usize];
        col[1] = MUL9[s0 as usize] ^ MUL14[s1 as usize] ^ MUL11[s2 as usize] ^ MUL13[s3 as usize];
        col[2] = MUL13[s0 as usize] ^ MUL9[s1 as usize] ^ MUL14[s2 as usize] ^ MUL11[s3 as usize];
        col[3] = MUL11[s0 as usize] ^ MUL13[s1 as usize] ^ MUL9[s2 as usize] ^ MUL14[s3 as usize];
    }
}

/// Run the forward rounds over one block
fn encrypt_rounds(block: &mut [u8], round_keys: &[u8], rounds: usize) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[..16]);
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        let offset = round * 16;
        add_round_key(&mut state, &round_keys[offset..offset + 16]);
    }
    // Final round omits MixColumns
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds * 16..rounds * 16 + 16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Run the inverse rounds over one block
fn decrypt_rounds(block: &mut [u8], round_keys: &[u8], rounds: usize) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[rounds * 16..rounds * 16 + 16]);
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        let offset = round * 16;
        add_round_key(&mut state, &round_keys[offset..offset + 16]);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &round_keys[..16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// AES-128 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<176>, // 11 round keys × 16 bytes
}

/// AES-192 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    round_keys: SecretBuffer<208>, // 13 round keys × 16 bytes
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<240>, // 15 round keys × 16 bytes
}

impl Aes128 {
    /// Build a cipher from an arbitrary byte slice, zero-padding or
    /// truncating it to the 128-bit key size
    pub fn new_from_slice(key: &[u8]) -> Self {
        BlockCipher::new(&SecretBytes::from_slice_padded(key))
    }
}

impl Aes192 {
    /// Build a cipher from an arbitrary byte slice, zero-padding or
    /// truncating it to the 192-bit key size
    pub fn new_from_slice(key: &[u8]) -> Self {
        BlockCipher::new(&SecretBytes::from_slice_padded(key))
    }
}

impl Aes256 {
    /// Build a cipher from an arbitrary byte slice, zero-padding or
    /// truncating it to the 256-bit key size
    pub fn new_from_slice(key: &[u8]) -> Self {
        BlockCipher::new(&SecretBytes::from_slice_padded(key))
    }
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<AES128_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Aes128 {
            round_keys: expand_key::<4, 176>(key.as_ref()),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(block, self.round_keys.as_ref(), AES128_ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(block, self.round_keys.as_ref(), AES128_ROUNDS)
    }

    fn generate_key<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

impl BlockCipher for Aes192 {
    type Algorithm = Aes192Algorithm;
    type Key = SecretBytes<AES192_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Aes192 {
            round_keys: expand_key::<6, 208>(key.as_ref()),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(block, self.round_keys.as_ref(), AES192_ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(block, self.round_keys.as_ref(), AES192_ROUNDS)
    }

    fn generate_key<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = SecretBytes<AES256_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Aes256 {
            round_keys: expand_key::<8, 240>(key.as_ref()),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(block, self.round_keys.as_ref(), AES256_ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(block, self.round_keys.as_ref(), AES256_ROUNDS)
    }

    fn generate_key<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

#[cfg(test)]
mod tests;
