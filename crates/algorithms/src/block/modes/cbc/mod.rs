//! Cipher Block Chaining (CBC) mode for arbitrary-length messages
//!
//! Each plaintext block is XORed with the previous ciphertext block
//! before encryption; the first block is XORed with the initialization
//! vector. The final partial block is zero-padded up to the block
//! boundary.
//!
//! Two IV conventions are supported:
//! - [`Cbc::new`] takes an explicit IV and should be used for any new
//!   data, with a random IV per message.
//! - [`Cbc::with_zero_iv`] reproduces the legacy implicit all-zero IV,
//!   byte-for-byte compatible with existing encrypted data. Under a
//!   fixed key it is fully deterministic and leaks equality of
//!   identical leading plaintext blocks across messages.
//!
//! Length recovery likewise has two conventions: the keep-size codec
//! appends one unencrypted byte holding the zero-pad count so decryption
//! restores the exact original length, while
//! [`decrypt_trim_nulls`](Cbc::decrypt_trim_nulls) implements the
//! legacy heuristic of stripping all trailing zero bytes.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Error, Result};
use veil_params::utils::symmetric::AES_BLOCK_SIZE;

/// CBC mode wrapper around a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: [u8; AES_BLOCK_SIZE],
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Create a CBC instance with an explicit initialization vector.
    ///
    /// The cipher's block size must match the 16-byte chaining width.
    pub fn new(cipher: B, iv: [u8; AES_BLOCK_SIZE]) -> Result<Self> {
        validate::length("CBC block size", B::block_size(), AES_BLOCK_SIZE)?;
        Ok(Self { cipher, iv })
    }

    /// Create a CBC instance using the legacy implicit all-zero IV
    pub fn with_zero_iv(cipher: B) -> Result<Self> {
        Self::new(cipher, [0u8; AES_BLOCK_SIZE])
    }

    /// Number of zero bytes appended to reach the block boundary
    fn pad_len(message_len: usize) -> usize {
        match message_len % AES_BLOCK_SIZE {
            0 => 0,
            rem => AES_BLOCK_SIZE - rem,
        }
    }

    /// Encrypt a message, zero-padding the final partial block.
    ///
    /// The ciphertext length is the message length rounded up to a
    /// multiple of 16 bytes; an empty message yields an empty
    /// ciphertext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = Vec::with_capacity(plaintext.len() + Self::pad_len(plaintext.len()));
        let mut prev = self.iv;

        for chunk in plaintext.chunks(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block[..chunk.len()].copy_from_slice(chunk);

            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            prev = block;
        }

        Ok(ciphertext)
    }

    /// Decrypt a message.
    ///
    /// The ciphertext must be a whole number of blocks; the returned
    /// plaintext keeps any zero padding the encryption appended.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_multiple("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev = self.iv;

        for chunk in ciphertext.chunks(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let current = block;

            self.cipher.decrypt_block(&mut block)?;
            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }

            plaintext.extend_from_slice(&block);
            prev = current;
        }

        Ok(plaintext)
    }

    /// Encrypt a message and append one unencrypted trailing byte
    /// recording the zero-pad count, so the exact original length can
    /// be recovered on decryption.
    pub fn encrypt_keep_size(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = self.encrypt(plaintext)?;
        out.push(Self::pad_len(plaintext.len()) as u8);
        Ok(out)
    }

    /// Decrypt a keep-size message, trimming the output to the exact
    /// original length recorded in the trailing pad byte.
    pub fn decrypt_keep_size(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let (&pad, body) = ciphertext.split_last().ok_or(Error::Length {
            context: "CBC keep-size ciphertext",
            expected: 1,
            actual: 0,
        })?;
        let pad = pad as usize;
        if pad >= AES_BLOCK_SIZE || (body.is_empty() && pad != 0) {
            return Err(Error::param(
                "pad byte",
                "keep-size pad count must be below the block size",
            ));
        }

        let mut plaintext = self.decrypt(body)?;
        plaintext.truncate(plaintext.len() - pad);
        Ok(plaintext)
    }

    /// Decrypt a message and strip all trailing zero bytes.
    ///
    /// This legacy convention cannot distinguish padding from zero
    /// bytes that legitimately end the plaintext; prefer the keep-size
    /// codec when the exact length matters.
    pub fn decrypt_trim_nulls(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = self.decrypt(ciphertext)?;
        while plaintext.last() == Some(&0) {
            plaintext.pop();
        }
        Ok(plaintext)
    }
}
