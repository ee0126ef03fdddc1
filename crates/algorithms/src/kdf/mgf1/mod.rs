//! MGF1 mask generation function (RFC 8017 appendix B.2.1)
//!
//! Expands a seed into an arbitrary-length byte string by hashing
//! `seed || counter` for increasing 32-bit big-endian counters and
//! concatenating the digests. The hash is pluggable, so the 256-bit
//! and 512-bit variants share one implementation.

use core::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};
use crate::hash::HashFunction;

/// MGF1 over a caller-selected hash function
pub struct Mgf1<H: HashFunction> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Mgf1<H> {
    /// Produce exactly `output_len` mask bytes from `seed`.
    ///
    /// A zero-length request yields an empty vector for any seed.
    pub fn derive(seed: &[u8], output_len: usize) -> Result<Vec<u8>> {
        if output_len == 0 {
            return Ok(Vec::new());
        }

        let hash_len = H::output_size();
        let blocks = output_len.div_ceil(hash_len);
        if blocks > u32::MAX as usize {
            return Err(Error::param("output_len", "mask length exceeds MGF1 limit"));
        }

        let mut mask = Vec::with_capacity(blocks * hash_len);
        let mut counter_bytes = [0u8; 4];
        for counter in 0..blocks as u32 {
            BigEndian::write_u32(&mut counter_bytes, counter);
            let mut hasher = H::new();
            hasher.update(seed)?;
            hasher.update(&counter_bytes)?;
            mask.extend_from_slice(hasher.finalize()?.as_ref());
        }
        mask.truncate(output_len);
        Ok(mask)
    }
}

#[cfg(test)]
mod tests;
