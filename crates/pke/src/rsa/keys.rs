//! RSA key pairs and the raw modular-exponentiation operations
//!
//! Public and private keys are distinct types, so a signing call can
//! never be handed an encryption-only key by accident. Construction
//! from primes derives the smallest odd public exponent coprime to the
//! Carmichael function `lambda = lcm(p-1, q-1)` and inverts it to get
//! the private exponent.

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use veil_params::utils::pke::{
    RSA_EXPONENT_SEARCH_START, RSA_MILLER_RABIN_ROUNDS, RSA_MIN_MODULUS_BITS,
};

use crate::error::{Error, Result};

/// RSA public key: modulus and public exponent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

/// RSA private key: modulus and private exponent
#[derive(Clone)]
pub struct RsaPrivateKey {
    n: BigUint,
    d: BigUint,
}

/// A matched public/private key pair over one modulus
#[derive(Clone)]
pub struct RsaKeyPair {
    /// The shareable half of the pair
    pub public: RsaPublicKey,
    /// The secret half of the pair
    pub private: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Build a public key from raw components
    pub fn from_components(n: BigUint, e: BigUint) -> Result<Self> {
        if n <= BigUint::one() {
            return Err(Error::InvalidKey("modulus must be greater than one"));
        }
        if e.is_zero() {
            return Err(Error::InvalidKey("exponent must be non-zero"));
        }
        Ok(RsaPublicKey { n, e })
    }

    /// The modulus `N`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// The public exponent `e`
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Modulus size in whole bytes; every padded block is this long
    pub fn modulus_size(&self) -> usize {
        (self.n.bits() as usize).div_ceil(8)
    }

    /// Raw RSA: `m^e mod N`.
    ///
    /// The operand must be below the modulus.
    pub fn encrypt_integer(&self, m: &BigUint) -> Result<BigUint> {
        self.transform(m).ok_or(Error::IntegerTooLarge)
    }

    /// Textbook operation without the error wrapper, for the padding
    /// engines. `None` when the operand is not below the modulus.
    pub(crate) fn transform(&self, x: &BigUint) -> Option<BigUint> {
        if x >= &self.n {
            return None;
        }
        Some(x.modpow(&self.e, &self.n))
    }
}

impl RsaPrivateKey {
    /// Build a private key from raw components
    pub fn from_components(n: BigUint, d: BigUint) -> Result<Self> {
        if n <= BigUint::one() {
            return Err(Error::InvalidKey("modulus must be greater than one"));
        }
        if d.is_zero() {
            return Err(Error::InvalidKey("exponent must be non-zero"));
        }
        Ok(RsaPrivateKey { n, d })
    }

    /// The modulus `N`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// The private exponent `d`
    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Modulus size in whole bytes
    pub fn modulus_size(&self) -> usize {
        (self.n.bits() as usize).div_ceil(8)
    }

    /// Raw RSA: `c^d mod N`.
    ///
    /// The operand must be below the modulus.
    pub fn decrypt_integer(&self, c: &BigUint) -> Result<BigUint> {
        self.transform(c).ok_or(Error::IntegerTooLarge)
    }

    pub(crate) fn transform(&self, x: &BigUint) -> Option<BigUint> {
        if x >= &self.n {
            return None;
        }
        Some(x.modpow(&self.d, &self.n))
    }
}

impl core::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("bits", &self.n.bits())
            .field("d", &"[REDACTED]")
            .finish()
    }
}

impl RsaKeyPair {
    /// Derive a key pair from two primes without validating them.
    ///
    /// Picks the smallest exponent `e >= 3` with `gcd(e, lambda) = 1`
    /// whose inverse differs from `e` itself, where
    /// `lambda = lcm(p-1, q-1)`.
    pub fn from_primes(p: &BigUint, q: &BigUint) -> Result<Self> {
        let one = BigUint::one();
        if p <= &one || q <= &one {
            return Err(Error::KeyGeneration("primes must be greater than one"));
        }

        let n = p * q;
        let lambda = (p - &one).lcm(&(q - &one));

        let mut e = BigUint::from(RSA_EXPONENT_SEARCH_START);
        let (e, d) = loop {
            if e >= lambda {
                return Err(Error::KeyGeneration("no usable public exponent"));
            }
            if e.gcd(&lambda).is_one() {
                if let Some(d) = mod_inverse(&e, &lambda) {
                    // d == e would make the key pair symmetric
                    if d != e {
                        break (e, d);
                    }
                }
            }
            e += 1u32;
        };

        Ok(RsaKeyPair {
            public: RsaPublicKey { n: n.clone(), e },
            private: RsaPrivateKey { n, d },
        })
    }

    /// Derive a key pair from two primes, rejecting degenerate inputs.
    ///
    /// On top of [`from_primes`](Self::from_primes) this requires the
    /// modulus bit length to be a multiple of eight (so padded blocks
    /// have an unambiguous byte size), distinct primes, and a
    /// Carmichael function that collapses to neither `p - 1` nor
    /// `q - 1`.
    pub fn from_primes_checked(p: &BigUint, q: &BigUint) -> Result<Self> {
        if p == q {
            return Err(Error::KeyGeneration("primes must be distinct"));
        }

        let one = BigUint::one();
        if p <= &one || q <= &one {
            return Err(Error::KeyGeneration("primes must be greater than one"));
        }

        let n = p * q;
        if n.bits() % 8 != 0 {
            return Err(Error::KeyGeneration(
                "modulus bit length must be a multiple of eight",
            ));
        }

        let p_minus = p - &one;
        let q_minus = q - &one;
        let lambda = p_minus.lcm(&q_minus);
        if lambda == p_minus || lambda == q_minus {
            return Err(Error::KeyGeneration("degenerate prime combination"));
        }

        Self::from_primes(p, q)
    }

    /// Generate a fresh key pair with a modulus of exactly `bits` bits.
    ///
    /// Primes come from Miller-Rabin testing of random candidates with
    /// the top two bits forced, which pins the product to the requested
    /// width. Candidate pairs that fail the checked construction are
    /// redrawn.
    pub fn generate<R: RngCore + CryptoRng>(bits: u64, rng: &mut R) -> Result<Self> {
        if bits < RSA_MIN_MODULUS_BITS {
            return Err(Error::KeyGeneration("modulus too small"));
        }
        if bits % 8 != 0 {
            return Err(Error::KeyGeneration(
                "modulus bit length must be a multiple of eight",
            ));
        }

        loop {
            let p = random_prime(bits / 2, rng);
            let q = random_prime(bits / 2, rng);
            if p == q {
                continue;
            }
            match Self::from_primes_checked(&p, &q) {
                Ok(pair) if pair.public.bit_length() == bits => return Ok(pair),
                _ => continue,
            }
        }
    }
}

/// Modular inverse of `a` modulo `m` via the extended Euclidean
/// algorithm, `None` when `gcd(a, m) != 1`
fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a_int = BigInt::from_biguint(Sign::Plus, a.clone());
    let m_int = BigInt::from_biguint(Sign::Plus, m.clone());
    let ext = a_int.extended_gcd(&m_int);
    if !ext.gcd.is_one() {
        return None;
    }
    let mut x = ext.x % &m_int;
    if x.sign() == Sign::Minus {
        x += &m_int;
    }
    x.to_biguint()
}

/// Draw a random probable prime of exactly `bits` bits.
///
/// The two top bits and the low bit are forced, so the product of two
/// such primes always has twice the requested width.
fn random_prime<R: RngCore + CryptoRng>(bits: u64, rng: &mut R) -> BigUint {
    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(bits - 2, true);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate, RSA_MILLER_RABIN_ROUNDS, rng) {
            return candidate;
        }
    }
}

const SMALL_PRIMES: [u32; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Miller-Rabin primality test with random bases
fn is_probable_prime<R: RngCore + CryptoRng>(
    candidate: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    if candidate < &two {
        return false;
    }
    if candidate == &two {
        return true;
    }
    if candidate.is_even() {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if candidate == &p {
            return true;
        }
        if (candidate % &p).is_zero() {
            return false;
        }
    }

    // candidate - 1 = d * 2^s with d odd
    let minus_one = candidate - &one;
    let mut d = minus_one.clone();
    let mut s = 0u64;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &minus_one);
        let mut x = a.modpow(&d, candidate);
        if x.is_one() || x == minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, candidate);
            if x == minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn toy_pair() -> RsaKeyPair {
        // p = 61, q = 53: N = 3233, lambda = lcm(60, 52) = 780
        RsaKeyPair::from_primes(&BigUint::from(61u32), &BigUint::from(53u32)).unwrap()
    }

    #[test]
    fn from_primes_picks_smallest_exponent() {
        let pair = toy_pair();
        assert_eq!(pair.public.modulus(), &BigUint::from(3233u32));
        // 780 = 2^2 * 3 * 5 * 13, so 7 is the first coprime candidate
        assert_eq!(pair.public.exponent(), &BigUint::from(7u32));
        let lambda = BigUint::from(780u32);
        assert!(((pair.public.exponent() * pair.private.exponent()) % lambda).is_one());
    }

    #[test]
    fn raw_round_trip() {
        let pair = toy_pair();
        let m = BigUint::from(42u32);
        let c = pair.public.encrypt_integer(&m).unwrap();
        assert_ne!(c, m);
        assert_eq!(pair.private.decrypt_integer(&c).unwrap(), m);
    }

    #[test]
    fn operand_must_be_below_modulus() {
        let pair = toy_pair();
        let too_big = pair.public.modulus().clone();
        assert!(matches!(
            pair.public.encrypt_integer(&too_big),
            Err(Error::IntegerTooLarge)
        ));
        assert!(matches!(
            pair.private.decrypt_integer(&too_big),
            Err(Error::IntegerTooLarge)
        ));
    }

    #[test]
    fn checked_rejects_equal_primes() {
        let p = BigUint::from(61u32);
        assert!(RsaKeyPair::from_primes_checked(&p, &p).is_err());
    }

    #[test]
    fn checked_rejects_ragged_modulus_width() {
        // 61 * 53 = 3233 is a 12-bit modulus
        let err = RsaKeyPair::from_primes_checked(&BigUint::from(61u32), &BigUint::from(53u32));
        assert!(err.is_err());
    }

    #[test]
    fn checked_accepts_byte_aligned_modulus() {
        // 251 * 241 = 60491 is a 16-bit modulus
        let pair =
            RsaKeyPair::from_primes_checked(&BigUint::from(251u32), &BigUint::from(241u32))
                .unwrap();
        assert_eq!(pair.public.bit_length(), 16);
        assert_eq!(pair.public.modulus_size(), 2);
    }

    #[test]
    fn generated_pair_has_requested_width() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let pair = RsaKeyPair::generate(512, &mut rng).unwrap();
        assert_eq!(pair.public.bit_length(), 512);
        assert_eq!(pair.public.modulus_size(), 64);

        let m = BigUint::from(123456789u64);
        let c = pair.public.encrypt_integer(&m).unwrap();
        assert_eq!(pair.private.decrypt_integer(&c).unwrap(), m);
    }

    #[test]
    fn generate_rejects_bad_widths() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(RsaKeyPair::generate(256, &mut rng).is_err());
        assert!(RsaKeyPair::generate(516, &mut rng).is_err());
    }

    #[test]
    fn mod_inverse_known_values() {
        let inv = mod_inverse(&BigUint::from(7u32), &BigUint::from(780u32)).unwrap();
        assert_eq!(inv, BigUint::from(223u32));
        assert!(mod_inverse(&BigUint::from(6u32), &BigUint::from(780u32)).is_none());
    }

    #[test]
    fn miller_rabin_classifies_small_numbers() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for p in [2u32, 3, 5, 61, 257, 65537] {
            assert!(is_probable_prime(&BigUint::from(p), 16, &mut rng), "{}", p);
        }
        for c in [1u32, 4, 91, 561, 65535] {
            assert!(!is_probable_prime(&BigUint::from(c), 16, &mut rng), "{}", c);
        }
    }

    #[test]
    fn private_key_debug_is_redacted() {
        let pair = toy_pair();
        let rendered = format!("{:?}", pair.private);
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("3233"));
    }
}
