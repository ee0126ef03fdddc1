//! Constants for public-key encryption

/// Starting candidate for the RSA public-exponent search.
///
/// Key construction walks upward from this value to the smallest
/// exponent coprime to the Carmichael totient of the modulus.
pub const RSA_EXPONENT_SEARCH_START: u64 = 3;

/// Number of Miller-Rabin rounds used by probable-prime testing
pub const RSA_MILLER_RABIN_ROUNDS: usize = 40;

/// Smallest modulus size accepted by random key generation, in bits
pub const RSA_MIN_MODULUS_BITS: u64 = 512;
