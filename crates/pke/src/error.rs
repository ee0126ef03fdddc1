//! Error handling for the RSA engine

use core::fmt;
use veil_algorithms::error::Error as PrimitiveError;

/// Error type for RSA key handling and raw operations.
///
/// Recoverable crypto failures (OAEP padding mismatch, PSS
/// verification failure) are deliberately not represented here; those
/// surface as `None`/`false` from the padding engines.
#[derive(Debug)]
pub enum Error {
    /// An underlying hash/mask primitive failed
    Primitive(PrimitiveError),
    /// Key material does not form a usable key
    InvalidKey(&'static str),
    /// Key-pair construction failed for the supplied primes
    KeyGeneration(&'static str),
    /// Interchange text could not be parsed
    KeyFormat(&'static str),
    /// An integer operand is not below the modulus
    IntegerTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "RSA primitive error: {}", e),
            Error::InvalidKey(reason) => write!(f, "Invalid RSA key: {}", reason),
            Error::KeyGeneration(reason) => write!(f, "RSA key generation failed: {}", reason),
            Error::KeyFormat(reason) => write!(f, "Invalid RSA key format: {}", reason),
            Error::IntegerTooLarge => {
                write!(f, "RSA integer operand is not below the modulus")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

/// Result type for RSA engine operations
pub type Result<T> = core::result::Result<T, Error>;
