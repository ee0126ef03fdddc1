//! Fixed-size value types used across the primitive implementations

mod digest;
mod key;

pub use digest::Digest;
pub use key::SecretBytes;
