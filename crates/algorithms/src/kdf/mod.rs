//! Mask and key derivation built on the hash primitives

pub mod mgf1;

pub use mgf1::Mgf1;
