//! Constant values for the veil cryptography workspace
//!
//! This crate carries nothing but `const` items so that every other
//! crate in the workspace agrees on sizes and fixed protocol values.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
