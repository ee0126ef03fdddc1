//! Block cipher modes of operation

pub mod cbc;

pub use cbc::Cbc;
