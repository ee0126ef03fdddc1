//! Utility constants grouped by primitive family

pub mod hash;
pub mod pke;
pub mod symmetric;
