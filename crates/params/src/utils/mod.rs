//! Utility constants

pub mod hash;
