//! Group parameters and size constants for the dnonce library
//!
//! Supplies the orders of the standard signing groups and the output sizes of
//! the hash functions their HMACs are built on.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Traditional algorithm constants
pub mod traditional;

// Utility constants
pub mod utils;

pub use traditional::ecdsa::{
    GroupParams, NIST_P192, NIST_P224, NIST_P256, NIST_P384, NIST_P521, SECP256K1,
};
