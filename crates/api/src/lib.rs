//! Public API traits and types for the dnonce library
//!
//! This crate provides the public API surface shared by the dnonce crates:
//! the error type, the collaborator traits a nonce derivation is built from,
//! and the secret-carrying value types passed between them.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{GroupParameters, HmacPrimitive};
