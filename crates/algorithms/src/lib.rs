//! HMAC primitives and RFC 6979 deterministic nonce derivation
//!
//! This crate provides the algorithmic part of the dnonce library: HMAC over
//! the SHA-2 family and the HMAC-DRBG that turns a private key and a message
//! digest into the per-signature secret `k` of (EC)DSA.
//! The library is usable in both `std` and `no_std` + `alloc` environments.
//!
//! # Security Features
//!
//! - Secret buffers (key octets, seed, DRBG state, nonce) are zeroized on drop
//! - Range checks on secrets run in constant time
//! - `Debug` output never reveals secret material

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// MAC implementations
pub mod mac;
pub use mac::{Hmac, HmacHash, HmacSha224, HmacSha256, HmacSha384, HmacSha512};

// Deterministic nonce derivation
pub mod rfc6979;
pub use rfc6979::{
    bits2octets, derive_nonce_with_rng, DeriveOptions, Nonce, NonceDeriver, PrivateKey,
    DEFAULT_MAX_ITERATIONS,
};

#[cfg(feature = "std")]
pub use rfc6979::derive_nonce;

// Re-export the error type used throughout
pub use dnonce_api::{Error, Result};
