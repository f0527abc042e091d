//! # dnonce
//!
//! Deterministic nonce derivation for elliptic-curve signatures (RFC 6979).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dnonce = "0.3"
//! ```
//!
//! ```
//! use dnonce::prelude::*;
//!
//! let hmac = HmacSha256::new();
//! let key = [0x11u8; 32];
//! let digest = [0x22u8; 32];
//!
//! let k = NonceDeriver::new(&SECP256K1)
//!     .with_hmac(&hmac)
//!     .derive(&digest, &key)
//!     .unwrap();
//! assert_eq!(k.len(), 32);
//! ```
//!
//! ## Features
//!
//! - `std` (default): operating-system entropy for hedged nonces, `std::error::Error`
//! - `serde`: `Serialize`/`Deserialize` for derivation options
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dnonce-api`]: Error type and collaborator traits
//! - [`dnonce-internal`]: Constant-time helpers and big-endian integer codecs
//! - [`dnonce-params`]: Group orders of the standard curves
//! - [`dnonce-algorithms`]: HMAC primitives and the HMAC-DRBG nonce deriver

#![cfg_attr(not(feature = "std"), no_std)]

pub use dnonce_algorithms as algorithms;
pub use dnonce_api as api;
pub use dnonce_internal as internal;
pub use dnonce_params as params;

pub use num_bigint;

/// Common imports for dnonce users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export collaborator traits
    pub use crate::api::{GroupParameters, HmacPrimitive};

    // Re-export security types
    pub use crate::api::{ExtraEntropy, SecretVec};
    pub use zeroize::Zeroizing;

    // Group parameters
    pub use crate::params::{
        GroupParams, NIST_P192, NIST_P224, NIST_P256, NIST_P384, NIST_P521, SECP256K1,
    };

    // HMAC primitives
    pub use crate::algorithms::mac::{HmacSha224, HmacSha256, HmacSha384, HmacSha512};

    // Nonce derivation
    pub use crate::algorithms::rfc6979::{
        derive_nonce_with_rng, DeriveOptions, Nonce, NonceDeriver, PrivateKey,
        DEFAULT_MAX_ITERATIONS,
    };

    #[cfg(feature = "std")]
    pub use crate::algorithms::rfc6979::derive_nonce;

    pub use num_bigint::BigUint;
    pub use rand::{CryptoRng, RngCore};
}
