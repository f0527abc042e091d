//! Core types with security guarantees for the dnonce library
//!
//! Secret byte strings are wrapped so they are zeroed when dropped and never
//! printed by `Debug`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use dnonce_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A variable-length vector of bytes that is securely zeroed when dropped
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new instance from an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self { data: slice.to_vec() }
    }

    /// Create filled with `len` copies of `byte`
    pub fn filled(byte: u8, len: usize) -> Self {
        Self { data: vec![byte; len] }
    }

    /// Create an empty vector with room for `capacity` bytes
    ///
    /// Growing past `capacity` reallocates and leaves the old buffer unzeroed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    /// Append bytes
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        self.data.extend_from_slice(slice);
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec({} bytes)[REDACTED]", self.data.len())
    }
}

/// Optional auxiliary input mixed into the RFC 6979 seed
///
/// Extra entropy does not affect signature validity but changes the nonce
/// derived for a fixed message and key ("hedged" signing).
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtraEntropy {
    /// Purely deterministic derivation
    #[default]
    None,
    /// Draw `L` fresh bytes from the random source, once per derivation
    Generate,
    /// Use these exact bytes (any length)
    Explicit(Vec<u8>),
}

impl ExtraEntropy {
    /// Explicit entropy copied from `bytes`
    pub fn explicit(bytes: impl AsRef<[u8]>) -> Self {
        Self::Explicit(bytes.as_ref().to_vec())
    }

    /// True when no entropy is requested
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<bool> for ExtraEntropy {
    fn from(generate: bool) -> Self {
        if generate {
            Self::Generate
        } else {
            Self::None
        }
    }
}

impl From<Vec<u8>> for ExtraEntropy {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Explicit(bytes)
    }
}

impl From<&[u8]> for ExtraEntropy {
    fn from(bytes: &[u8]) -> Self {
        Self::Explicit(bytes.to_vec())
    }
}

impl Drop for ExtraEntropy {
    fn drop(&mut self) {
        if let Self::Explicit(bytes) = self {
            bytes.zeroize();
        }
    }
}

impl fmt::Debug for ExtraEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Generate => f.write_str("Generate"),
            Self::Explicit(bytes) => write!(f, "Explicit({} bytes)[REDACTED]", bytes.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_vec_basics() {
        let mut v = SecretVec::with_capacity(4);
        assert!(v.is_empty());
        v.extend_from_slice(&[1, 2]);
        v.extend_from_slice(&[3, 4]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v, SecretVec::from_slice(&[1, 2, 3, 4]));
        assert_ne!(v, SecretVec::filled(0x01, 4));
    }

    #[test]
    fn test_debug_is_redacted() {
        let v = SecretVec::from_slice(&[0xde, 0xad]);
        assert_eq!(format!("{:?}", v), "SecretVec(2 bytes)[REDACTED]");

        let e = ExtraEntropy::explicit([0xbe, 0xef, 0x00]);
        assert_eq!(format!("{:?}", e), "Explicit(3 bytes)[REDACTED]");
    }

    #[test]
    fn test_extra_entropy_conversions() {
        assert_eq!(ExtraEntropy::from(true), ExtraEntropy::Generate);
        assert_eq!(ExtraEntropy::from(false), ExtraEntropy::None);
        assert!(ExtraEntropy::default().is_none());
        assert_eq!(
            ExtraEntropy::from(&[7u8, 8][..]),
            ExtraEntropy::Explicit(vec![7, 8])
        );
    }
}
