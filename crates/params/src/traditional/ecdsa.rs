//! Group orders for elliptic-curve signature schemes
//!
//! Orders are given as big-endian byte strings of exactly the scalar length
//! (SEC 2 v2 and FIPS 186-4, Appendix D).

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use dnonce_api::{GroupParameters, Result};
use dnonce_internal::bigendian::bit_len;

/// Order and size of a prime-order group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupParams {
    name: Cow<'static, str>,
    order: Cow<'static, [u8]>,
    order_bits: usize,
}

impl GroupParams {
    /// Parameters backed by static data; used for the named curves below
    pub const fn from_static(name: &'static str, order: &'static [u8], order_bits: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            order: Cow::Borrowed(order),
            order_bits,
        }
    }

    /// Caller-defined group with an explicit `qlen`
    ///
    /// `order` must already be encoded on `ceil(order_bits / 8)` bytes.
    pub fn new(name: impl Into<String>, order: impl Into<Vec<u8>>, order_bits: usize) -> Result<Self> {
        let params = Self {
            name: Cow::Owned(name.into()),
            order: Cow::Owned(order.into()),
            order_bits,
        };
        params.validate()?;
        Ok(params)
    }

    /// Caller-defined group whose `qlen` is the bit length of `order`
    ///
    /// Leading zero bytes of `order` are ignored.
    pub fn from_order(name: impl Into<String>, order: &[u8]) -> Result<Self> {
        let start = order.iter().position(|&b| b != 0).unwrap_or(order.len());
        Self::new(name, &order[start..], bit_len(order))
    }
}

impl GroupParameters for GroupParams {
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> &[u8] {
        &self.order
    }

    fn order_bits(&self) -> usize {
        self.order_bits
    }
}

/// Size of a secp256k1 scalar in bytes
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Size of a P-192 scalar in bytes
pub const P192_SCALAR_SIZE: usize = 24;

/// Size of a P-224 scalar in bytes
pub const P224_SCALAR_SIZE: usize = 28;

/// Size of a P-256 scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of a P-384 scalar in bytes
pub const P384_SCALAR_SIZE: usize = 48;

/// Size of a P-521 scalar in bytes (521 bits rounded up)
pub const P521_SCALAR_SIZE: usize = 66;

const SECP256K1_ORDER: [u8; SECP256K1_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B,
    0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

const NIST_P192_ORDER: [u8; P192_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x99, 0xDE, 0xF8, 0x36,
    0x14, 0x6B, 0xC9, 0xB1, 0xB4, 0xD2, 0x28, 0x31,
];

const NIST_P224_ORDER: [u8; P224_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x16, 0xA2,
    0xE0, 0xB8, 0xF0, 0x3E, 0x13, 0xDD, 0x29, 0x45,
    0x5C, 0x5C, 0x2A, 0x3D,
];

const NIST_P256_ORDER: [u8; P256_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84,
    0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63, 0x25, 0x51,
];

const NIST_P384_ORDER: [u8; P384_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xC7, 0x63, 0x4D, 0x81, 0xF4, 0x37, 0x2D, 0xDF,
    0x58, 0x1A, 0x0D, 0xB2, 0x48, 0xB0, 0xA7, 0x7A,
    0xEC, 0xEC, 0x19, 0x6A, 0xCC, 0xC5, 0x29, 0x73,
];

const NIST_P521_ORDER: [u8; P521_SCALAR_SIZE] = [
    0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFA, 0x51, 0x86, 0x87, 0x83, 0xBF, 0x2F,
    0x96, 0x6B, 0x7F, 0xCC, 0x01, 0x48, 0xF7, 0x09,
    0xA5, 0xD0, 0x3B, 0xB5, 0xC9, 0xB8, 0x89, 0x9C,
    0x47, 0xAE, 0xBB, 0x6F, 0xB7, 0x1E, 0x91, 0x38,
    0x64, 0x09,
];

/// secp256k1 (SEC 2, Section 2.4.1)
pub static SECP256K1: GroupParams = GroupParams::from_static("secp256k1", &SECP256K1_ORDER, 256);

/// NIST P-192 (secp192r1)
pub static NIST_P192: GroupParams = GroupParams::from_static("P-192", &NIST_P192_ORDER, 192);

/// NIST P-224 (secp224r1)
pub static NIST_P224: GroupParams = GroupParams::from_static("P-224", &NIST_P224_ORDER, 224);

/// NIST P-256 (secp256r1)
pub static NIST_P256: GroupParams = GroupParams::from_static("P-256", &NIST_P256_ORDER, 256);

/// NIST P-384 (secp384r1)
pub static NIST_P384: GroupParams = GroupParams::from_static("P-384", &NIST_P384_ORDER, 384);

/// NIST P-521 (secp521r1)
pub static NIST_P521: GroupParams = GroupParams::from_static("P-521", &NIST_P521_ORDER, 521);
