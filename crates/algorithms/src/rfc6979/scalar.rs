//! Private-key inputs and derived nonces

use core::fmt;

use dnonce_api::error::validate;
use dnonce_api::{Error, GroupParameters, Result, SecretVec};
use dnonce_internal::bigendian::fit_be;
use dnonce_internal::constant_time::{ct_eq, ct_is_zero, ct_lt_be};
use num_bigint::BigUint;
use zeroize::Zeroizing;

/// A private scalar in one of the accepted encodings
///
/// Every form is normalised by [`PrivateKey::to_scalar_bytes`] into the
/// canonical `L`-byte big-endian representation before any derivation step.
#[derive(Clone, Copy)]
pub enum PrivateKey<'a> {
    /// Big-endian bytes, exactly `L` long
    Bytes(&'a [u8]),
    /// An already-parsed integer
    Integer(&'a BigUint),
    /// Big-endian hex, exactly `2L` digits, optionally prefixed with `0x`
    Hex(&'a str),
}

impl<'a> PrivateKey<'a> {
    /// Validate the key against `group` and return `int2octets(x)`
    ///
    /// Fails with `InvalidPrivateKey` unless the key parses and `0 < x < N`.
    pub fn to_scalar_bytes(&self, group: &dyn GroupParameters) -> Result<SecretVec> {
        const CONTEXT: &str = "PrivateKey";
        let len = group.scalar_len();

        let x = match *self {
            PrivateKey::Bytes(bytes) => {
                validate::private_key(
                    bytes.len() == len,
                    CONTEXT,
                    "private key bytes must be exactly the scalar length",
                )?;
                SecretVec::from_slice(bytes)
            }
            PrivateKey::Integer(value) => {
                let raw = Zeroizing::new(value.to_bytes_be());
                let fitted = fit_be(&raw, len)
                    .ok_or_else(|| Error::invalid_key(CONTEXT, "private key is not below the group order"))?;
                SecretVec::new(fitted)
            }
            PrivateKey::Hex(text) => {
                let digits = text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                    .unwrap_or(text);
                validate::private_key(
                    digits.len() == 2 * len,
                    CONTEXT,
                    "hex private key must have exactly two digits per scalar byte",
                )?;
                let mut x = SecretVec::filled(0, len);
                hex::decode_to_slice(digits, x.as_mut_slice())
                    .map_err(|_| Error::invalid_key(CONTEXT, "private key is not valid hex"))?;
                x
            }
        };

        let in_range = !ct_is_zero(x.as_slice()) & ct_lt_be(x.as_slice(), group.order());
        validate::private_key(
            bool::from(in_range),
            CONTEXT,
            "private key must satisfy 0 < x < N",
        )?;
        Ok(x)
    }
}

impl<'a> From<&'a [u8]> for PrivateKey<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        PrivateKey::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for PrivateKey<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        PrivateKey::Bytes(bytes)
    }
}

impl<'a> From<&'a SecretVec> for PrivateKey<'a> {
    fn from(bytes: &'a SecretVec) -> Self {
        PrivateKey::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a BigUint> for PrivateKey<'a> {
    fn from(value: &'a BigUint) -> Self {
        PrivateKey::Integer(value)
    }
}

impl<'a> From<&'a str> for PrivateKey<'a> {
    fn from(text: &'a str) -> Self {
        PrivateKey::Hex(text)
    }
}

impl fmt::Debug for PrivateKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = match self {
            PrivateKey::Bytes(_) => "Bytes",
            PrivateKey::Integer(_) => "Integer",
            PrivateKey::Hex(_) => "Hex",
        };
        write!(f, "PrivateKey::{}([REDACTED])", form)
    }
}

/// A derived nonce `k` with `0 < k < N`, as `L` big-endian bytes
///
/// The bytes are zeroized on drop.
#[derive(Clone)]
pub struct Nonce(SecretVec);

impl Nonce {
    pub(crate) fn new(bytes: SecretVec) -> Self {
        Self(bytes)
    }

    /// Big-endian encoding of the nonce, `L` bytes long
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length of the encoding in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a successfully derived nonce
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The nonce as an integer
    ///
    /// The returned value is not zeroized on drop.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(self.0.as_slice())
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Nonce {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for Nonce {}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({} bytes)[REDACTED]", self.len())
    }
}
