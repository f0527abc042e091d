//! HMAC (Hash-based Message Authentication Code) over the SHA-2 family
//!
//! • RFC 2104 / FIPS 198-1 compliant, delegating to the RustCrypto `hmac` crate
//! • Message parts are streamed into one MAC instance, never concatenated
//! • Every tag has exactly the digest length of the underlying hash

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use ::hmac::digest::core_api::BlockSizeUser;
use ::hmac::digest::Digest;
use ::hmac::{Mac, SimpleHmac};
use dnonce_api::{Error, HmacPrimitive, Result};
use dnonce_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// A hash function HMAC can be instantiated with
pub trait HmacHash: Digest + BlockSizeUser {
    /// Name of the resulting MAC, e.g. `"HMAC-SHA256"`
    const MAC_NAME: &'static str;

    /// Digest length in bytes
    const OUTPUT_SIZE: usize;
}

impl HmacHash for Sha224 {
    const MAC_NAME: &'static str = "HMAC-SHA224";
    const OUTPUT_SIZE: usize = SHA224_OUTPUT_SIZE;
}

impl HmacHash for Sha256 {
    const MAC_NAME: &'static str = "HMAC-SHA256";
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
}

impl HmacHash for Sha384 {
    const MAC_NAME: &'static str = "HMAC-SHA384";
    const OUTPUT_SIZE: usize = SHA384_OUTPUT_SIZE;
}

impl HmacHash for Sha512 {
    const MAC_NAME: &'static str = "HMAC-SHA512";
    const OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;
}

/// Stateless HMAC primitive for the hash `H`
///
/// Each call to [`HmacPrimitive::mac`] keys a fresh instance, so one value
/// can be shared freely between concurrent derivations.
pub struct Hmac<H> {
    _hash: PhantomData<fn() -> H>,
}

/// HMAC-SHA224
pub type HmacSha224 = Hmac<Sha224>;
/// HMAC-SHA256
pub type HmacSha256 = Hmac<Sha256>;
/// HMAC-SHA384
pub type HmacSha384 = Hmac<Sha384>;
/// HMAC-SHA512
pub type HmacSha512 = Hmac<Sha512>;

impl<H: HmacHash> Hmac<H> {
    /// Create the primitive
    pub const fn new() -> Self {
        Self { _hash: PhantomData }
    }
}

impl<H: HmacHash> Default for Hmac<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HmacHash> Clone for Hmac<H> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<H: HmacHash> Copy for Hmac<H> {}

impl<H: HmacHash> fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(H::MAC_NAME)
    }
}

impl<H: HmacHash> HmacPrimitive for Hmac<H> {
    fn name(&self) -> &'static str {
        H::MAC_NAME
    }

    fn output_size(&self) -> usize {
        H::OUTPUT_SIZE
    }

    fn mac(&self, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        // HMAC accepts keys of any length; the error arm is unreachable in practice
        let mut mac = <SimpleHmac<H> as Mac>::new_from_slice(key).map_err(|_| Error::InvalidLength {
            context: H::MAC_NAME,
            expected: H::OUTPUT_SIZE,
            actual: key.len(),
        })?;

        for part in parts {
            mac.update(part);
        }

        Ok(mac.finalize().into_bytes().to_vec())
    }
}
