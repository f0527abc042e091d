//! Keyed-hash primitive consumed by the HMAC-DRBG

use crate::Result;
use alloc::vec::Vec;

/// HMAC over the concatenation of several message parts
///
/// The hash behind the MAC must be the one mandated by the signature scheme.
/// Implementations must be deterministic and always return exactly
/// [`output_size`](HmacPrimitive::output_size) bytes.
pub trait HmacPrimitive {
    /// Returns the name of this MAC, e.g. `"HMAC-SHA256"`
    fn name(&self) -> &'static str;

    /// Length of every tag produced by [`mac`](HmacPrimitive::mac)
    fn output_size(&self) -> usize;

    /// Whether the primitive can currently be invoked
    ///
    /// Providers backed by an external device may report `false`; callers
    /// treat that as a missing primitive before doing any work.
    fn is_available(&self) -> bool {
        true
    }

    /// Compute `HMAC(key, parts[0] || parts[1] || ...)`
    fn mac(&self, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>>;
}

impl<T: HmacPrimitive + ?Sized> HmacPrimitive for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn mac(&self, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
        (**self).mac(key, parts)
    }
}
