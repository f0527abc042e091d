//! Group parameters a scalar is drawn from

use crate::error::{validate, Result};
use dnonce_internal::bigendian::bit_len;

/// Parameters of the prime-order group a signature scheme works in
///
/// Only the order `N` and its size matter for nonce derivation; point
/// arithmetic lives elsewhere.
pub trait GroupParameters {
    /// Human-readable name of the group, e.g. `"secp256k1"`
    fn name(&self) -> &str;

    /// Group order `N` as big-endian bytes, exactly [`scalar_len`](Self::scalar_len) long
    fn order(&self) -> &[u8];

    /// Bit length `qlen` used when turning bit strings into scalars
    fn order_bits(&self) -> usize;

    /// Scalar byte length `L = ceil(qlen / 8)`
    fn scalar_len(&self) -> usize {
        (self.order_bits() + 7) / 8
    }

    /// Check that the parameters describe a usable group
    ///
    /// `L` must be `ceil(qlen / 8)`, and the order must be non-zero, encoded
    /// on exactly `L` bytes and fit in `qlen` bits.
    fn validate(&self) -> Result<()> {
        let order = self.order();

        validate::parameter(self.order_bits() > 0, "GroupParameters", "order_bits must be non-zero")?;
        validate::parameter(
            self.scalar_len() == (self.order_bits() + 7) / 8,
            "GroupParameters",
            "scalar_len must be ceil(order_bits / 8)",
        )?;
        validate::length("GroupParameters order", order.len(), self.scalar_len())?;

        let bits = bit_len(order);
        validate::parameter(bits > 0, "GroupParameters", "group order must be non-zero")?;
        validate::parameter(
            bits <= self.order_bits(),
            "GroupParameters",
            "group order exceeds order_bits",
        )?;
        Ok(())
    }
}
