//! Arithmetic on unsigned big-endian integers stored as byte slices
//!
//! Scalars of every supported group are handled as `L`-byte big-endian
//! strings, so the few integer operations the DRBG needs are implemented
//! directly on bytes instead of pulling in an arbitrary-precision type.

use alloc::vec;
use alloc::vec::Vec;
use subtle::Choice;
use zeroize::Zeroizing;

use crate::constant_time::ct_assign;

/// Number of significant bits in `a`
///
/// Runs in variable time; only call it on public values such as a group order.
pub fn bit_len(a: &[u8]) -> usize {
    match a.iter().position(|&b| b != 0) {
        Some(i) => (a.len() - i) * 8 - a[i].leading_zeros() as usize,
        None => 0,
    }
}

/// Shift `a` right by `shift` bits, keeping its length
pub fn shr_bits(a: &[u8], shift: usize) -> Vec<u8> {
    let len = a.len();
    let byte_shift = shift / 8;
    let bit_shift = (shift % 8) as u32;
    let mut out = vec![0u8; len];

    if byte_shift >= len {
        return out;
    }

    for i in byte_shift..len {
        let src = i - byte_shift;
        let mut byte = a[src] >> bit_shift;
        if bit_shift > 0 && src > 0 {
            byte |= a[src - 1] << (8 - bit_shift);
        }
        out[i] = byte;
    }
    out
}

/// Shift `a` left by one bit, feeding `bit_in` into the low end
///
/// Returns the bit shifted out of the top.
pub fn shl1_assign(a: &mut [u8], bit_in: u8) -> u8 {
    let mut carry = bit_in & 1;
    for byte in a.iter_mut().rev() {
        let next = *byte >> 7;
        *byte = (*byte << 1) | carry;
        carry = next;
    }
    carry
}

/// In-place `a -= b` for operands of equal length
///
/// Returns the final borrow (1 when `b > a`, in which case `a` wraps).
pub fn sub_assign(a: &mut [u8], b: &[u8]) -> u8 {
    assert_eq!(a.len(), b.len());

    let mut borrow = 0u16;
    for (x, &y) in a.iter_mut().zip(b).rev() {
        let diff = (*x as u16).wrapping_sub(y as u16).wrapping_sub(borrow);
        *x = diff as u8;
        borrow = (diff >> 15) & 1;
    }
    borrow as u8
}

/// Re-encode `a` on exactly `len` bytes
///
/// Returns `None` if the value does not fit.
pub fn fit_be(a: &[u8], len: usize) -> Option<Vec<u8>> {
    if a.len() <= len {
        let mut out = vec![0u8; len];
        out[len - a.len()..].copy_from_slice(a);
        return Some(out);
    }

    let excess = a.len() - len;
    if a[..excess].iter().any(|&b| b != 0) {
        return None;
    }
    Some(a[excess..].to_vec())
}

/// RFC 6979 `bits2int`: keep the leftmost `qbits` bits of `data`
///
/// The result is encoded on `ceil(qbits / 8)` bytes.
pub fn bits2int(data: &[u8], qbits: usize) -> Vec<u8> {
    let rlen = (qbits + 7) / 8;
    let dbits = data.len() * 8;

    if dbits > qbits {
        // The shifted value is below 2^qbits, so every dropped byte is zero.
        let shifted = Zeroizing::new(shr_bits(data, dbits - qbits));
        shifted[shifted.len() - rlen..].to_vec()
    } else {
        let mut out = vec![0u8; rlen];
        out[rlen - data.len()..].copy_from_slice(data);
        out
    }
}

/// Reduce `value` modulo `modulus`
///
/// Binary long division: the remainder absorbs one bit of `value` at a time
/// and `modulus` is conditionally subtracted with a constant-time select.
/// The result has the length of `modulus`. `modulus` must be non-zero.
pub fn reduce_mod(value: &[u8], modulus: &[u8]) -> Vec<u8> {
    let n = modulus.len();

    // One spare byte: the remainder is < 2 * modulus right after a shift.
    let mut m = vec![0u8; n + 1];
    m[1..].copy_from_slice(modulus);

    let mut r = Zeroizing::new(vec![0u8; n + 1]);
    let mut diff = Zeroizing::new(vec![0u8; n + 1]);

    for &byte in value {
        for i in (0..8).rev() {
            shl1_assign(&mut r, byte >> i);
            diff.copy_from_slice(&r);
            let borrow = sub_assign(&mut diff, &m);
            ct_assign(&mut r, &diff, Choice::from(borrow ^ 1));
        }
    }

    r[1..].to_vec()
}
