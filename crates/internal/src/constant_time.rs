//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `condition` is set, otherwise leaves `dst` unchanged.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: Choice) {
    assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src) {
        *d = u8::conditional_select(d, s, condition);
    }
}

/// Returns a set `Choice` if every byte of `a` is zero
pub fn ct_is_zero(a: &[u8]) -> Choice {
    let acc = a.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8)
}

/// Constant-time `a < b` for two big-endian integers of equal length
///
/// Walks every byte pair once, latching the first position where the
/// operands differ.
pub fn ct_lt_be(a: &[u8], b: &[u8]) -> Choice {
    assert_eq!(a.len(), b.len());

    let mut gt = 0u8; // set once a > b at the most significant differing byte
    let mut lt = 0u8; // set once a < b at the most significant differing byte

    for (&x, &y) in a.iter().zip(b) {
        gt |= ((x > y) as u8) & (!lt & 1);
        lt |= ((x < y) as u8) & (!gt & 1);
    }

    Choice::from(lt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
    }

    #[test]
    fn test_ct_lt_be() {
        assert!(bool::from(ct_lt_be(&[0x00, 0xFF], &[0x01, 0x00])));
        assert!(!bool::from(ct_lt_be(&[0x01, 0x00], &[0x00, 0xFF])));
        assert!(!bool::from(ct_lt_be(&[0x12, 0x34], &[0x12, 0x34])));
        assert!(bool::from(ct_lt_be(&[0x12, 0x33], &[0x12, 0x34])));
    }

    #[test]
    fn test_ct_is_zero_and_assign() {
        assert!(bool::from(ct_is_zero(&[0, 0, 0])));
        assert!(!bool::from(ct_is_zero(&[0, 0, 1])));

        let mut dst = [1u8, 2, 3];
        ct_assign(&mut dst, &[4, 5, 6], Choice::from(0));
        assert_eq!(dst, [1, 2, 3]);
        ct_assign(&mut dst, &[4, 5, 6], Choice::from(1));
        assert_eq!(dst, [4, 5, 6]);
    }
}
