//! Inclusive-range bit masks and single-bit reads.

use num_traits::{PrimInt, Unsigned};

/// Returns an integer with bits `min(x, y)..=max(x, y)` set and every other
/// bit clear.
///
/// The endpoints may be given in either order. A full-width request returns
/// all ones directly; the implementation never forms the overshifting
/// `1 << width`.
///
/// ```
/// use emufp_bits::mask;
///
/// //                              7654 3210
/// assert_eq!(mask::<u32>(1, 3), 0b0000_1110);
/// assert_eq!(mask::<u32>(31, 0), u32::MAX);
/// ```
#[must_use]
pub fn mask<U: PrimInt + Unsigned>(x: u32, y: u32) -> U {
    let lo = x.min(y);
    let hi = x.max(y);
    let bits = U::zero().count_zeros();
    debug_assert!(hi < bits, "mask endpoint {hi} outside a {bits}-bit integer");

    let width = hi - lo + 1;
    if width < bits {
        ((U::one() << width as usize) - U::one()) << lo as usize
    } else {
        U::max_value()
    }
}

/// Returns the bit of `value` at `index`, zero-extended.
#[must_use]
pub fn bit_at<U: PrimInt + Unsigned>(value: U, index: u32) -> U {
    (value >> index as usize) & U::one()
}
