// ============================================================================
// Comparison
// Equality, ordering and hashing across fixed-point scales
// ============================================================================

use super::fixed_point::FixedPoint;
use crate::bits::{signed_shl, signed_shr, Word};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Compare `a × 2^-F` with `b × 2^-FB` exactly.
///
/// Integer parts are compared first as signed (floored) values; on a tie the
/// fractional bits are moved to the top of the word and compared unsigned,
/// which lines up the binary points of both operands without any widening.
#[inline]
fn compare_scaled<I: Word>(a: I, a_frac_bits: u32, b: I, b_frac_bits: u32) -> Ordering {
    let int_a = signed_shr(a, a_frac_bits as i32);
    let int_b = signed_shr(b, b_frac_bits as i32);

    int_a.cmp(&int_b).then_with(|| {
        let frac_a = signed_shl(a, (I::BITS - a_frac_bits) as i32).to_unsigned();
        let frac_b = signed_shl(b, (I::BITS - b_frac_bits) as i32).to_unsigned();
        frac_a.cmp(&frac_b)
    })
}

/// Equal when each side converts to the other's scale without losing bits.
impl<I: Word, const F: u32, const FB: u32> PartialEq<FixedPoint<I, FB>> for FixedPoint<I, F> {
    #[inline]
    fn eq(&self, other: &FixedPoint<I, FB>) -> bool {
        let f = Self::FRAC_BITS as i32;
        let fb = FixedPoint::<I, FB>::FRAC_BITS as i32;
        signed_shr(self.0, f - fb) == other.0 && signed_shr(other.0, fb - f) == self.0
    }
}

impl<I: Word, const F: u32> Eq for FixedPoint<I, F> {}

impl<I: Word, const F: u32, const FB: u32> PartialOrd<FixedPoint<I, FB>> for FixedPoint<I, F> {
    #[inline]
    fn partial_cmp(&self, other: &FixedPoint<I, FB>) -> Option<Ordering> {
        Some(compare_scaled(
            self.0,
            Self::FRAC_BITS,
            other.0,
            FixedPoint::<I, FB>::FRAC_BITS,
        ))
    }
}

impl<I: Word, const F: u32> Ord for FixedPoint<I, F> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare_scaled(self.0, Self::FRAC_BITS, other.0, Self::FRAC_BITS)
    }
}

impl<I: Word, const F: u32> Hash for FixedPoint<I, F> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
