//! 2-lane u64 vector

use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

use crate::backends::active as imp;
use crate::error::LaneError;
use crate::float64::F64x2;
use crate::int64::I64x2;
use crate::uint32::U32x2;

/// Two u64 lanes filling one 128-bit register.
///
/// # Examples
///
/// ```
/// use chispa::U64x2;
///
/// let v = U64x2::new(u64::MAX, 2);
/// // Logical shift: the high bit does not smear.
/// assert_eq!((v >> 1).to_array(), [u64::MAX >> 1, 1]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U64x2(pub(crate) imp::U64x2);

impl U64x2 {
    /// Number of live lanes.
    pub const LANES: usize = 2;

    /// Builds a vector from individual lanes.
    #[inline]
    #[must_use]
    pub fn new(e0: u64, e1: u64) -> Self {
        Self(imp::U64x2::from_array([e0, e1]))
    }

    /// Builds a vector with the same value in both lanes.
    #[inline]
    #[must_use]
    pub fn splat(v: u64) -> Self {
        Self(imp::U64x2::splat(v))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [u64; 2]) -> Self {
        Self(imp::U64x2::from_array(a))
    }

    /// Returns the lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [u64; 2] {
        self.0.to_array()
    }

    /// Builds a vector from the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[u64]) -> Self {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        Self::new(slice[0], slice[1])
    }

    /// Writes the lanes into the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [u64]) {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        slice[..2].copy_from_slice(&self.to_array());
    }

    /// Reads two contiguous elements from `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading two `u64` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const u64) -> Self {
        Self::from_array(ptr.cast::<[u64; 2]>().read_unaligned())
    }

    /// Writes two contiguous elements to `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing two `u64` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut u64) {
        ptr.cast::<[u64; 2]>().write_unaligned(self.to_array());
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> u64 {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        self.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: u64) {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::U64x2::from_array(lanes);
    }

    /// Lanewise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Lanewise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// `self & !other`.
    #[inline]
    #[must_use]
    pub fn and_not(self, other: Self) -> Self {
        Self(self.0.and_not(other.0))
    }

    /// Shifts each lane left by the matching lane of `counts`.
    #[inline]
    #[must_use]
    pub fn shl_lanes(self, counts: Self) -> Self {
        Self(self.0.shl_lanes(counts.0))
    }

    /// Shifts each lane right logically by the matching lane of `counts`.
    #[inline]
    #[must_use]
    pub fn shr_lanes(self, counts: Self) -> Self {
        Self(self.0.shr_lanes(counts.0))
    }

    /// Lanewise conversion to f64.
    ///
    /// On x86 without AVX-512 this uses the exponent-bias trick and is exact
    /// only for values up to 2^51; NEON and the portable backend convert the
    /// full range.
    #[inline]
    #[must_use]
    pub fn to_f64x2(self) -> F64x2 {
        F64x2(self.0.to_f64x2())
    }

    /// Narrows both lanes to u32 by truncating the high bits; the padding
    /// lanes of the result are zero.
    #[inline]
    #[must_use]
    pub fn to_u32x2(self) -> U32x2 {
        U32x2(self.0.narrow_u32())
    }

    /// Reinterprets the lane bits as i64.
    #[inline]
    #[must_use]
    pub fn cast_signed(self) -> I64x2 {
        I64x2(self.0.bitcast_i64())
    }
}

impl Default for U64x2 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for U64x2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for U64x2 {}

impl fmt::Debug for U64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.to_array();
        f.debug_tuple("U64x2").field(&a).field(&b).finish()
    }
}

impl Add for U64x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for U64x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for U64x2 {
    type Output = Self;

    /// Per-lane wrapping multiply; neither SIMD backend has a 64-bit
    /// multiply instruction.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])])
    }
}

impl Div for U64x2 {
    type Output = Self;

    /// Per-lane division.
    ///
    /// # Panics
    ///
    /// Panics if any divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] / b[0], a[1] / b[1]])
    }
}

impl Rem for U64x2 {
    type Output = Self;

    /// Per-lane remainder.
    ///
    /// # Panics
    ///
    /// Panics if any divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] % b[0], a[1] % b[1]])
    }
}

impl Not for U64x2 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not())
    }
}

impl BitAnd for U64x2 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for U64x2 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for U64x2 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for U64x2 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 64, "shift count out of range: {n} >= 64");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for U64x2 {
    type Output = Self;

    /// Logical right shift.
    ///
    /// # Panics
    ///
    /// Panics if `n >= 64`.
    #[inline]
    fn shr(self, n: u32) -> Self {
        assert!(n < 64, "shift count out of range: {n} >= 64");
        Self(self.0.shr(n))
    }
}

impl From<[u64; 2]> for U64x2 {
    #[inline]
    fn from(a: [u64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<U64x2> for [u64; 2] {
    #[inline]
    fn from(v: U64x2) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[u64]> for U64x2 {
    type Error = LaneError;

    fn try_from(slice: &[u64]) -> Result<Self, LaneError> {
        if slice.len() != 2 {
            return Err(LaneError::SizeMismatch {
                expected: 2,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_right_shift() {
        let v = U64x2::new(u64::MAX, 2) >> 1;
        assert_eq!(v.to_array(), [u64::MAX >> 1, 1]);
    }

    #[test]
    fn unsigned_min_max_above_sign_bit() {
        let a = U64x2::new(u64::MAX, 1);
        let b = U64x2::new(1, 1 << 63);
        assert_eq!(a.min(b).to_array(), [1, 1]);
        assert_eq!(a.max(b).to_array(), [u64::MAX, 1 << 63]);
    }

    #[test]
    fn wrapping_behavior() {
        assert_eq!(U64x2::splat(0) - U64x2::splat(1), U64x2::splat(u64::MAX));
        assert_eq!(
            U64x2::splat(1 << 63) * U64x2::splat(2),
            U64x2::splat(0)
        );
    }

    #[test]
    fn f64_round_trip_in_exact_range() {
        let v = U64x2::new(0, (1 << 50) + 3);
        assert_eq!(v.to_f64x2().to_u64x2(), v);
    }

    #[test]
    fn narrow_truncates_high_bits() {
        let v = U64x2::new(0x1_0000_0007, u64::MAX).to_u32x2();
        assert_eq!(v.to_array(), [7, u32::MAX]);
    }

    #[test]
    fn bitcast_round_trip() {
        let v = U64x2::new(u64::MAX, 1 << 63);
        assert_eq!(v.cast_signed().cast_unsigned(), v);
    }
}
