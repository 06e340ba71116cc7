//! 2-lane f64 vector

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::backends::active as imp;
use crate::error::LaneError;
use crate::float32::F32x2;
use crate::int64::I64x2;
use crate::uint64::U64x2;

/// Two f64 lanes filling one 128-bit register.
///
/// # Examples
///
/// ```
/// use chispa::F64x2;
///
/// let a = F64x2::new(1.0, -2.0);
/// let b = F64x2::splat(4.0);
/// assert_eq!((a / b).to_array(), [0.25, -0.5]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F64x2(pub(crate) imp::F64x2);

impl F64x2 {
    /// Number of live lanes.
    pub const LANES: usize = 2;

    /// Builds a vector from individual lanes.
    #[inline]
    #[must_use]
    pub fn new(e0: f64, e1: f64) -> Self {
        Self(imp::F64x2::from_array([e0, e1]))
    }

    /// Builds a vector with the same value in both lanes.
    #[inline]
    #[must_use]
    pub fn splat(v: f64) -> Self {
        Self(imp::F64x2::splat(v))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [f64; 2]) -> Self {
        Self(imp::F64x2::from_array(a))
    }

    /// Returns the lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        self.0.to_array()
    }

    /// Builds a vector from the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        Self::new(slice[0], slice[1])
    }

    /// Writes the lanes into the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [f64]) {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        slice[..2].copy_from_slice(&self.to_array());
    }

    /// Reads two contiguous elements from `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading two `f64` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const f64) -> Self {
        Self::from_array(ptr.cast::<[f64; 2]>().read_unaligned())
    }

    /// Writes two contiguous elements to `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing two `f64` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f64) {
        ptr.cast::<[f64; 2]>().write_unaligned(self.to_array());
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> f64 {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        self.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: f64) {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::F64x2::from_array(lanes);
    }

    /// Lanewise absolute value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Lanewise square root.
    #[inline]
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
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

    /// Narrows both lanes to f32; the upper lanes of the result are zero.
    #[inline]
    #[must_use]
    pub fn to_f32x2(self) -> F32x2 {
        F32x2(self.0.narrow_f32())
    }

    /// Truncating conversion toward zero, like `as i64` per lane.
    #[inline]
    #[must_use]
    pub fn to_i64x2(self) -> I64x2 {
        I64x2(self.0.to_i64x2_trunc())
    }

    /// Rounds to nearest (ties to even) and converts to unsigned lanes.
    ///
    /// On x86 without AVX-512 this uses the exponent-bias trick and is exact
    /// only for values below 2^51.
    #[inline]
    #[must_use]
    pub fn to_u64x2(self) -> U64x2 {
        U64x2(self.0.to_u64x2_round())
    }
}

impl Default for F64x2 {
    #[inline]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl PartialEq for F64x2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for F64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.to_array();
        f.debug_tuple("F64x2").field(&a).field(&b).finish()
    }
}

impl Add for F64x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for F64x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for F64x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for F64x2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.div(rhs.0))
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl From<[f64; 2]> for F64x2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<F64x2> for [f64; 2] {
    #[inline]
    fn from(v: F64x2) -> Self {
        v.to_array()
    }
}

impl From<I64x2> for F64x2 {
    /// Lanewise conversion, exact for magnitudes up to 2^53.
    #[inline]
    fn from(v: I64x2) -> Self {
        Self(imp::F64x2::from_i64x2(v.0))
    }
}

impl From<U64x2> for F64x2 {
    /// Lanewise conversion from unsigned lanes.
    ///
    /// On x86 without AVX-512 the backing sequence uses the exponent-bias
    /// trick and is exact only for values up to 2^51.
    #[inline]
    fn from(v: U64x2) -> Self {
        Self(imp::F64x2::from_u64x2(v.0))
    }
}

impl TryFrom<&[f64]> for F64x2 {
    type Error = LaneError;

    fn try_from(slice: &[f64]) -> Result<Self, LaneError> {
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
    fn arithmetic_matches_scalar() {
        let a = F64x2::new(1.5, -3.0);
        let b = F64x2::new(0.5, 2.0);
        assert_eq!((a + b).to_array(), [2.0, -1.0]);
        assert_eq!((a - b).to_array(), [1.0, -5.0]);
        assert_eq!((a * b).to_array(), [0.75, -6.0]);
        assert_eq!((a / b).to_array(), [3.0, -1.5]);
    }

    #[test]
    fn trunc_vs_round_conversions() {
        let v = F64x2::new(2.9, -2.9);
        assert_eq!(v.to_i64x2().to_array(), [2, -2]);

        let w = F64x2::new(2.5, 3.5);
        // Ties go to even before the unsigned convert.
        assert_eq!(w.to_u64x2().to_array(), [2, 4]);
    }

    #[test]
    fn narrow_zeroes_upper_lanes() {
        let v = F64x2::new(1.25, -8.0).to_f32x2();
        assert_eq!(v.to_array(), [1.25, -8.0]);
        assert_eq!(v.0.to_array()[2..], [0.0, 0.0]);
    }

    #[test]
    fn min_max_ordering() {
        let a = F64x2::new(1.0, 9.0);
        let b = F64x2::new(3.0, -4.0);
        assert_eq!(a.min(b).to_array(), [1.0, -4.0]);
        assert_eq!(a.max(b).to_array(), [3.0, 9.0]);
    }
}
