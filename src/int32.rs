//! 2-, 3- and 4-lane i32 vectors
//!
//! Arithmetic wraps on overflow, like the hardware instructions it compiles
//! to. Right shift is arithmetic (sign-extending); use the unsigned types for
//! a logical shift. `Not` on the padded types re-zeroes the padding lanes,
//! since complementing an all-zero lane would leave all ones behind.

use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use crate::backends::active as imp;
use crate::error::LaneError;
use crate::float32::{F32x2, F32x3, F32x4};
use crate::int64::I64x2;
use crate::uint32::{U32x2, U32x3, U32x4};

/// Four i32 lanes.
///
/// # Examples
///
/// ```
/// use chispa::I32x4;
///
/// let v = I32x4::new(-8, 8, 3, 0);
/// assert_eq!((v >> 1).to_array(), [-4, 4, 1, 0]);
/// assert_eq!(v.unsigned_abs().to_array(), [8, 8, 3, 0]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I32x4(pub(crate) imp::I32x4);

/// Three i32 lanes stored in a four-lane register; lane 3 is padding and is
/// zero after every operation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I32x3(pub(crate) imp::I32x4);

/// Two i32 lanes stored in a four-lane register; lanes 2 and 3 are padding.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I32x2(pub(crate) imp::I32x4);

/// Live-lane mask for 3-lane vectors.
#[inline]
fn live_mask3() -> imp::I32x4 {
    imp::I32x4::from_array([-1, -1, -1, 0])
}

/// Live-lane mask for 2-lane vectors.
#[inline]
fn live_mask2() -> imp::I32x4 {
    imp::I32x4::from_array([-1, -1, 0, 0])
}

impl I32x4 {
    /// Number of live lanes.
    pub const LANES: usize = 4;

    /// Builds a vector from individual lanes.
    #[inline]
    #[must_use]
    pub fn new(e0: i32, e1: i32, e2: i32, e3: i32) -> Self {
        Self(imp::I32x4::from_array([e0, e1, e2, e3]))
    }

    /// Builds a vector with the same value in every lane.
    #[inline]
    #[must_use]
    pub fn splat(v: i32) -> Self {
        Self(imp::I32x4::splat(v))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [i32; 4]) -> Self {
        Self(imp::I32x4::from_array(a))
    }

    /// Returns the lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [i32; 4] {
        self.0.to_array()
    }

    /// Builds a vector from the first four elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than four elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[i32]) -> Self {
        assert!(slice.len() >= 4, "slice too short: {} < 4", slice.len());
        Self::new(slice[0], slice[1], slice[2], slice[3])
    }

    /// Writes the lanes into the first four elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than four elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [i32]) {
        assert!(slice.len() >= 4, "slice too short: {} < 4", slice.len());
        slice[..4].copy_from_slice(&self.to_array());
    }

    /// Reads four contiguous elements from `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading four `i32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const i32) -> Self {
        Self::from_array(ptr.cast::<[i32; 4]>().read_unaligned())
    }

    /// Writes four contiguous elements to `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing four `i32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut i32) {
        ptr.cast::<[i32; 4]>().write_unaligned(self.to_array());
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> i32 {
        assert!(i < 4, "lane index out of range: {i} >= 4");
        self.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: i32) {
        assert!(i < 4, "lane index out of range: {i} >= 4");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::I32x4::from_array(lanes);
    }

    /// Lanewise absolute value as the unsigned type; `i32::MIN` maps to
    /// `2^31` without wrapping.
    #[inline]
    #[must_use]
    pub fn unsigned_abs(self) -> U32x4 {
        U32x4(self.0.unsigned_abs())
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

    /// `self & !other`, one instruction on both SIMD backends.
    #[inline]
    #[must_use]
    pub fn and_not(self, other: Self) -> Self {
        Self(self.0.and_not(other.0))
    }

    /// Shifts each lane left by the matching lane of `counts`.
    ///
    /// Counts must be in `0..32`; behavior outside that range follows the
    /// compiled backend.
    #[inline]
    #[must_use]
    pub fn shl_lanes(self, counts: Self) -> Self {
        Self(self.0.shl_lanes(counts.0))
    }

    /// Shifts each lane right arithmetically by the matching lane of
    /// `counts`.
    ///
    /// Counts must be in `0..32`; behavior outside that range follows the
    /// compiled backend.
    #[inline]
    #[must_use]
    pub fn shr_lanes(self, counts: Self) -> Self {
        Self(self.0.shr_lanes(counts.0))
    }

    /// Lanewise conversion to f32. Magnitudes above 2^24 round to the
    /// nearest representable value.
    #[inline]
    #[must_use]
    pub fn to_f32x4(self) -> F32x4 {
        F32x4(self.0.to_f32x4())
    }

    /// Reinterprets the lane bits as u32.
    #[inline]
    #[must_use]
    pub fn cast_unsigned(self) -> U32x4 {
        U32x4(self.0.bitcast_u32())
    }
}

impl Default for I32x4 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for I32x4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for I32x4 {}

impl fmt::Debug for I32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.to_array();
        f.debug_tuple("I32x4")
            .field(&a)
            .field(&b)
            .field(&c)
            .field(&d)
            .finish()
    }
}

impl Add for I32x4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for I32x4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for I32x4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for I32x4 {
    type Output = Self;

    /// Per-lane division; there is no hardware integer divide on either SIMD
    /// backend. `i32::MIN / -1` wraps.
    ///
    /// # Panics
    ///
    /// Panics if any divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([
            a[0].wrapping_div(b[0]),
            a[1].wrapping_div(b[1]),
            a[2].wrapping_div(b[2]),
            a[3].wrapping_div(b[3]),
        ])
    }
}

impl Rem for I32x4 {
    type Output = Self;

    /// Per-lane remainder.
    ///
    /// # Panics
    ///
    /// Panics if any divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([
            a[0].wrapping_rem(b[0]),
            a[1].wrapping_rem(b[1]),
            a[2].wrapping_rem(b[2]),
            a[3].wrapping_rem(b[3]),
        ])
    }
}

impl Neg for I32x4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl Not for I32x4 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not())
    }
}

impl BitAnd for I32x4 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for I32x4 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for I32x4 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for I32x4 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for I32x4 {
    type Output = Self;

    /// Arithmetic right shift.
    ///
    /// # Panics
    ///
    /// Panics if `n >= 32`.
    #[inline]
    fn shr(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shr(n))
    }
}

impl From<[i32; 4]> for I32x4 {
    #[inline]
    fn from(a: [i32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<I32x4> for [i32; 4] {
    #[inline]
    fn from(v: I32x4) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[i32]> for I32x4 {
    type Error = LaneError;

    fn try_from(slice: &[i32]) -> Result<Self, LaneError> {
        if slice.len() != 4 {
            return Err(LaneError::SizeMismatch {
                expected: 4,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1], slice[2], slice[3]))
    }
}

impl I32x3 {
    /// Number of live lanes.
    pub const LANES: usize = 3;

    /// Builds a vector from individual lanes. The padding lane is zero.
    #[inline]
    #[must_use]
    pub fn new(e0: i32, e1: i32, e2: i32) -> Self {
        Self(imp::I32x4::from_array([e0, e1, e2, 0]))
    }

    /// Builds a vector with the same value in every live lane.
    #[inline]
    #[must_use]
    pub fn splat(v: i32) -> Self {
        Self(imp::I32x4::from_array([v, v, v, 0]))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [i32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns the live lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [i32; 3] {
        let [a, b, c, _] = self.0.to_array();
        [a, b, c]
    }

    /// Builds a vector from the first three elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than three elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[i32]) -> Self {
        assert!(slice.len() >= 3, "slice too short: {} < 3", slice.len());
        Self::new(slice[0], slice[1], slice[2])
    }

    /// Writes the live lanes into the first three elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than three elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [i32]) {
        assert!(slice.len() >= 3, "slice too short: {} < 3", slice.len());
        slice[..3].copy_from_slice(&self.to_array());
    }

    /// Reads three contiguous elements from `ptr`; the padding lane is zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading three `i32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const i32) -> Self {
        Self::new(
            ptr.read_unaligned(),
            ptr.add(1).read_unaligned(),
            ptr.add(2).read_unaligned(),
        )
    }

    /// Writes three contiguous elements to `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing three `i32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut i32) {
        let [a, b, c] = self.to_array();
        ptr.write_unaligned(a);
        ptr.add(1).write_unaligned(b);
        ptr.add(2).write_unaligned(c);
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> i32 {
        assert!(i < 3, "lane index out of range: {i} >= 3");
        self.0.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place; the padding lane stays zero.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: i32) {
        assert!(i < 3, "lane index out of range: {i} >= 3");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::I32x4::from_array(lanes);
    }

    /// Lanewise absolute value as the unsigned type.
    #[inline]
    #[must_use]
    pub fn unsigned_abs(self) -> U32x3 {
        U32x3(self.0.unsigned_abs())
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

    /// Shifts each live lane left by the matching lane of `counts`.
    #[inline]
    #[must_use]
    pub fn shl_lanes(self, counts: Self) -> Self {
        Self(self.0.shl_lanes(counts.0))
    }

    /// Shifts each live lane right arithmetically by the matching lane of
    /// `counts`.
    #[inline]
    #[must_use]
    pub fn shr_lanes(self, counts: Self) -> Self {
        Self(self.0.shr_lanes(counts.0))
    }

    /// Lanewise conversion to f32.
    #[inline]
    #[must_use]
    pub fn to_f32x3(self) -> F32x3 {
        F32x3(self.0.to_f32x4())
    }

    /// Reinterprets the lane bits as u32.
    #[inline]
    #[must_use]
    pub fn cast_unsigned(self) -> U32x3 {
        U32x3(self.0.bitcast_u32())
    }
}

impl Default for I32x3 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for I32x3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for I32x3 {}

impl fmt::Debug for I32x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.to_array();
        f.debug_tuple("I32x3").field(&a).field(&b).field(&c).finish()
    }
}

impl Add for I32x3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for I32x3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for I32x3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for I32x3 {
    type Output = Self;

    /// Per-lane division over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([
            a[0].wrapping_div(b[0]),
            a[1].wrapping_div(b[1]),
            a[2].wrapping_div(b[2]),
        ])
    }
}

impl Rem for I32x3 {
    type Output = Self;

    /// Per-lane remainder over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([
            a[0].wrapping_rem(b[0]),
            a[1].wrapping_rem(b[1]),
            a[2].wrapping_rem(b[2]),
        ])
    }
}

impl Neg for I32x3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        // wrapping_neg(0) == 0, so the padding lane survives unchanged
        Self(self.0.neg())
    }
}

impl Not for I32x3 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not().and(live_mask3()))
    }
}

impl BitAnd for I32x3 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for I32x3 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for I32x3 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for I32x3 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for I32x3 {
    type Output = Self;
    #[inline]
    fn shr(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shr(n))
    }
}

impl From<[i32; 3]> for I32x3 {
    #[inline]
    fn from(a: [i32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<I32x3> for [i32; 3] {
    #[inline]
    fn from(v: I32x3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[i32]> for I32x3 {
    type Error = LaneError;

    fn try_from(slice: &[i32]) -> Result<Self, LaneError> {
        if slice.len() != 3 {
            return Err(LaneError::SizeMismatch {
                expected: 3,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }
}

impl I32x2 {
    /// Number of live lanes.
    pub const LANES: usize = 2;

    /// Builds a vector from individual lanes. The padding lanes are zero.
    #[inline]
    #[must_use]
    pub fn new(e0: i32, e1: i32) -> Self {
        Self(imp::I32x4::from_array([e0, e1, 0, 0]))
    }

    /// Builds a vector with the same value in every live lane.
    #[inline]
    #[must_use]
    pub fn splat(v: i32) -> Self {
        Self(imp::I32x4::from_array([v, v, 0, 0]))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [i32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Returns the live lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [i32; 2] {
        let [a, b, _, _] = self.0.to_array();
        [a, b]
    }

    /// Builds a vector from the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[i32]) -> Self {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        Self::new(slice[0], slice[1])
    }

    /// Writes the live lanes into the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [i32]) {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        slice[..2].copy_from_slice(&self.to_array());
    }

    /// Reads two contiguous elements from `ptr`; the padding lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading two `i32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const i32) -> Self {
        Self::new(ptr.read_unaligned(), ptr.add(1).read_unaligned())
    }

    /// Writes two contiguous elements to `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing two `i32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut i32) {
        let [a, b] = self.to_array();
        ptr.write_unaligned(a);
        ptr.add(1).write_unaligned(b);
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> i32 {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        self.0.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place; the padding lanes stay zero.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: i32) {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::I32x4::from_array(lanes);
    }

    /// Lanewise absolute value as the unsigned type.
    #[inline]
    #[must_use]
    pub fn unsigned_abs(self) -> U32x2 {
        U32x2(self.0.unsigned_abs())
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

    /// Shifts each live lane left by the matching lane of `counts`.
    #[inline]
    #[must_use]
    pub fn shl_lanes(self, counts: Self) -> Self {
        Self(self.0.shl_lanes(counts.0))
    }

    /// Shifts each live lane right arithmetically by the matching lane of
    /// `counts`.
    #[inline]
    #[must_use]
    pub fn shr_lanes(self, counts: Self) -> Self {
        Self(self.0.shr_lanes(counts.0))
    }

    /// Lanewise conversion to f32.
    #[inline]
    #[must_use]
    pub fn to_f32x2(self) -> F32x2 {
        F32x2(self.0.to_f32x4())
    }

    /// Sign-extends both lanes to i64.
    #[inline]
    #[must_use]
    pub fn to_i64x2(self) -> I64x2 {
        I64x2(self.0.widen_low_i64())
    }

    /// Reinterprets the lane bits as u32.
    #[inline]
    #[must_use]
    pub fn cast_unsigned(self) -> U32x2 {
        U32x2(self.0.bitcast_u32())
    }
}

impl Default for I32x2 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for I32x2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for I32x2 {}

impl fmt::Debug for I32x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.to_array();
        f.debug_tuple("I32x2").field(&a).field(&b).finish()
    }
}

impl Add for I32x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for I32x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for I32x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for I32x2 {
    type Output = Self;

    /// Per-lane division over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0].wrapping_div(b[0]), a[1].wrapping_div(b[1])])
    }
}

impl Rem for I32x2 {
    type Output = Self;

    /// Per-lane remainder over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0].wrapping_rem(b[0]), a[1].wrapping_rem(b[1])])
    }
}

impl Neg for I32x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl Not for I32x2 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not().and(live_mask2()))
    }
}

impl BitAnd for I32x2 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for I32x2 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for I32x2 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for I32x2 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for I32x2 {
    type Output = Self;
    #[inline]
    fn shr(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shr(n))
    }
}

impl From<[i32; 2]> for I32x2 {
    #[inline]
    fn from(a: [i32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<I32x2> for [i32; 2] {
    #[inline]
    fn from(v: I32x2) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[i32]> for I32x2 {
    type Error = LaneError;

    fn try_from(slice: &[i32]) -> Result<Self, LaneError> {
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
    fn wrapping_arithmetic() {
        let v = I32x4::splat(i32::MAX) + I32x4::splat(1);
        assert_eq!(v, I32x4::splat(i32::MIN));
        assert_eq!(-I32x4::splat(i32::MIN), I32x4::splat(i32::MIN));
    }

    #[test]
    fn arithmetic_shift_keeps_sign() {
        let v = I32x4::new(-8, 8, -1, 1) >> 1;
        assert_eq!(v.to_array(), [-4, 4, -1, 0]);
    }

    #[test]
    fn not_repads_padding_lanes() {
        let v = !I32x3::splat(0);
        assert_eq!(v.to_array(), [-1, -1, -1]);
        assert_eq!(v.0.to_array()[3], 0);

        let w = !I32x2::new(0, -1);
        assert_eq!(w.to_array(), [-1, 0]);
        assert_eq!(w.0.to_array()[2..], [0, 0]);
    }

    #[test]
    fn unsigned_abs_handles_min() {
        let v = I32x4::new(i32::MIN, -5, 0, 5).unsigned_abs();
        assert_eq!(v.to_array(), [1 << 31, 5, 0, 5]);
    }

    #[test]
    fn per_lane_shifts() {
        let v = I32x4::new(1, 1, -16, -16);
        let counts = I32x4::new(0, 3, 2, 0);
        assert_eq!(v.shl_lanes(counts).to_array(), [1, 8, -64, -16]);
        assert_eq!(v.shr_lanes(counts).to_array(), [1, 0, -4, -16]);
    }

    #[test]
    fn division_is_per_lane() {
        let v = I32x4::new(7, -7, 9, i32::MIN);
        let d = I32x4::new(2, 2, -3, -1);
        assert_eq!((v / d).to_array(), [3, -3, -3, i32::MIN]);
        assert_eq!((v % d).to_array(), [1, -1, 0, 0]);
    }

    #[test]
    fn and_not_masks() {
        let a = I32x4::splat(0b1111);
        let b = I32x4::splat(0b0101);
        assert_eq!(a.and_not(b), I32x4::splat(0b1010));
    }

    #[test]
    fn widen_sign_extends() {
        let v = I32x2::new(-3, 7).to_i64x2();
        assert_eq!(v.to_array(), [-3, 7]);
    }

    #[test]
    fn bitcast_preserves_bits() {
        let v = I32x4::new(-1, i32::MIN, 0, 1).cast_unsigned();
        assert_eq!(v.to_array(), [u32::MAX, 1 << 31, 0, 1]);
    }

    #[test]
    #[should_panic(expected = "shift count out of range")]
    fn shift_count_must_be_in_range() {
        let _ = I32x4::splat(1) << 32;
    }
}
