//! 2-, 3- and 4-lane u32 vectors
//!
//! Same layout rules as the signed family; right shift is logical here.

use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

use crate::backends::active as imp;
use crate::error::LaneError;
use crate::float32::{F32x2, F32x3, F32x4};
use crate::int32::{I32x2, I32x3, I32x4};
use crate::uint64::U64x2;

/// Four u32 lanes.
///
/// # Examples
///
/// ```
/// use chispa::U32x4;
///
/// let v = U32x4::new(0x8000_0000, 8, 3, 0);
/// // Logical shift: the high bit does not smear.
/// assert_eq!((v >> 1).to_array(), [0x4000_0000, 4, 1, 0]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U32x4(pub(crate) imp::U32x4);

/// Three u32 lanes stored in a four-lane register; lane 3 is padding.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U32x3(pub(crate) imp::U32x4);

/// Two u32 lanes stored in a four-lane register; lanes 2 and 3 are padding.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U32x2(pub(crate) imp::U32x4);

#[inline]
fn live_mask3() -> imp::U32x4 {
    imp::U32x4::from_array([u32::MAX, u32::MAX, u32::MAX, 0])
}

#[inline]
fn live_mask2() -> imp::U32x4 {
    imp::U32x4::from_array([u32::MAX, u32::MAX, 0, 0])
}

impl U32x4 {
    /// Number of live lanes.
    pub const LANES: usize = 4;

    /// Builds a vector from individual lanes.
    #[inline]
    #[must_use]
    pub fn new(e0: u32, e1: u32, e2: u32, e3: u32) -> Self {
        Self(imp::U32x4::from_array([e0, e1, e2, e3]))
    }

    /// Builds a vector with the same value in every lane.
    #[inline]
    #[must_use]
    pub fn splat(v: u32) -> Self {
        Self(imp::U32x4::splat(v))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [u32; 4]) -> Self {
        Self(imp::U32x4::from_array(a))
    }

    /// Returns the lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [u32; 4] {
        self.0.to_array()
    }

    /// Builds a vector from the first four elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than four elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[u32]) -> Self {
        assert!(slice.len() >= 4, "slice too short: {} < 4", slice.len());
        Self::new(slice[0], slice[1], slice[2], slice[3])
    }

    /// Writes the lanes into the first four elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than four elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [u32]) {
        assert!(slice.len() >= 4, "slice too short: {} < 4", slice.len());
        slice[..4].copy_from_slice(&self.to_array());
    }

    /// Reads four contiguous elements from `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading four `u32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const u32) -> Self {
        Self::from_array(ptr.cast::<[u32; 4]>().read_unaligned())
    }

    /// Writes four contiguous elements to `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing four `u32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut u32) {
        ptr.cast::<[u32; 4]>().write_unaligned(self.to_array());
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> u32 {
        assert!(i < 4, "lane index out of range: {i} >= 4");
        self.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: u32) {
        assert!(i < 4, "lane index out of range: {i} >= 4");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::U32x4::from_array(lanes);
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

    /// Lanewise conversion to f32. Magnitudes above 2^24 round to the
    /// nearest representable value.
    #[inline]
    #[must_use]
    pub fn to_f32x4(self) -> F32x4 {
        F32x4(self.0.to_f32x4())
    }

    /// Reinterprets the lane bits as i32.
    #[inline]
    #[must_use]
    pub fn cast_signed(self) -> I32x4 {
        I32x4(self.0.bitcast_i32())
    }
}

impl Default for U32x4 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for U32x4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for U32x4 {}

impl fmt::Debug for U32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.to_array();
        f.debug_tuple("U32x4")
            .field(&a)
            .field(&b)
            .field(&c)
            .field(&d)
            .finish()
    }
}

impl Add for U32x4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for U32x4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for U32x4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for U32x4 {
    type Output = Self;

    /// Per-lane division.
    ///
    /// # Panics
    ///
    /// Panics if any divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] / b[0], a[1] / b[1], a[2] / b[2], a[3] / b[3]])
    }
}

impl Rem for U32x4 {
    type Output = Self;

    /// Per-lane remainder.
    ///
    /// # Panics
    ///
    /// Panics if any divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] % b[0], a[1] % b[1], a[2] % b[2], a[3] % b[3]])
    }
}

impl Not for U32x4 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not())
    }
}

impl BitAnd for U32x4 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for U32x4 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for U32x4 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for U32x4 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for U32x4 {
    type Output = Self;

    /// Logical right shift.
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

impl From<[u32; 4]> for U32x4 {
    #[inline]
    fn from(a: [u32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<U32x4> for [u32; 4] {
    #[inline]
    fn from(v: U32x4) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[u32]> for U32x4 {
    type Error = LaneError;

    fn try_from(slice: &[u32]) -> Result<Self, LaneError> {
        if slice.len() != 4 {
            return Err(LaneError::SizeMismatch {
                expected: 4,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1], slice[2], slice[3]))
    }
}

impl U32x3 {
    /// Number of live lanes.
    pub const LANES: usize = 3;

    /// Builds a vector from individual lanes. The padding lane is zero.
    #[inline]
    #[must_use]
    pub fn new(e0: u32, e1: u32, e2: u32) -> Self {
        Self(imp::U32x4::from_array([e0, e1, e2, 0]))
    }

    /// Builds a vector with the same value in every live lane.
    #[inline]
    #[must_use]
    pub fn splat(v: u32) -> Self {
        Self(imp::U32x4::from_array([v, v, v, 0]))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [u32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns the live lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [u32; 3] {
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
    pub fn from_slice(slice: &[u32]) -> Self {
        assert!(slice.len() >= 3, "slice too short: {} < 3", slice.len());
        Self::new(slice[0], slice[1], slice[2])
    }

    /// Writes the live lanes into the first three elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than three elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [u32]) {
        assert!(slice.len() >= 3, "slice too short: {} < 3", slice.len());
        slice[..3].copy_from_slice(&self.to_array());
    }

    /// Reads three contiguous elements from `ptr`; the padding lane is zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading three `u32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const u32) -> Self {
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
    /// `ptr` must be valid for writing three `u32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut u32) {
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
    pub fn extract(self, i: usize) -> u32 {
        assert!(i < 3, "lane index out of range: {i} >= 3");
        self.0.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place; the padding lane stays zero.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: u32) {
        assert!(i < 3, "lane index out of range: {i} >= 3");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::U32x4::from_array(lanes);
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

    /// Shifts each live lane right logically by the matching lane of
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

    /// Reinterprets the lane bits as i32.
    #[inline]
    #[must_use]
    pub fn cast_signed(self) -> I32x3 {
        I32x3(self.0.bitcast_i32())
    }
}

impl Default for U32x3 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for U32x3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for U32x3 {}

impl fmt::Debug for U32x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.to_array();
        f.debug_tuple("U32x3").field(&a).field(&b).field(&c).finish()
    }
}

impl Add for U32x3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for U32x3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for U32x3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for U32x3 {
    type Output = Self;

    /// Per-lane division over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] / b[0], a[1] / b[1], a[2] / b[2]])
    }
}

impl Rem for U32x3 {
    type Output = Self;

    /// Per-lane remainder over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] % b[0], a[1] % b[1], a[2] % b[2]])
    }
}

impl Not for U32x3 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not().and(live_mask3()))
    }
}

impl BitAnd for U32x3 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for U32x3 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for U32x3 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for U32x3 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for U32x3 {
    type Output = Self;
    #[inline]
    fn shr(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shr(n))
    }
}

impl From<[u32; 3]> for U32x3 {
    #[inline]
    fn from(a: [u32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<U32x3> for [u32; 3] {
    #[inline]
    fn from(v: U32x3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[u32]> for U32x3 {
    type Error = LaneError;

    fn try_from(slice: &[u32]) -> Result<Self, LaneError> {
        if slice.len() != 3 {
            return Err(LaneError::SizeMismatch {
                expected: 3,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }
}

impl U32x2 {
    /// Number of live lanes.
    pub const LANES: usize = 2;

    /// Builds a vector from individual lanes. The padding lanes are zero.
    #[inline]
    #[must_use]
    pub fn new(e0: u32, e1: u32) -> Self {
        Self(imp::U32x4::from_array([e0, e1, 0, 0]))
    }

    /// Builds a vector with the same value in every live lane.
    #[inline]
    #[must_use]
    pub fn splat(v: u32) -> Self {
        Self(imp::U32x4::from_array([v, v, 0, 0]))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [u32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Returns the live lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [u32; 2] {
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
    pub fn from_slice(slice: &[u32]) -> Self {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        Self::new(slice[0], slice[1])
    }

    /// Writes the live lanes into the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [u32]) {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        slice[..2].copy_from_slice(&self.to_array());
    }

    /// Reads two contiguous elements from `ptr`; the padding lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading two `u32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const u32) -> Self {
        Self::new(ptr.read_unaligned(), ptr.add(1).read_unaligned())
    }

    /// Writes two contiguous elements to `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing two `u32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut u32) {
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
    pub fn extract(self, i: usize) -> u32 {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        self.0.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place; the padding lanes stay zero.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: u32) {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::U32x4::from_array(lanes);
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

    /// Shifts each live lane right logically by the matching lane of
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

    /// Zero-extends both lanes to u64.
    #[inline]
    #[must_use]
    pub fn to_u64x2(self) -> U64x2 {
        U64x2(self.0.widen_low_u64())
    }

    /// Reinterprets the lane bits as i32.
    #[inline]
    #[must_use]
    pub fn cast_signed(self) -> I32x2 {
        I32x2(self.0.bitcast_i32())
    }
}

impl Default for U32x2 {
    #[inline]
    fn default() -> Self {
        Self::splat(0)
    }
}

impl PartialEq for U32x2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for U32x2 {}

impl fmt::Debug for U32x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.to_array();
        f.debug_tuple("U32x2").field(&a).field(&b).finish()
    }
}

impl Add for U32x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for U32x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for U32x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for U32x2 {
    type Output = Self;

    /// Per-lane division over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] / b[0], a[1] / b[1]])
    }
}

impl Rem for U32x2 {
    type Output = Self;

    /// Per-lane remainder over the live lanes.
    ///
    /// # Panics
    ///
    /// Panics if any live divisor lane is zero.
    fn rem(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array([a[0] % b[0], a[1] % b[1]])
    }
}

impl Not for U32x2 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(self.0.not().and(live_mask2()))
    }
}

impl BitAnd for U32x2 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.and(rhs.0))
    }
}

impl BitOr for U32x2 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.or(rhs.0))
    }
}

impl BitXor for U32x2 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.xor(rhs.0))
    }
}

impl Shl<u32> for U32x2 {
    type Output = Self;
    #[inline]
    fn shl(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shl(n))
    }
}

impl Shr<u32> for U32x2 {
    type Output = Self;
    #[inline]
    fn shr(self, n: u32) -> Self {
        assert!(n < 32, "shift count out of range: {n} >= 32");
        Self(self.0.shr(n))
    }
}

impl From<[u32; 2]> for U32x2 {
    #[inline]
    fn from(a: [u32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<U32x2> for [u32; 2] {
    #[inline]
    fn from(v: U32x2) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[u32]> for U32x2 {
    type Error = LaneError;

    fn try_from(slice: &[u32]) -> Result<Self, LaneError> {
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
        let v = U32x4::new(u32::MAX, 0x8000_0000, 2, 0) >> 1;
        assert_eq!(v.to_array(), [0x7FFF_FFFF, 0x4000_0000, 1, 0]);
    }

    #[test]
    fn wrapping_sub_below_zero() {
        let v = U32x4::splat(0) - U32x4::splat(1);
        assert_eq!(v, U32x4::splat(u32::MAX));
    }

    #[test]
    fn unsigned_min_max_above_sign_bit() {
        let a = U32x4::new(0xFFFF_FFFF, 1, 0x8000_0000, 7);
        let b = U32x4::new(1, 0xFFFF_FFFF, 0x7FFF_FFFF, 7);
        assert_eq!(a.min(b).to_array(), [1, 1, 0x7FFF_FFFF, 7]);
        assert_eq!(a.max(b).to_array(), [0xFFFF_FFFF, 0xFFFF_FFFF, 0x8000_0000, 7]);
    }

    #[test]
    fn not_repads_padding_lanes() {
        let v = !U32x3::splat(0);
        assert_eq!(v.to_array(), [u32::MAX; 3]);
        assert_eq!(v.0.to_array()[3], 0);
    }

    #[test]
    fn large_u32_to_f32() {
        // Above i32::MAX, exercises the unsigned convert path.
        let v = U32x4::splat(3_000_000_000).to_f32x4();
        assert_eq!(v.to_array(), [3_000_000_000.0f32; 4]);
    }

    #[test]
    fn widen_zero_extends() {
        let v = U32x2::new(u32::MAX, 1).to_u64x2();
        assert_eq!(v.to_array(), [u64::from(u32::MAX), 1]);
    }

    #[test]
    fn round_trip_bitcast() {
        let v = U32x4::new(u32::MAX, 0x8000_0000, 0, 1);
        assert_eq!(v.cast_signed().cast_unsigned(), v);
    }
}
