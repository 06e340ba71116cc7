//! 2-, 3- and 4-lane f32 vectors
//!
//! All three types occupy one full 128-bit register; [`F32x2`] and [`F32x3`]
//! carry padding lanes that every constructor zeroes. Division substitutes
//! 1.0 into the divisor's padding lanes first so the discarded lanes cannot
//! produce NaN or a floating-point exception; that substitution lives here,
//! once, rather than in each backend.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::backends::active as imp;
use crate::error::LaneError;
use crate::float64::F64x2;
use crate::int32::{I32x2, I32x3, I32x4};
use crate::uint32::{U32x2, U32x3, U32x4};

/// Four f32 lanes.
///
/// # Examples
///
/// ```
/// use chispa::F32x4;
///
/// let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
/// let b = F32x4::splat(0.5);
/// assert_eq!((a * b).to_array(), [0.5, 1.0, 1.5, 2.0]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(pub(crate) imp::F32x4);

/// Three f32 lanes stored in a four-lane register.
///
/// The fourth lane is padding: it is zero after every constructor and no
/// operation lets it leak into results. Division replaces the padding
/// divisor with 1.0 before the hardware divide, so `0.0 / 0.0` never happens
/// in the discarded lane.
///
/// # Examples
///
/// ```
/// use chispa::F32x3;
///
/// let v = F32x3::new(1.0, 2.0, 3.0) / F32x3::splat(2.0);
/// assert_eq!(v.to_array(), [0.5, 1.0, 1.5]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x3(pub(crate) imp::F32x4);

/// Two f32 lanes stored in a four-lane register; lanes 2 and 3 are padding.
///
/// # Examples
///
/// ```
/// use chispa::F32x2;
///
/// let v = F32x2::new(3.0, 4.0);
/// assert_eq!((v * v).to_array(), [9.0, 16.0]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x2(pub(crate) imp::F32x4);

/// Divisor with 1.0 in the padding lane of a 3-lane vector.
///
/// Relies on the padding lane being zero: OR-ing the bits of 1.0 into a zero
/// lane produces exactly 1.0 and leaves the live lanes untouched.
#[inline]
fn pad_divisor3(v: imp::F32x4) -> imp::F32x4 {
    v.or(imp::F32x4::from_array([0.0, 0.0, 0.0, 1.0]))
}

/// Divisor with 1.0 in both padding lanes of a 2-lane vector.
#[inline]
fn pad_divisor2(v: imp::F32x4) -> imp::F32x4 {
    v.or(imp::F32x4::from_array([0.0, 0.0, 1.0, 1.0]))
}

impl F32x4 {
    /// Number of live lanes.
    pub const LANES: usize = 4;

    /// Builds a vector from individual lanes.
    #[inline]
    #[must_use]
    pub fn new(e0: f32, e1: f32, e2: f32, e3: f32) -> Self {
        Self(imp::F32x4::from_array([e0, e1, e2, e3]))
    }

    /// Builds a vector with the same value in every lane.
    #[inline]
    #[must_use]
    pub fn splat(v: f32) -> Self {
        Self(imp::F32x4::splat(v))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(imp::F32x4::from_array(a))
    }

    /// Returns the lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Builds a vector from the first four elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than four elements.
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= 4, "slice too short: {} < 4", slice.len());
        Self::new(slice[0], slice[1], slice[2], slice[3])
    }

    /// Writes the lanes into the first four elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than four elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= 4, "slice too short: {} < 4", slice.len());
        slice[..4].copy_from_slice(&self.to_array());
    }

    /// Reads four contiguous elements from `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading four `f32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const f32) -> Self {
        Self::from_array(ptr.cast::<[f32; 4]>().read_unaligned())
    }

    /// Writes four contiguous elements to `ptr` without an alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing four `f32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
        ptr.cast::<[f32; 4]>().write_unaligned(self.to_array());
    }

    /// Returns lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub fn extract(self, i: usize) -> f32 {
        assert!(i < 4, "lane index out of range: {i} >= 4");
        self.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: f32) {
        assert!(i < 4, "lane index out of range: {i} >= 4");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::F32x4::from_array(lanes);
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

    /// Lanewise minimum. NaN handling follows the native instruction of the
    /// compiled backend.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Lanewise maximum. NaN handling follows the native instruction of the
    /// compiled backend.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Truncating conversion toward zero, like `as i32` per lane.
    ///
    /// ```
    /// use chispa::F32x4;
    ///
    /// let v = F32x4::new(1.9, -1.9, 0.1, 2.5);
    /// assert_eq!(v.to_i32x4().to_array(), [1, -1, 0, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_i32x4(self) -> I32x4 {
        I32x4(self.0.to_i32x4_trunc())
    }

    /// Rounds to nearest (ties to even) and converts to unsigned lanes.
    ///
    /// On x86 this is exact for values in `[0, 2^31)`; the conversion goes
    /// through the signed convert instruction.
    ///
    /// ```
    /// use chispa::F32x4;
    ///
    /// let v = F32x4::new(0.5, 1.5, 2.4, 2.6);
    /// assert_eq!(v.to_u32x4().to_array(), [0, 2, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_u32x4(self) -> U32x4 {
        U32x4(self.0.to_u32x4_round())
    }
}

impl Default for F32x4 {
    #[inline]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl PartialEq for F32x4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.to_array();
        f.debug_tuple("F32x4")
            .field(&a)
            .field(&b)
            .field(&c)
            .field(&d)
            .finish()
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for F32x4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.div(rhs.0))
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl From<[f32; 4]> for F32x4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<F32x4> for [f32; 4] {
    #[inline]
    fn from(v: F32x4) -> Self {
        v.to_array()
    }
}

impl From<I32x4> for F32x4 {
    /// Lanewise conversion; magnitudes above 2^24 round to the nearest
    /// representable value.
    #[inline]
    fn from(v: I32x4) -> Self {
        Self(imp::F32x4::from_i32x4(v.0))
    }
}

impl From<U32x4> for F32x4 {
    /// Lanewise conversion from unsigned lanes.
    #[inline]
    fn from(v: U32x4) -> Self {
        Self(imp::F32x4::from_u32x4(v.0))
    }
}

impl TryFrom<&[f32]> for F32x4 {
    type Error = LaneError;

    fn try_from(slice: &[f32]) -> Result<Self, LaneError> {
        if slice.len() != 4 {
            return Err(LaneError::SizeMismatch {
                expected: 4,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1], slice[2], slice[3]))
    }
}

impl F32x3 {
    /// Number of live lanes.
    pub const LANES: usize = 3;

    /// Builds a vector from individual lanes. The padding lane is zero.
    #[inline]
    #[must_use]
    pub fn new(e0: f32, e1: f32, e2: f32) -> Self {
        Self(imp::F32x4::from_array([e0, e1, e2, 0.0]))
    }

    /// Builds a vector with the same value in every live lane.
    #[inline]
    #[must_use]
    pub fn splat(v: f32) -> Self {
        Self(imp::F32x4::from_array([v, v, v, 0.0]))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns the live lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
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
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= 3, "slice too short: {} < 3", slice.len());
        Self::new(slice[0], slice[1], slice[2])
    }

    /// Writes the live lanes into the first three elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than three elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= 3, "slice too short: {} < 3", slice.len());
        slice[..3].copy_from_slice(&self.to_array());
    }

    /// Reads three contiguous elements from `ptr`; the padding lane is zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading three `f32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const f32) -> Self {
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
    /// `ptr` must be valid for writing three `f32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
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
    pub fn extract(self, i: usize) -> f32 {
        assert!(i < 3, "lane index out of range: {i} >= 3");
        self.0.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place; the padding lane stays zero.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: f32) {
        assert!(i < 3, "lane index out of range: {i} >= 3");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::F32x4::from_array(lanes);
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

    /// Truncating conversion toward zero.
    #[inline]
    #[must_use]
    pub fn to_i32x3(self) -> I32x3 {
        I32x3(self.0.to_i32x4_trunc())
    }

    /// Rounds to nearest (ties to even) and converts to unsigned lanes.
    #[inline]
    #[must_use]
    pub fn to_u32x3(self) -> U32x3 {
        U32x3(self.0.to_u32x4_round())
    }
}

impl Default for F32x3 {
    #[inline]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl PartialEq for F32x3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for F32x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.to_array();
        f.debug_tuple("F32x3").field(&a).field(&b).field(&c).finish()
    }
}

impl Add for F32x3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for F32x3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for F32x3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for F32x3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.div(pad_divisor3(rhs.0)))
    }
}

impl Neg for F32x3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        // -0.0 in the padding lane is still discarded; renormalize to keep
        // the all-zero-bits invariant.
        let [a, b, c, _] = self.0.neg().to_array();
        Self(imp::F32x4::from_array([a, b, c, 0.0]))
    }
}

impl From<[f32; 3]> for F32x3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<F32x3> for [f32; 3] {
    #[inline]
    fn from(v: F32x3) -> Self {
        v.to_array()
    }
}

impl From<I32x3> for F32x3 {
    /// Lanewise conversion; the zero padding lane converts to 0.0.
    #[inline]
    fn from(v: I32x3) -> Self {
        Self(imp::F32x4::from_i32x4(v.0))
    }
}

impl From<U32x3> for F32x3 {
    #[inline]
    fn from(v: U32x3) -> Self {
        Self(imp::F32x4::from_u32x4(v.0))
    }
}

impl TryFrom<&[f32]> for F32x3 {
    type Error = LaneError;

    fn try_from(slice: &[f32]) -> Result<Self, LaneError> {
        if slice.len() != 3 {
            return Err(LaneError::SizeMismatch {
                expected: 3,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }
}

impl F32x2 {
    /// Number of live lanes.
    pub const LANES: usize = 2;

    /// Builds a vector from individual lanes. The padding lanes are zero.
    #[inline]
    #[must_use]
    pub fn new(e0: f32, e1: f32) -> Self {
        Self(imp::F32x4::from_array([e0, e1, 0.0, 0.0]))
    }

    /// Builds a vector with the same value in every live lane.
    #[inline]
    #[must_use]
    pub fn splat(v: f32) -> Self {
        Self(imp::F32x4::from_array([v, v, 0.0, 0.0]))
    }

    /// Builds a vector from an array in lane order.
    #[inline]
    #[must_use]
    pub fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Returns the live lanes as an array in lane order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 2] {
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
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        Self::new(slice[0], slice[1])
    }

    /// Writes the live lanes into the first two elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than two elements.
    #[inline]
    pub fn write_to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= 2, "slice too short: {} < 2", slice.len());
        slice[..2].copy_from_slice(&self.to_array());
    }

    /// Reads two contiguous elements from `ptr`; the padding lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading two `f32` values.
    #[inline]
    #[must_use]
    pub unsafe fn load(ptr: *const f32) -> Self {
        Self::new(ptr.read_unaligned(), ptr.add(1).read_unaligned())
    }

    /// Writes two contiguous elements to `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing two `f32` values.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
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
    pub fn extract(self, i: usize) -> f32 {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        self.0.to_array()[i]
    }

    /// Replaces lane `i` with `v` in place; the padding lanes stay zero.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[inline]
    pub fn replace(&mut self, i: usize, v: f32) {
        assert!(i < 2, "lane index out of range: {i} >= 2");
        let mut lanes = self.0.to_array();
        lanes[i] = v;
        self.0 = imp::F32x4::from_array(lanes);
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

    /// Truncating conversion toward zero.
    #[inline]
    #[must_use]
    pub fn to_i32x2(self) -> I32x2 {
        I32x2(self.0.to_i32x4_trunc())
    }

    /// Rounds to nearest (ties to even) and converts to unsigned lanes.
    #[inline]
    #[must_use]
    pub fn to_u32x2(self) -> U32x2 {
        U32x2(self.0.to_u32x4_round())
    }

    /// Widens both lanes to f64.
    ///
    /// ```
    /// use chispa::F32x2;
    ///
    /// let v = F32x2::new(1.5, -2.5).to_f64x2();
    /// assert_eq!(v.to_array(), [1.5, -2.5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_f64x2(self) -> F64x2 {
        F64x2(self.0.widen_low_f64())
    }
}

impl Default for F32x2 {
    #[inline]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl PartialEq for F32x2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for F32x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.to_array();
        f.debug_tuple("F32x2").field(&a).field(&b).finish()
    }
}

impl Add for F32x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl Sub for F32x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl Mul for F32x2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl Div for F32x2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.div(pad_divisor2(rhs.0)))
    }
}

impl Neg for F32x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let [a, b, _, _] = self.0.neg().to_array();
        Self(imp::F32x4::from_array([a, b, 0.0, 0.0]))
    }
}

impl From<[f32; 2]> for F32x2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<F32x2> for [f32; 2] {
    #[inline]
    fn from(v: F32x2) -> Self {
        v.to_array()
    }
}

impl From<I32x2> for F32x2 {
    #[inline]
    fn from(v: I32x2) -> Self {
        Self(imp::F32x4::from_i32x4(v.0))
    }
}

impl From<U32x2> for F32x2 {
    #[inline]
    fn from(v: U32x2) -> Self {
        Self(imp::F32x4::from_u32x4(v.0))
    }
}

impl TryFrom<&[f32]> for F32x2 {
    type Error = LaneError;

    fn try_from(slice: &[f32]) -> Result<Self, LaneError> {
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

    fn padded_bits3(v: F32x3) -> [u32; 4] {
        v.0.to_array().map(f32::to_bits)
    }

    #[test]
    fn default_bit_equals_splat_zero_including_padding() {
        assert_eq!(padded_bits3(F32x3::default()), padded_bits3(F32x3::splat(0.0)));
        assert_eq!(padded_bits3(F32x3::default()), [0u32; 4]);
        assert_eq!(
            F32x2::default().0.to_array().map(f32::to_bits),
            [0u32; 4]
        );
    }

    #[test]
    fn divide_keeps_padding_finite() {
        let v = F32x3::new(1.0, 2.0, 3.0) / F32x3::splat(2.0);
        assert_eq!(v.to_array(), [0.5, 1.0, 1.5]);
        // The padding lane went through 0.0 / 1.0, not 0.0 / 0.0.
        let pad = v.0.to_array()[3];
        assert!(!pad.is_nan());
        assert_eq!(pad, 0.0);
    }

    #[test]
    fn divide_by_one_is_identity() {
        let v = F32x3::new(-7.5, 0.25, 1e-20);
        assert_eq!(v / F32x3::splat(1.0), v);
        let w = F32x2::new(4.0, -0.5);
        assert_eq!(w / F32x2::splat(1.0), w);
    }

    #[test]
    fn replace_preserves_padding() {
        let mut v = F32x3::splat(9.0);
        v.replace(1, -1.0);
        assert_eq!(v.to_array(), [9.0, -1.0, 9.0]);
        assert_eq!(v.0.to_array()[3].to_bits(), 0);
    }

    #[test]
    #[should_panic(expected = "lane index out of range")]
    fn extract_out_of_range_panics() {
        F32x3::splat(1.0).extract(3);
    }

    #[test]
    fn load_store_round_trip() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let v = unsafe { F32x3::load(data[1..].as_ptr()) };
        assert_eq!(v.to_array(), [2.0, 3.0, 4.0]);

        let mut out = [0.0f32; 3];
        unsafe { v.store(out.as_mut_ptr()) };
        assert_eq!(out, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn try_from_wrong_length() {
        let err = F32x4::try_from(&[1.0f32, 2.0][..]).unwrap_err();
        assert_eq!(
            err,
            LaneError::SizeMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn neg_abs_symmetry() {
        let v = F32x4::new(-1.5, 2.5, -0.0, 7.0);
        assert_eq!((-v).abs(), v.abs());
    }

    #[test]
    fn sqrt_matches_lanes() {
        let v = F32x4::new(4.0, 9.0, 0.0, 2.25).sqrt();
        assert_eq!(v.to_array(), [2.0, 3.0, 0.0, 1.5]);
    }

    #[test]
    fn conversion_round_trip_within_f32_precision() {
        let v = I32x4::new(1 << 24, -(1 << 24), 123_456, -1);
        assert_eq!(v.to_f32x4().to_i32x4(), v);
    }

    #[test]
    fn size_is_one_register() {
        assert_eq!(core::mem::size_of::<F32x4>(), 16);
        assert_eq!(core::mem::size_of::<F32x3>(), 16);
        assert_eq!(core::mem::size_of::<F32x2>(), 16);
    }
}
