//! Scalar (non-SIMD) backend implementation
//!
//! This is the portable baseline that compiles on every target. It stores
//! lanes in plain fixed-size arrays and runs explicit per-lane loops, and it
//! doubles as the correctness reference the SIMD backends are tested against.
//!
//! Integer arithmetic uses the `wrapping_*` operations so results are
//! bit-identical to the wraparound behavior of the SIMD instructions.

/// Four f32 lanes stored as a plain array.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct F32x4(pub(crate) [f32; 4]);

/// Two f64 lanes stored as a plain array.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct F64x2(pub(crate) [f64; 2]);

/// Four i32 lanes stored as a plain array.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct I32x4(pub(crate) [i32; 4]);

/// Four u32 lanes stored as a plain array.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct U32x4(pub(crate) [u32; 4]);

/// Two i64 lanes stored as a plain array.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct I64x2(pub(crate) [i64; 2]);

/// Two u64 lanes stored as a plain array.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct U64x2(pub(crate) [u64; 2]);

#[inline]
fn map2f32(a: [f32; 4], b: [f32; 4], f: impl Fn(f32, f32) -> f32) -> [f32; 4] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

#[inline]
fn map1f32(a: [f32; 4], f: impl Fn(f32) -> f32) -> [f32; 4] {
    [f(a[0]), f(a[1]), f(a[2]), f(a[3])]
}

impl F32x4 {
    #[inline]
    pub(crate) fn from_array(a: [f32; 4]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, |a, b| a + b))
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, |a, b| a - b))
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, |a, b| a * b))
    }

    #[inline]
    pub(crate) fn div(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, |a, b| a / b))
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(map1f32(self.0, |a| -a))
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        Self(map1f32(self.0, f32::abs))
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self(map1f32(self.0, f32::sqrt))
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, f32::min))
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, f32::max))
    }

    /// Lanewise bitwise OR, used by the padding plumbing in the public layer.
    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(map2f32(self.0, o.0, |a, b| {
            f32::from_bits(a.to_bits() | b.to_bits())
        }))
    }

    /// Truncating convert toward zero (C cast semantics).
    #[inline]
    pub(crate) fn to_i32x4_trunc(self) -> I32x4 {
        let a = self.0;
        I32x4([a[0] as i32, a[1] as i32, a[2] as i32, a[3] as i32])
    }

    /// Round to nearest (ties to even), then convert.
    #[inline]
    pub(crate) fn to_u32x4_round(self) -> U32x4 {
        let a = self.0;
        U32x4([
            a[0].round_ties_even() as u32,
            a[1].round_ties_even() as u32,
            a[2].round_ties_even() as u32,
            a[3].round_ties_even() as u32,
        ])
    }

    #[inline]
    pub(crate) fn from_i32x4(v: I32x4) -> Self {
        let a = v.0;
        Self([a[0] as f32, a[1] as f32, a[2] as f32, a[3] as f32])
    }

    #[inline]
    pub(crate) fn from_u32x4(v: U32x4) -> Self {
        let a = v.0;
        Self([a[0] as f32, a[1] as f32, a[2] as f32, a[3] as f32])
    }

    /// Widen lanes 0 and 1 to f64.
    #[inline]
    pub(crate) fn widen_low_f64(self) -> F64x2 {
        F64x2([f64::from(self.0[0]), f64::from(self.0[1])])
    }
}

impl F64x2 {
    #[inline]
    pub(crate) fn from_array(a: [f64; 2]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 2] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: f64) -> Self {
        Self([v; 2])
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self([self.0[0] + o.0[0], self.0[1] + o.0[1]])
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self([self.0[0] - o.0[0], self.0[1] - o.0[1]])
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self([self.0[0] * o.0[0], self.0[1] * o.0[1]])
    }

    #[inline]
    pub(crate) fn div(self, o: Self) -> Self {
        Self([self.0[0] / o.0[0], self.0[1] / o.0[1]])
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1]])
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        Self([self.0[0].abs(), self.0[1].abs()])
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self([self.0[0].sqrt(), self.0[1].sqrt()])
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self([self.0[0].min(o.0[0]), self.0[1].min(o.0[1])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self([self.0[0].max(o.0[0]), self.0[1].max(o.0[1])])
    }

    /// Narrow to f32 in lanes 0 and 1; lanes 2 and 3 are zero.
    #[inline]
    pub(crate) fn narrow_f32(self) -> F32x4 {
        F32x4([self.0[0] as f32, self.0[1] as f32, 0.0, 0.0])
    }

    /// Truncating convert toward zero.
    #[inline]
    pub(crate) fn to_i64x2_trunc(self) -> I64x2 {
        I64x2([self.0[0] as i64, self.0[1] as i64])
    }

    /// Round to nearest (ties to even), then convert.
    #[inline]
    pub(crate) fn to_u64x2_round(self) -> U64x2 {
        U64x2([
            self.0[0].round_ties_even() as u64,
            self.0[1].round_ties_even() as u64,
        ])
    }

    #[inline]
    pub(crate) fn from_i64x2(v: I64x2) -> Self {
        Self([v.0[0] as f64, v.0[1] as f64])
    }

    #[inline]
    pub(crate) fn from_u64x2(v: U64x2) -> Self {
        Self([v.0[0] as f64, v.0[1] as f64])
    }
}

impl I32x4 {
    #[inline]
    pub(crate) fn from_array(a: [i32; 4]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [i32; 4] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: i32) -> Self {
        Self([v; 4])
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([
            a[0].wrapping_add(b[0]),
            a[1].wrapping_add(b[1]),
            a[2].wrapping_add(b[2]),
            a[3].wrapping_add(b[3]),
        ])
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([
            a[0].wrapping_sub(b[0]),
            a[1].wrapping_sub(b[1]),
            a[2].wrapping_sub(b[2]),
            a[3].wrapping_sub(b[3]),
        ])
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([
            a[0].wrapping_mul(b[0]),
            a[1].wrapping_mul(b[1]),
            a[2].wrapping_mul(b[2]),
            a[3].wrapping_mul(b[3]),
        ])
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        let a = self.0;
        Self([
            a[0].wrapping_neg(),
            a[1].wrapping_neg(),
            a[2].wrapping_neg(),
            a[3].wrapping_neg(),
        ])
    }

    /// Magnitude as the unsigned type; `i32::MIN` maps to `0x8000_0000`.
    #[inline]
    pub(crate) fn unsigned_abs(self) -> U32x4 {
        let a = self.0;
        U32x4([
            a[0].unsigned_abs(),
            a[1].unsigned_abs(),
            a[2].unsigned_abs(),
            a[3].unsigned_abs(),
        ])
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2]), a[3].min(b[3])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2]), a[3].max(b[3])])
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1], !a[2], !a[3]])
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }

    /// `self & !o`.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] & !b[0], a[1] & !b[1], a[2] & !b[2], a[3] & !b[3]])
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]])
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        let a = self.0;
        Self([a[0] << n, a[1] << n, a[2] << n, a[3] << n])
    }

    /// Arithmetic (sign-extending) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        let a = self.0;
        Self([a[0] >> n, a[1] >> n, a[2] >> n, a[3] >> n])
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.0, counts.0);
        Self([a[0] << n[0], a[1] << n[1], a[2] << n[2], a[3] << n[3]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.0, counts.0);
        Self([a[0] >> n[0], a[1] >> n[1], a[2] >> n[2], a[3] >> n[3]])
    }

    #[inline]
    pub(crate) fn to_f32x4(self) -> F32x4 {
        F32x4::from_i32x4(self)
    }

    /// Sign-extend lanes 0 and 1 to i64.
    #[inline]
    pub(crate) fn widen_low_i64(self) -> I64x2 {
        I64x2([i64::from(self.0[0]), i64::from(self.0[1])])
    }

    #[inline]
    pub(crate) fn bitcast_u32(self) -> U32x4 {
        let a = self.0;
        U32x4([a[0] as u32, a[1] as u32, a[2] as u32, a[3] as u32])
    }
}

impl U32x4 {
    #[inline]
    pub(crate) fn from_array(a: [u32; 4]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u32; 4] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: u32) -> Self {
        Self([v; 4])
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([
            a[0].wrapping_add(b[0]),
            a[1].wrapping_add(b[1]),
            a[2].wrapping_add(b[2]),
            a[3].wrapping_add(b[3]),
        ])
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([
            a[0].wrapping_sub(b[0]),
            a[1].wrapping_sub(b[1]),
            a[2].wrapping_sub(b[2]),
            a[3].wrapping_sub(b[3]),
        ])
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([
            a[0].wrapping_mul(b[0]),
            a[1].wrapping_mul(b[1]),
            a[2].wrapping_mul(b[2]),
            a[3].wrapping_mul(b[3]),
        ])
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2]), a[3].min(b[3])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2]), a[3].max(b[3])])
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1], !a[2], !a[3]])
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }

    /// `self & !o`.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] & !b[0], a[1] & !b[1], a[2] & !b[2], a[3] & !b[3]])
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        let (a, b) = (self.0, o.0);
        Self([a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]])
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        let a = self.0;
        Self([a[0] << n, a[1] << n, a[2] << n, a[3] << n])
    }

    /// Logical (zero-filling) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        let a = self.0;
        Self([a[0] >> n, a[1] >> n, a[2] >> n, a[3] >> n])
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.0, counts.0);
        Self([a[0] << n[0], a[1] << n[1], a[2] << n[2], a[3] << n[3]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.0, counts.0);
        Self([a[0] >> n[0], a[1] >> n[1], a[2] >> n[2], a[3] >> n[3]])
    }

    #[inline]
    pub(crate) fn to_f32x4(self) -> F32x4 {
        F32x4::from_u32x4(self)
    }

    /// Zero-extend lanes 0 and 1 to u64.
    #[inline]
    pub(crate) fn widen_low_u64(self) -> U64x2 {
        U64x2([u64::from(self.0[0]), u64::from(self.0[1])])
    }

    #[inline]
    pub(crate) fn bitcast_i32(self) -> I32x4 {
        let a = self.0;
        I32x4([a[0] as i32, a[1] as i32, a[2] as i32, a[3] as i32])
    }
}

impl I64x2 {
    #[inline]
    pub(crate) fn from_array(a: [i64; 2]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [i64; 2] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: i64) -> Self {
        Self([v; 2])
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self([
            self.0[0].wrapping_add(o.0[0]),
            self.0[1].wrapping_add(o.0[1]),
        ])
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self([
            self.0[0].wrapping_sub(o.0[0]),
            self.0[1].wrapping_sub(o.0[1]),
        ])
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self([self.0[0].wrapping_neg(), self.0[1].wrapping_neg()])
    }

    #[inline]
    pub(crate) fn unsigned_abs(self) -> U64x2 {
        U64x2([self.0[0].unsigned_abs(), self.0[1].unsigned_abs()])
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self([self.0[0].min(o.0[0]), self.0[1].min(o.0[1])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self([self.0[0].max(o.0[0]), self.0[1].max(o.0[1])])
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self([!self.0[0], !self.0[1]])
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self([self.0[0] & o.0[0], self.0[1] & o.0[1]])
    }

    /// `self & !o`.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self([self.0[0] & !o.0[0], self.0[1] & !o.0[1]])
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self([self.0[0] | o.0[0], self.0[1] | o.0[1]])
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self([self.0[0] ^ o.0[0], self.0[1] ^ o.0[1]])
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self([self.0[0] << n, self.0[1] << n])
    }

    /// Arithmetic (sign-extending) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self([self.0[0] >> n, self.0[1] >> n])
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        Self([self.0[0] << counts.0[0], self.0[1] << counts.0[1]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        Self([self.0[0] >> counts.0[0], self.0[1] >> counts.0[1]])
    }

    /// Truncate to i32 in lanes 0 and 1; lanes 2 and 3 are zero.
    #[inline]
    pub(crate) fn narrow_i32(self) -> I32x4 {
        I32x4([self.0[0] as i32, self.0[1] as i32, 0, 0])
    }

    #[inline]
    pub(crate) fn to_f64x2(self) -> F64x2 {
        F64x2::from_i64x2(self)
    }

    #[inline]
    pub(crate) fn bitcast_u64(self) -> U64x2 {
        U64x2([self.0[0] as u64, self.0[1] as u64])
    }
}

impl U64x2 {
    #[inline]
    pub(crate) fn from_array(a: [u64; 2]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u64; 2] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: u64) -> Self {
        Self([v; 2])
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self([
            self.0[0].wrapping_add(o.0[0]),
            self.0[1].wrapping_add(o.0[1]),
        ])
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self([
            self.0[0].wrapping_sub(o.0[0]),
            self.0[1].wrapping_sub(o.0[1]),
        ])
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self([self.0[0].min(o.0[0]), self.0[1].min(o.0[1])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self([self.0[0].max(o.0[0]), self.0[1].max(o.0[1])])
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self([!self.0[0], !self.0[1]])
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self([self.0[0] & o.0[0], self.0[1] & o.0[1]])
    }

    /// `self & !o`.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self([self.0[0] & !o.0[0], self.0[1] & !o.0[1]])
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self([self.0[0] | o.0[0], self.0[1] | o.0[1]])
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self([self.0[0] ^ o.0[0], self.0[1] ^ o.0[1]])
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self([self.0[0] << n, self.0[1] << n])
    }

    /// Logical (zero-filling) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self([self.0[0] >> n, self.0[1] >> n])
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        Self([self.0[0] << counts.0[0], self.0[1] << counts.0[1]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        Self([self.0[0] >> counts.0[0], self.0[1] >> counts.0[1]])
    }

    /// Truncate to u32 in lanes 0 and 1; lanes 2 and 3 are zero.
    #[inline]
    pub(crate) fn narrow_u32(self) -> U32x4 {
        U32x4([self.0[0] as u32, self.0[1] as u32, 0, 0])
    }

    #[inline]
    pub(crate) fn to_f64x2(self) -> F64x2 {
        F64x2::from_u64x2(self)
    }

    #[inline]
    pub(crate) fn bitcast_i64(self) -> I64x2 {
        I64x2([self.0[0] as i64, self.0[1] as i64])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32x4_arith() {
        let a = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        let b = F32x4::from_array([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(a.add(b).to_array(), [5.0, 5.0, 5.0, 5.0]);
        assert_eq!(a.sub(b).to_array(), [-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(a.mul(b).to_array(), [4.0, 6.0, 6.0, 4.0]);
        assert_eq!(a.div(b).to_array(), [0.25, 2.0 / 3.0, 1.5, 4.0]);
    }

    #[test]
    fn i32x4_wraps() {
        let a = I32x4::splat(i32::MAX);
        let b = I32x4::splat(1);
        assert_eq!(a.add(b).to_array(), [i32::MIN; 4]);
    }

    #[test]
    fn i32x4_unsigned_abs_at_min() {
        let v = I32x4::splat(i32::MIN);
        assert_eq!(v.unsigned_abs().to_array(), [0x8000_0000u32; 4]);
    }

    #[test]
    fn f32x4_u32_round_not_trunc() {
        let v = F32x4::from_array([0.5, 1.5, 2.4, 2.6]);
        // Ties round to even: 0.5 -> 0, 1.5 -> 2.
        assert_eq!(v.to_u32x4_round().to_array(), [0, 2, 2, 3]);
        assert_eq!(v.to_i32x4_trunc().to_array(), [0, 1, 2, 2]);
    }

    #[test]
    fn shift_signedness() {
        let s = I32x4::splat(-8).shr(1);
        assert_eq!(s.to_array(), [-4; 4]);
        let u = U32x4::splat((-8i32) as u32).shr(1);
        assert_eq!(u.to_array(), [0x7FFF_FFFC; 4]);
    }
}
