//! SSE2 backend implementation (x86_64 baseline SIMD)
//!
//! SSE2 is part of the x86_64 baseline, so every operation here is plain
//! safe Rust with the intrinsic calls wrapped in local `unsafe` blocks; no
//! runtime feature detection is involved.
//!
//! SSE2 predates several instructions this API needs, so a few operations are
//! emulated:
//!
//! - 32-bit lane multiply (`pmulld` is SSE4.1): two `pmuludq` passes over the
//!   even and odd lanes, recombined.
//! - 32-bit min/max (`pminsd`/`pmaxsd` are SSE4.1): compare-and-blend, which
//!   is exact over the full lane range. Unsigned compares flip the sign bit
//!   first.
//! - 64-bit min/max, 64-bit lane multiply, 64-bit arithmetic right shift and
//!   per-lane variable shifts have no 128-bit SSE2 form at all and run one
//!   lane at a time.
//! - i64/u64 <-> f64 conversion uses the exponent-bias trick: adding the raw
//!   bits of `2^52 * 1.5` places the integer in the f64 mantissa. Exact only
//!   for magnitudes up to 2^51, which the public layer documents.

use core::arch::x86_64::*;

use super::scalar;

/// Four f32 lanes in an XMM register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct F32x4(pub(crate) __m128);

/// Two f64 lanes in an XMM register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct F64x2(pub(crate) __m128d);

/// Four i32 lanes in an XMM register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct I32x4(pub(crate) __m128i);

/// Four u32 lanes in an XMM register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct U32x4(pub(crate) __m128i);

/// Two i64 lanes in an XMM register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct I64x2(pub(crate) __m128i);

/// Two u64 lanes in an XMM register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct U64x2(pub(crate) __m128i);

/// Raw bits of 2^52 * 1.5, the signed conversion magic number.
const I64_MAGIC_BITS: i64 = 0x4338_0000_0000_0000;
/// 2^52 * 1.5 as a float.
const I64_MAGIC: f64 = 6_755_399_441_055_744.0;
/// Raw bits of 2^52, the unsigned conversion magic number.
const U64_MAGIC_BITS: i64 = 0x4330_0000_0000_0000;
/// 2^52 as a float.
const U64_MAGIC: f64 = 4_503_599_627_370_496.0;

/// `mask ? a : b` per bit, the SSE2 select idiom.
#[inline]
fn blend_epi(mask: __m128i, a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_or_si128(_mm_and_si128(mask, a), _mm_andnot_si128(mask, b)) }
}

impl F32x4 {
    #[inline]
    pub(crate) fn from_array(a: [f32; 4]) -> Self {
        Self(unsafe { _mm_loadu_ps(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: f32) -> Self {
        Self(unsafe { _mm_set1_ps(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { _mm_sub_ps(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn div(self, o: Self) -> Self {
        Self(unsafe { _mm_div_ps(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, _mm_set1_ps(-0.0)) })
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.0) })
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self(unsafe { _mm_sqrt_ps(self.0) })
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { _mm_min_ps(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { _mm_max_ps(self.0, o.0) })
    }

    /// Lanewise bitwise OR, used by the padding plumbing in the public layer.
    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { _mm_or_ps(self.0, o.0) })
    }

    /// Truncating convert toward zero (C cast semantics).
    #[inline]
    pub(crate) fn to_i32x4_trunc(self) -> I32x4 {
        I32x4(unsafe { _mm_cvttps_epi32(self.0) })
    }

    /// Round to nearest (ties to even), then convert. `cvtps2dq` already
    /// rounds to nearest-even, so the result is reinterpreted as unsigned.
    /// Exact for values in `[0, 2^31)`.
    #[inline]
    pub(crate) fn to_u32x4_round(self) -> U32x4 {
        U32x4(unsafe { _mm_cvtps_epi32(self.0) })
    }

    #[inline]
    pub(crate) fn from_i32x4(v: I32x4) -> Self {
        Self(unsafe { _mm_cvtepi32_ps(v.0) })
    }

    /// SSE2 has no unsigned convert; split each lane into 16-bit halves,
    /// convert both through the signed path and recombine.
    #[inline]
    pub(crate) fn from_u32x4(v: U32x4) -> Self {
        unsafe {
            let lo = _mm_and_si128(v.0, _mm_set1_epi32(0xFFFF));
            let hi = _mm_srli_epi32::<16>(v.0);
            let hi_f = _mm_mul_ps(_mm_cvtepi32_ps(hi), _mm_set1_ps(65536.0));
            Self(_mm_add_ps(hi_f, _mm_cvtepi32_ps(lo)))
        }
    }

    /// Widen lanes 0 and 1 to f64.
    #[inline]
    pub(crate) fn widen_low_f64(self) -> F64x2 {
        F64x2(unsafe { _mm_cvtps_pd(self.0) })
    }
}

impl F64x2 {
    #[inline]
    pub(crate) fn from_array(a: [f64; 2]) -> Self {
        Self(unsafe { _mm_loadu_pd(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 2] {
        let mut out = [0.0f64; 2];
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: f64) -> Self {
        Self(unsafe { _mm_set1_pd(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { _mm_add_pd(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { _mm_sub_pd(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(unsafe { _mm_mul_pd(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn div(self, o: Self) -> Self {
        Self(unsafe { _mm_div_pd(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { _mm_xor_pd(self.0, _mm_set1_pd(-0.0)) })
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), self.0) })
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self(unsafe { _mm_sqrt_pd(self.0) })
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { _mm_min_pd(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { _mm_max_pd(self.0, o.0) })
    }

    /// Narrow to f32 in lanes 0 and 1; `cvtpd2ps` zeroes the upper lanes.
    #[inline]
    pub(crate) fn narrow_f32(self) -> F32x4 {
        F32x4(unsafe { _mm_cvtpd_ps(self.0) })
    }

    /// Truncating convert toward zero, one lane at a time via `cvttsd2si`.
    #[inline]
    pub(crate) fn to_i64x2_trunc(self) -> I64x2 {
        unsafe {
            let lo = _mm_cvttsd_si64(self.0);
            let hi = _mm_cvttsd_si64(_mm_unpackhi_pd(self.0, self.0));
            I64x2(_mm_set_epi64x(hi, lo))
        }
    }

    /// Round to nearest (ties to even) via the 2^52 add/sub trick, then
    /// convert. Exact for values in `[0, 2^51]`.
    #[inline]
    pub(crate) fn to_u64x2_round(self) -> U64x2 {
        unsafe {
            let magic = _mm_set1_pd(U64_MAGIC);
            let r = _mm_sub_pd(_mm_add_pd(self.0, magic), magic);
            let lo = _mm_cvttsd_si64(r);
            let hi = _mm_cvttsd_si64(_mm_unpackhi_pd(r, r));
            U64x2(_mm_set_epi64x(hi, lo))
        }
    }

    /// Exponent-bias conversion; exact for `|v| <= 2^51`.
    #[inline]
    pub(crate) fn from_i64x2(v: I64x2) -> Self {
        unsafe {
            let x = _mm_add_epi64(v.0, _mm_set1_epi64x(I64_MAGIC_BITS));
            Self(_mm_sub_pd(_mm_castsi128_pd(x), _mm_set1_pd(I64_MAGIC)))
        }
    }

    /// Exponent-bias conversion; exact for `v <= 2^51`.
    #[inline]
    pub(crate) fn from_u64x2(v: U64x2) -> Self {
        unsafe {
            let x = _mm_or_si128(v.0, _mm_set1_epi64x(U64_MAGIC_BITS));
            Self(_mm_sub_pd(_mm_castsi128_pd(x), _mm_set1_pd(U64_MAGIC)))
        }
    }
}

impl I32x4 {
    #[inline]
    pub(crate) fn from_array(a: [i32; 4]) -> Self {
        Self(unsafe { _mm_loadu_si128(a.as_ptr().cast()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [i32; 4] {
        let mut out = [0i32; 4];
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: i32) -> Self {
        Self(unsafe { _mm_set1_epi32(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { _mm_sub_epi32(self.0, o.0) })
    }

    /// `pmulld` is SSE4.1; emulate with two widening `pmuludq` passes over
    /// even and odd lanes and keep the low 32 bits of each product.
    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        unsafe {
            let evens = _mm_mul_epu32(self.0, o.0);
            let odds = _mm_mul_epu32(_mm_srli_si128::<4>(self.0), _mm_srli_si128::<4>(o.0));
            let lo = _mm_shuffle_epi32::<0b00_00_10_00>(evens);
            let hi = _mm_shuffle_epi32::<0b00_00_10_00>(odds);
            Self(_mm_unpacklo_epi32(lo, hi))
        }
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { _mm_sub_epi32(_mm_setzero_si128(), self.0) })
    }

    /// Magnitude as the unsigned type via the sign-mask trick;
    /// `i32::MIN` maps to `0x8000_0000`.
    #[inline]
    pub(crate) fn unsigned_abs(self) -> U32x4 {
        unsafe {
            let sign = _mm_srai_epi32::<31>(self.0);
            U32x4(_mm_sub_epi32(_mm_xor_si128(self.0, sign), sign))
        }
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        let gt = unsafe { _mm_cmpgt_epi32(self.0, o.0) };
        Self(blend_epi(gt, o.0, self.0))
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        let gt = unsafe { _mm_cmpgt_epi32(self.0, o.0) };
        Self(blend_epi(gt, self.0, o.0))
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, o.0) })
    }

    /// `self & !o`; note `pandn` negates its first operand.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { _mm_andnot_si128(o.0, self.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { _mm_sll_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    /// Arithmetic (sign-extending) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { _mm_sra_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    /// SSE2 has no per-lane variable shift; one lane at a time.
    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] << n[0], a[1] << n[1], a[2] << n[2], a[3] << n[3]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] >> n[0], a[1] >> n[1], a[2] >> n[2], a[3] >> n[3]])
    }

    #[inline]
    pub(crate) fn to_f32x4(self) -> F32x4 {
        F32x4::from_i32x4(self)
    }

    /// Sign-extend lanes 0 and 1 to i64.
    #[inline]
    pub(crate) fn widen_low_i64(self) -> I64x2 {
        unsafe {
            let sign = _mm_srai_epi32::<31>(self.0);
            I64x2(_mm_unpacklo_epi32(self.0, sign))
        }
    }

    #[inline]
    pub(crate) fn bitcast_u32(self) -> U32x4 {
        U32x4(self.0)
    }
}

impl U32x4 {
    #[inline]
    pub(crate) fn from_array(a: [u32; 4]) -> Self {
        Self(unsafe { _mm_loadu_si128(a.as_ptr().cast()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u32; 4] {
        let mut out = [0u32; 4];
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: u32) -> Self {
        Self(unsafe { _mm_set1_epi32(v as i32) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { _mm_sub_epi32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        I32x4(self.0).mul(I32x4(o.0)).bitcast_u32()
    }

    /// Unsigned compare by flipping the sign bit and comparing signed.
    #[inline]
    fn cmpgt(self, o: Self) -> __m128i {
        unsafe {
            let bias = _mm_set1_epi32(i32::MIN);
            _mm_cmpgt_epi32(_mm_xor_si128(self.0, bias), _mm_xor_si128(o.0, bias))
        }
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        let gt = self.cmpgt(o);
        Self(blend_epi(gt, o.0, self.0))
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        let gt = self.cmpgt(o);
        Self(blend_epi(gt, self.0, o.0))
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, o.0) })
    }

    /// `self & !o`; note `pandn` negates its first operand.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { _mm_andnot_si128(o.0, self.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { _mm_sll_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    /// Logical (zero-filling) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { _mm_srl_epi32(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] << n[0], a[1] << n[1], a[2] << n[2], a[3] << n[3]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] >> n[0], a[1] >> n[1], a[2] >> n[2], a[3] >> n[3]])
    }

    #[inline]
    pub(crate) fn to_f32x4(self) -> F32x4 {
        F32x4::from_u32x4(self)
    }

    /// Zero-extend lanes 0 and 1 to u64.
    #[inline]
    pub(crate) fn widen_low_u64(self) -> U64x2 {
        U64x2(unsafe { _mm_unpacklo_epi32(self.0, _mm_setzero_si128()) })
    }

    #[inline]
    pub(crate) fn bitcast_i32(self) -> I32x4 {
        I32x4(self.0)
    }
}

impl I64x2 {
    #[inline]
    pub(crate) fn from_array(a: [i64; 2]) -> Self {
        Self(unsafe { _mm_loadu_si128(a.as_ptr().cast()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [i64; 2] {
        let mut out = [0i64; 2];
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: i64) -> Self {
        Self(unsafe { _mm_set1_epi64x(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { _mm_add_epi64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { _mm_sub_epi64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { _mm_sub_epi64(_mm_setzero_si128(), self.0) })
    }

    /// Magnitude as the unsigned type. The per-64-bit sign mask is built by
    /// broadcasting each lane's high dword sign.
    #[inline]
    pub(crate) fn unsigned_abs(self) -> U64x2 {
        unsafe {
            let sign32 = _mm_srai_epi32::<31>(self.0);
            let sign = _mm_shuffle_epi32::<0b11_11_01_01>(sign32);
            U64x2(_mm_sub_epi64(_mm_xor_si128(self.0, sign), sign))
        }
    }

    /// No 64-bit compare until SSE4.2; one lane at a time.
    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        let (a, b) = (self.to_array(), o.to_array());
        Self::from_array([a[0].min(b[0]), a[1].min(b[1])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        let (a, b) = (self.to_array(), o.to_array());
        Self::from_array([a[0].max(b[0]), a[1].max(b[1])])
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, o.0) })
    }

    /// `self & !o`; note `pandn` negates its first operand.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { _mm_andnot_si128(o.0, self.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { _mm_sll_epi64(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    /// Arithmetic right shift; `psraq` does not exist below AVX-512, so this
    /// runs one lane at a time.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        let a = self.to_array();
        Self::from_array([a[0] >> n, a[1] >> n])
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] << n[0], a[1] << n[1]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] >> n[0], a[1] >> n[1]])
    }

    /// Truncate to i32 in lanes 0 and 1; `movq` zeroes the upper half.
    #[inline]
    pub(crate) fn narrow_i32(self) -> I32x4 {
        I32x4(unsafe { _mm_move_epi64(_mm_shuffle_epi32::<0b00_00_10_00>(self.0)) })
    }

    #[inline]
    pub(crate) fn to_f64x2(self) -> F64x2 {
        F64x2::from_i64x2(self)
    }

    #[inline]
    pub(crate) fn bitcast_u64(self) -> U64x2 {
        U64x2(self.0)
    }
}

impl U64x2 {
    #[inline]
    pub(crate) fn from_array(a: [u64; 2]) -> Self {
        Self(unsafe { _mm_loadu_si128(a.as_ptr().cast()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u64; 2] {
        let mut out = [0u64; 2];
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: u64) -> Self {
        Self(unsafe { _mm_set1_epi64x(v as i64) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { _mm_add_epi64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { _mm_sub_epi64(self.0, o.0) })
    }

    /// No 64-bit unsigned compare in SSE2; one lane at a time.
    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        let (a, b) = (self.to_array(), o.to_array());
        Self::from_array([a[0].min(b[0]), a[1].min(b[1])])
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        let (a, b) = (self.to_array(), o.to_array());
        Self::from_array([a[0].max(b[0]), a[1].max(b[1])])
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, o.0) })
    }

    /// `self & !o`; note `pandn` negates its first operand.
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { _mm_andnot_si128(o.0, self.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { _mm_sll_epi64(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    /// Logical (zero-filling) right shift.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { _mm_srl_epi64(self.0, _mm_cvtsi32_si128(n as i32)) })
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] << n[0], a[1] << n[1]])
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        let (a, n) = (self.to_array(), counts.to_array());
        Self::from_array([a[0] >> n[0], a[1] >> n[1]])
    }

    /// Truncate to u32 in lanes 0 and 1; `movq` zeroes the upper half.
    #[inline]
    pub(crate) fn narrow_u32(self) -> U32x4 {
        U32x4(unsafe { _mm_move_epi64(_mm_shuffle_epi32::<0b00_00_10_00>(self.0)) })
    }

    #[inline]
    pub(crate) fn to_f64x2(self) -> F64x2 {
        F64x2::from_u64x2(self)
    }

    #[inline]
    pub(crate) fn bitcast_i64(self) -> I64x2 {
        I64x2(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32x4_matches_scalar() {
        let a = [1.5f32, -2.5, 3.25, -4.75];
        let b = [0.5f32, 8.0, -1.25, 2.0];
        let va = F32x4::from_array(a);
        let vb = F32x4::from_array(b);
        let sa = scalar::F32x4::from_array(a);
        let sb = scalar::F32x4::from_array(b);

        assert_eq!(va.add(vb).to_array(), sa.add(sb).to_array());
        assert_eq!(va.sub(vb).to_array(), sa.sub(sb).to_array());
        assert_eq!(va.mul(vb).to_array(), sa.mul(sb).to_array());
        assert_eq!(va.div(vb).to_array(), sa.div(sb).to_array());
        assert_eq!(va.min(vb).to_array(), sa.min(sb).to_array());
        assert_eq!(va.max(vb).to_array(), sa.max(sb).to_array());
        assert_eq!(va.abs().to_array(), sa.abs().to_array());
        assert_eq!(va.neg().to_array(), sa.neg().to_array());
    }

    #[test]
    fn i32x4_mul_emulation() {
        let cases = [
            ([1, 2, 3, 4], [5, 6, 7, 8]),
            ([-1, -2, i32::MAX, i32::MIN], [3, -7, 2, 2]),
            ([123_456, -654_321, 0, 1], [789, 987, 55, -1]),
        ];
        for (a, b) in cases {
            let simd = I32x4::from_array(a).mul(I32x4::from_array(b)).to_array();
            let reference = scalar::I32x4::from_array(a)
                .mul(scalar::I32x4::from_array(b))
                .to_array();
            assert_eq!(simd, reference);
        }
    }

    #[test]
    fn i32x4_minmax_exact_at_extremes() {
        let a = I32x4::from_array([i32::MIN, i32::MAX, -1, 0]);
        let b = I32x4::from_array([i32::MAX, i32::MIN, 1, 0]);
        assert_eq!(a.min(b).to_array(), [i32::MIN, i32::MIN, -1, 0]);
        assert_eq!(a.max(b).to_array(), [i32::MAX, i32::MAX, 1, 0]);
    }

    #[test]
    fn u32x4_minmax_sign_flip() {
        let a = U32x4::from_array([0, u32::MAX, 0x8000_0000, 7]);
        let b = U32x4::from_array([1, 0, 0x7FFF_FFFF, 7]);
        assert_eq!(a.min(b).to_array(), [0, 0, 0x7FFF_FFFF, 7]);
        assert_eq!(a.max(b).to_array(), [1, u32::MAX, 0x8000_0000, 7]);
    }

    #[test]
    fn u32x4_to_f32_split_halves() {
        let v = U32x4::from_array([0, 1, 0xFFFF, 0x8000_0000]);
        assert_eq!(
            F32x4::from_u32x4(v).to_array(),
            [0.0, 1.0, 65535.0, 2_147_483_648.0]
        );
    }

    #[test]
    fn i64_f64_bias_trick_in_range() {
        let vals = [0i64, 1, -1, 1 << 50, -(1 << 50), (1 << 51), -(1 << 51)];
        for &v in &vals {
            let f = F64x2::from_i64x2(I64x2::splat(v)).to_array();
            assert_eq!(f, [v as f64; 2], "i64 -> f64 failed for {v}");
        }
    }

    #[test]
    fn u64_f64_bias_trick_in_range() {
        let vals = [0u64, 1, 1 << 50, 1 << 51];
        for &v in &vals {
            let f = F64x2::from_u64x2(U64x2::splat(v)).to_array();
            assert_eq!(f, [v as f64; 2], "u64 -> f64 failed for {v}");
        }
    }

    #[test]
    fn f64_to_i64_truncates() {
        let v = F64x2::from_array([2.9, -2.9]);
        assert_eq!(v.to_i64x2_trunc().to_array(), [2, -2]);
    }

    #[test]
    fn i64x2_unsigned_abs() {
        let v = I64x2::from_array([i64::MIN, -42]);
        assert_eq!(v.unsigned_abs().to_array(), [0x8000_0000_0000_0000, 42]);
    }

    #[test]
    fn narrow_widen_round_trip() {
        let v = I32x4::from_array([-5, 7, 999, -999]);
        let wide = v.widen_low_i64();
        assert_eq!(wide.to_array(), [-5, 7]);
        assert_eq!(wide.narrow_i32().to_array(), [-5, 7, 0, 0]);

        let u = U32x4::from_array([u32::MAX, 3, 0, 0]);
        assert_eq!(u.widen_low_u64().to_array(), [u64::from(u32::MAX), 3]);
    }
}
