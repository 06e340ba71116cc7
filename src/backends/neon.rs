//! ARM NEON backend implementation (AArch64 128-bit SIMD)
//!
//! NEON is mandatory on AArch64, so every operation here is plain safe Rust
//! with the intrinsic calls wrapped in local `unsafe` blocks; no runtime
//! feature detection is involved.
//!
//! NEON quirks this module leans on:
//!
//! - There is no dedicated variable right-shift instruction; `vshlq` accepts
//!   negative counts, so right shifts negate the count vector and reuse the
//!   left shift. Signedness of the operand type picks arithmetic vs logical.
//! - 64-bit lane multiply does not exist and runs one lane at a time.
//! - 64-bit min/max are built from `vcgtq` masks and `vbslq` selects.
//! - All int64/f64 conversions are native single instructions and exact over
//!   the full range, unlike the SSE2 backend's bias trick.

use core::arch::aarch64::*;

use super::scalar;

/// Four f32 lanes in a Q register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct F32x4(pub(crate) float32x4_t);

/// Two f64 lanes in a Q register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct F64x2(pub(crate) float64x2_t);

/// Four i32 lanes in a Q register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct I32x4(pub(crate) int32x4_t);

/// Four u32 lanes in a Q register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct U32x4(pub(crate) uint32x4_t);

/// Two i64 lanes in a Q register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct I64x2(pub(crate) int64x2_t);

/// Two u64 lanes in a Q register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct U64x2(pub(crate) uint64x2_t);

impl F32x4 {
    #[inline]
    pub(crate) fn from_array(a: [f32; 4]) -> Self {
        Self(unsafe { vld1q_f32(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { vst1q_f32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: f32) -> Self {
        Self(unsafe { vdupq_n_f32(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { vaddq_f32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { vsubq_f32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(unsafe { vmulq_f32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn div(self, o: Self) -> Self {
        Self(unsafe { vdivq_f32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { vnegq_f32(self.0) })
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        Self(unsafe { vabsq_f32(self.0) })
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self(unsafe { vsqrtq_f32(self.0) })
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { vminq_f32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { vmaxq_f32(self.0, o.0) })
    }

    /// Lanewise bitwise OR, used by the padding plumbing in the public layer.
    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe {
            vreinterpretq_f32_u32(vorrq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(o.0),
            ))
        })
    }

    /// Truncating convert toward zero (C cast semantics).
    #[inline]
    pub(crate) fn to_i32x4_trunc(self) -> I32x4 {
        I32x4(unsafe { vcvtq_s32_f32(self.0) })
    }

    /// Round to nearest (ties to even), then convert.
    #[inline]
    pub(crate) fn to_u32x4_round(self) -> U32x4 {
        U32x4(unsafe { vcvtnq_u32_f32(self.0) })
    }

    #[inline]
    pub(crate) fn from_i32x4(v: I32x4) -> Self {
        Self(unsafe { vcvtq_f32_s32(v.0) })
    }

    #[inline]
    pub(crate) fn from_u32x4(v: U32x4) -> Self {
        Self(unsafe { vcvtq_f32_u32(v.0) })
    }

    /// Widen lanes 0 and 1 to f64.
    #[inline]
    pub(crate) fn widen_low_f64(self) -> F64x2 {
        F64x2(unsafe { vcvt_f64_f32(vget_low_f32(self.0)) })
    }
}

impl F64x2 {
    #[inline]
    pub(crate) fn from_array(a: [f64; 2]) -> Self {
        Self(unsafe { vld1q_f64(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 2] {
        let mut out = [0.0f64; 2];
        unsafe { vst1q_f64(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: f64) -> Self {
        Self(unsafe { vdupq_n_f64(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { vaddq_f64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { vsubq_f64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(unsafe { vmulq_f64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn div(self, o: Self) -> Self {
        Self(unsafe { vdivq_f64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { vnegq_f64(self.0) })
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        Self(unsafe { vabsq_f64(self.0) })
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        Self(unsafe { vsqrtq_f64(self.0) })
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { vminq_f64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { vmaxq_f64(self.0, o.0) })
    }

    /// Narrow to f32 in lanes 0 and 1; lanes 2 and 3 are zero.
    #[inline]
    pub(crate) fn narrow_f32(self) -> F32x4 {
        F32x4(unsafe { vcombine_f32(vcvt_f32_f64(self.0), vdup_n_f32(0.0)) })
    }

    /// Truncating convert toward zero.
    #[inline]
    pub(crate) fn to_i64x2_trunc(self) -> I64x2 {
        I64x2(unsafe { vcvtq_s64_f64(self.0) })
    }

    /// Round to nearest (ties to even), then convert.
    #[inline]
    pub(crate) fn to_u64x2_round(self) -> U64x2 {
        U64x2(unsafe { vcvtnq_u64_f64(self.0) })
    }

    /// Native `scvtf`, exact over the full i64 range.
    #[inline]
    pub(crate) fn from_i64x2(v: I64x2) -> Self {
        Self(unsafe { vcvtq_f64_s64(v.0) })
    }

    /// Native `ucvtf`, exact over the full u64 range.
    #[inline]
    pub(crate) fn from_u64x2(v: U64x2) -> Self {
        Self(unsafe { vcvtq_f64_u64(v.0) })
    }
}

impl I32x4 {
    #[inline]
    pub(crate) fn from_array(a: [i32; 4]) -> Self {
        Self(unsafe { vld1q_s32(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [i32; 4] {
        let mut out = [0i32; 4];
        unsafe { vst1q_s32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: i32) -> Self {
        Self(unsafe { vdupq_n_s32(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { vaddq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { vsubq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(unsafe { vmulq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { vnegq_s32(self.0) })
    }

    /// Magnitude as the unsigned type; `i32::MIN` maps to `0x8000_0000`.
    #[inline]
    pub(crate) fn unsigned_abs(self) -> U32x4 {
        U32x4(unsafe { vreinterpretq_u32_s32(vabsq_s32(self.0)) })
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { vminq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { vmaxq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { vmvnq_s32(self.0) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { vandq_s32(self.0, o.0) })
    }

    /// `self & !o` (`bic`).
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { vbicq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { vorrq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { veorq_s32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(n as i32)) })
    }

    /// Arithmetic right shift: `vshlq` with a negated count.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(-(n as i32))) })
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_s32(self.0, counts.0) })
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_s32(self.0, vnegq_s32(counts.0)) })
    }

    #[inline]
    pub(crate) fn to_f32x4(self) -> F32x4 {
        F32x4::from_i32x4(self)
    }

    /// Sign-extend lanes 0 and 1 to i64.
    #[inline]
    pub(crate) fn widen_low_i64(self) -> I64x2 {
        I64x2(unsafe { vmovl_s32(vget_low_s32(self.0)) })
    }

    #[inline]
    pub(crate) fn bitcast_u32(self) -> U32x4 {
        U32x4(unsafe { vreinterpretq_u32_s32(self.0) })
    }
}

impl U32x4 {
    #[inline]
    pub(crate) fn from_array(a: [u32; 4]) -> Self {
        Self(unsafe { vld1q_u32(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u32; 4] {
        let mut out = [0u32; 4];
        unsafe { vst1q_u32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: u32) -> Self {
        Self(unsafe { vdupq_n_u32(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { vaddq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { vsubq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn mul(self, o: Self) -> Self {
        Self(unsafe { vmulq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { vminq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { vmaxq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { vmvnq_u32(self.0) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { vandq_u32(self.0, o.0) })
    }

    /// `self & !o` (`bic`).
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { vbicq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { vorrq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { veorq_u32(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { vshlq_u32(self.0, vdupq_n_s32(n as i32)) })
    }

    /// Logical right shift: `vshlq` with a negated count; the unsigned
    /// operand type makes the shift zero-filling.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 32, "shift count out of range: {n}");
        Self(unsafe { vshlq_u32(self.0, vdupq_n_s32(-(n as i32))) })
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_u32(self.0, vreinterpretq_s32_u32(counts.0)) })
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_u32(self.0, vnegq_s32(vreinterpretq_s32_u32(counts.0))) })
    }

    #[inline]
    pub(crate) fn to_f32x4(self) -> F32x4 {
        F32x4::from_u32x4(self)
    }

    /// Zero-extend lanes 0 and 1 to u64.
    #[inline]
    pub(crate) fn widen_low_u64(self) -> U64x2 {
        U64x2(unsafe { vmovl_u32(vget_low_u32(self.0)) })
    }

    #[inline]
    pub(crate) fn bitcast_i32(self) -> I32x4 {
        I32x4(unsafe { vreinterpretq_s32_u32(self.0) })
    }
}

impl I64x2 {
    #[inline]
    pub(crate) fn from_array(a: [i64; 2]) -> Self {
        Self(unsafe { vld1q_s64(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [i64; 2] {
        let mut out = [0i64; 2];
        unsafe { vst1q_s64(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: i64) -> Self {
        Self(unsafe { vdupq_n_s64(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { vaddq_s64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { vsubq_s64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        Self(unsafe { vnegq_s64(self.0) })
    }

    #[inline]
    pub(crate) fn unsigned_abs(self) -> U64x2 {
        U64x2(unsafe { vreinterpretq_u64_s64(vabsq_s64(self.0)) })
    }

    /// No 64-bit `vminq`; compare and select.
    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { vbslq_s64(vcgtq_s64(self.0, o.0), o.0, self.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { vbslq_s64(vcgtq_s64(self.0, o.0), self.0, o.0) })
    }

    /// No 64-bit `mvn`; XOR with all-ones.
    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { veorq_s64(self.0, vdupq_n_s64(-1)) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { vandq_s64(self.0, o.0) })
    }

    /// `self & !o` (`bic`).
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { vbicq_s64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { vorrq_s64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { veorq_s64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(i64::from(n))) })
    }

    /// Arithmetic right shift: `vshlq` with a negated count.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(-i64::from(n))) })
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_s64(self.0, counts.0) })
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_s64(self.0, vnegq_s64(counts.0)) })
    }

    /// Truncate to i32 in lanes 0 and 1; lanes 2 and 3 are zero.
    #[inline]
    pub(crate) fn narrow_i32(self) -> I32x4 {
        I32x4(unsafe { vcombine_s32(vmovn_s64(self.0), vdup_n_s32(0)) })
    }

    #[inline]
    pub(crate) fn to_f64x2(self) -> F64x2 {
        F64x2::from_i64x2(self)
    }

    #[inline]
    pub(crate) fn bitcast_u64(self) -> U64x2 {
        U64x2(unsafe { vreinterpretq_u64_s64(self.0) })
    }
}

impl U64x2 {
    #[inline]
    pub(crate) fn from_array(a: [u64; 2]) -> Self {
        Self(unsafe { vld1q_u64(a.as_ptr()) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [u64; 2] {
        let mut out = [0u64; 2];
        unsafe { vst1q_u64(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline]
    pub(crate) fn splat(v: u64) -> Self {
        Self(unsafe { vdupq_n_u64(v) })
    }

    #[inline]
    pub(crate) fn add(self, o: Self) -> Self {
        Self(unsafe { vaddq_u64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn sub(self, o: Self) -> Self {
        Self(unsafe { vsubq_u64(self.0, o.0) })
    }

    /// No 64-bit `vminq`; compare and select.
    #[inline]
    pub(crate) fn min(self, o: Self) -> Self {
        Self(unsafe { vbslq_u64(vcgtq_u64(self.0, o.0), o.0, self.0) })
    }

    #[inline]
    pub(crate) fn max(self, o: Self) -> Self {
        Self(unsafe { vbslq_u64(vcgtq_u64(self.0, o.0), self.0, o.0) })
    }

    /// No 64-bit `mvn`; XOR with all-ones.
    #[inline]
    pub(crate) fn not(self) -> Self {
        Self(unsafe { veorq_u64(self.0, vdupq_n_u64(u64::MAX)) })
    }

    #[inline]
    pub(crate) fn and(self, o: Self) -> Self {
        Self(unsafe { vandq_u64(self.0, o.0) })
    }

    /// `self & !o` (`bic`).
    #[inline]
    pub(crate) fn and_not(self, o: Self) -> Self {
        Self(unsafe { vbicq_u64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn or(self, o: Self) -> Self {
        Self(unsafe { vorrq_u64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn xor(self, o: Self) -> Self {
        Self(unsafe { veorq_u64(self.0, o.0) })
    }

    #[inline]
    pub(crate) fn shl(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { vshlq_u64(self.0, vdupq_n_s64(i64::from(n))) })
    }

    /// Logical right shift: `vshlq` with a negated count; the unsigned
    /// operand type makes the shift zero-filling.
    #[inline]
    pub(crate) fn shr(self, n: u32) -> Self {
        debug_assert!(n < 64, "shift count out of range: {n}");
        Self(unsafe { vshlq_u64(self.0, vdupq_n_s64(-i64::from(n))) })
    }

    #[inline]
    pub(crate) fn shl_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_u64(self.0, vreinterpretq_s64_u64(counts.0)) })
    }

    #[inline]
    pub(crate) fn shr_lanes(self, counts: Self) -> Self {
        Self(unsafe { vshlq_u64(self.0, vnegq_s64(vreinterpretq_s64_u64(counts.0))) })
    }

    /// Truncate to u32 in lanes 0 and 1; lanes 2 and 3 are zero.
    #[inline]
    pub(crate) fn narrow_u32(self) -> U32x4 {
        U32x4(unsafe { vcombine_u32(vmovn_u64(self.0), vdup_n_u32(0)) })
    }

    #[inline]
    pub(crate) fn to_f64x2(self) -> F64x2 {
        F64x2::from_u64x2(self)
    }

    #[inline]
    pub(crate) fn bitcast_i64(self) -> I64x2 {
        I64x2(unsafe { vreinterpretq_s64_u64(self.0) })
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
    }

    #[test]
    fn negative_count_right_shift() {
        let s = I32x4::splat(-8).shr(1);
        assert_eq!(s.to_array(), [-4; 4]);
        let u = U32x4::splat((-8i32) as u32).shr(1);
        assert_eq!(u.to_array(), [0x7FFF_FFFC; 4]);
    }

    #[test]
    fn shr_lanes_negates_counts() {
        let v = I32x4::from_array([-16, 16, -64, 64]);
        let n = I32x4::from_array([1, 2, 3, 4]);
        assert_eq!(v.shr_lanes(n).to_array(), [-8, 4, -8, 4]);
    }

    #[test]
    fn i64x2_minmax_select() {
        let a = I64x2::from_array([i64::MIN, 5]);
        let b = I64x2::from_array([0, -5]);
        assert_eq!(a.min(b).to_array(), [i64::MIN, -5]);
        assert_eq!(a.max(b).to_array(), [0, 5]);
    }

    #[test]
    fn i64_f64_exact() {
        let v = I64x2::from_array([(1 << 53) + 2, -(1 << 53) - 2]);
        let f = F64x2::from_i64x2(v).to_array();
        assert_eq!(f, [((1i64 << 53) + 2) as f64, (-(1i64 << 53) - 2) as f64]);
    }

    #[test]
    fn u32_round_before_convert() {
        let v = F32x4::from_array([0.5, 1.5, 2.4, 2.6]);
        assert_eq!(v.to_u32x4_round().to_array(), [0, 2, 2, 3]);
    }
}
