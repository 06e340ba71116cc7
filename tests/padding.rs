//! Behavioral checks for the narrow (padded) types and the conversion
//! corner cases.

use chispa::{F32x2, F32x3, F32x4, F64x2, I32x2, I32x3, I32x4, LaneError, U32x2, U32x3, U32x4, U64x2};

#[test]
fn padded_division_chain_stays_finite() {
    // A long chain of divisions would blow up immediately if the discarded
    // lane ever divided zero by zero.
    let mut v = F32x3::new(1024.0, 512.0, 256.0);
    for _ in 0..8 {
        v = v / F32x3::splat(2.0);
    }
    assert_eq!(v.to_array(), [4.0, 2.0, 1.0]);
}

#[test]
fn two_lane_division() {
    let v = F32x2::new(1.0, -9.0) / F32x2::new(4.0, 3.0);
    assert_eq!(v.to_array(), [0.25, -3.0]);
}

#[test]
fn shift_signedness() {
    assert_eq!((I32x4::splat(-8) >> 1).to_array(), [-4; 4]);
    assert_eq!(
        (U32x4::splat(0x8000_0000u32) >> 1).to_array(),
        [0x4000_0000; 4]
    );
    assert_eq!((I32x3::splat(-8) >> 1).to_array(), [-4; 3]);
}

#[test]
fn complement_on_narrow_types() {
    // !0 must come back as all ones in the live lanes and still compare
    // equal to a freshly built vector.
    assert_eq!(!I32x3::splat(0), I32x3::splat(-1));
    assert_eq!(!U32x2::splat(0), U32x2::splat(u32::MAX));
}

#[test]
fn narrow_types_compare_on_live_lanes() {
    let mut a = I32x3::new(1, 2, 3);
    a.replace(2, 30);
    assert_eq!(a, I32x3::new(1, 2, 30));
    assert_ne!(a, I32x3::new(1, 2, 3));
}

#[test]
fn float_int_round_trip_at_f32_precision_limit() {
    let v = F32x4::splat((1 << 24) as f32);
    assert_eq!(v.to_i32x4().to_f32x4(), v);
}

#[test]
fn unsigned_conversion_rounds_signed_truncates() {
    let v = F32x4::new(0.5, 1.5, 2.5, 3.49);
    assert_eq!(v.to_i32x4().to_array(), [0, 1, 2, 3]);
    assert_eq!(v.to_u32x4().to_array(), [0, 2, 2, 3]);
}

#[test]
fn narrow_conversion_keeps_order() {
    let v = F32x3::new(-1.9, 2.9, 0.0).to_i32x3();
    assert_eq!(v.to_array(), [-1, 2, 0]);
    let w = F32x2::new(1.5, 2.5).to_u32x2();
    assert_eq!(w.to_array(), [2, 2]);
}

#[test]
fn widening_and_narrowing_64_bit() {
    let v = I32x2::new(-7, 7).to_i64x2();
    assert_eq!(v.to_array(), [-7i64, 7]);
    assert_eq!(v.to_i32x2(), I32x2::new(-7, 7));

    let w = U32x2::new(u32::MAX, 0).to_u64x2();
    assert_eq!(w.to_array(), [u64::from(u32::MAX), 0]);
}

#[test]
fn u64_f64_conversion_boundary() {
    // 2^51 - 1 is inside the range every backend converts exactly.
    let v = U64x2::new((1 << 51) - 1, 12345);
    assert_eq!(v.to_f64x2().to_u64x2(), v);
}

#[test]
fn f32x2_widens_exactly() {
    let v = F32x2::new(0.1, -0.2).to_f64x2();
    assert_eq!(v.to_array(), [f64::from(0.1f32), f64::from(-0.2f32)]);
    assert_eq!(F64x2::new(1.5, 2.5).to_f32x2().to_array(), [1.5, 2.5]);
}

#[test]
fn large_u32_reaches_f32() {
    let v = U32x3::splat(4_000_000_000).to_f32x3();
    assert_eq!(v.to_array(), [4_000_000_000.0f32; 3]);
}

#[test]
fn slice_construction_checks_length() {
    let data = [1.0f32, 2.0, 3.0];
    assert_eq!(F32x3::try_from(&data[..]).unwrap(), F32x3::new(1.0, 2.0, 3.0));
    assert_eq!(
        F32x3::try_from(&data[..2]).unwrap_err(),
        LaneError::SizeMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn store_writes_exactly_lane_count() {
    let v = I32x3::new(1, 2, 3);
    let mut out = [9i32; 5];
    unsafe { v.store(out[1..].as_mut_ptr()) };
    // One element before and one after the write stay untouched.
    assert_eq!(out, [9, 1, 2, 3, 9]);
}

#[test]
fn default_equals_splat_zero() {
    assert_eq!(F32x3::default(), F32x3::splat(0.0));
    assert_eq!(I32x2::default(), I32x2::splat(0));
    assert_eq!(U32x3::default(), U32x3::splat(0));
}

#[test]
fn reports_a_backend() {
    let b = chispa::active_backend();
    assert!(matches!(
        b,
        chispa::Backend::Sse2 | chispa::Backend::Neon | chispa::Backend::Scalar
    ));
}
