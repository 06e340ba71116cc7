//! Property tests comparing vector results against per-lane scalar
//! arithmetic on the compiled backend.

use chispa::{F32x4, F64x2, I32x4, I64x2, U32x4, U64x2};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 50;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn f32_add_matches_scalar(a in prop::array::uniform4(-1e6f32..1e6), b in prop::array::uniform4(-1e6f32..1e6)) {
        let v = F32x4::from_array(a) + F32x4::from_array(b);
        let expected = [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]];
        prop_assert_eq!(v.to_array(), expected);
    }

    #[test]
    fn f32_mul_is_commutative(a in prop::array::uniform4(-1e3f32..1e3), b in prop::array::uniform4(-1e3f32..1e3)) {
        let (x, y) = (F32x4::from_array(a), F32x4::from_array(b));
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn f64_div_matches_scalar(a in prop::array::uniform2(-1e9f64..1e9), b in prop::array::uniform2(1e-3f64..1e9)) {
        let v = F64x2::from_array(a) / F64x2::from_array(b);
        prop_assert_eq!(v.to_array(), [a[0] / b[0], a[1] / b[1]]);
    }

    #[test]
    fn i32_arithmetic_wraps_like_scalar(a in prop::array::uniform4(any::<i32>()), b in prop::array::uniform4(any::<i32>())) {
        let (x, y) = (I32x4::from_array(a), I32x4::from_array(b));
        prop_assert_eq!((x + y).to_array(), [
            a[0].wrapping_add(b[0]),
            a[1].wrapping_add(b[1]),
            a[2].wrapping_add(b[2]),
            a[3].wrapping_add(b[3]),
        ]);
        prop_assert_eq!((x * y).to_array(), [
            a[0].wrapping_mul(b[0]),
            a[1].wrapping_mul(b[1]),
            a[2].wrapping_mul(b[2]),
            a[3].wrapping_mul(b[3]),
        ]);
    }

    #[test]
    fn i32_min_max_match_scalar(a in prop::array::uniform4(any::<i32>()), b in prop::array::uniform4(any::<i32>())) {
        let (x, y) = (I32x4::from_array(a), I32x4::from_array(b));
        prop_assert_eq!(x.min(y).to_array(), [
            a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2]), a[3].min(b[3]),
        ]);
        prop_assert_eq!(x.max(y).to_array(), [
            a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2]), a[3].max(b[3]),
        ]);
    }

    #[test]
    fn u32_min_max_are_unsigned(a in prop::array::uniform4(any::<u32>()), b in prop::array::uniform4(any::<u32>())) {
        let (x, y) = (U32x4::from_array(a), U32x4::from_array(b));
        prop_assert_eq!(x.min(y).to_array(), [
            a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2]), a[3].min(b[3]),
        ]);
        prop_assert_eq!(x.max(y).to_array(), [
            a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2]), a[3].max(b[3]),
        ]);
    }

    #[test]
    fn i32_shifts_match_scalar(a in prop::array::uniform4(any::<i32>()), n in 0u32..32) {
        let v = I32x4::from_array(a);
        prop_assert_eq!((v << n).to_array(), [a[0] << n, a[1] << n, a[2] << n, a[3] << n]);
        prop_assert_eq!((v >> n).to_array(), [a[0] >> n, a[1] >> n, a[2] >> n, a[3] >> n]);
    }

    #[test]
    fn u32_shift_is_logical(a in prop::array::uniform4(any::<u32>()), n in 0u32..32) {
        let v = U32x4::from_array(a);
        prop_assert_eq!((v >> n).to_array(), [a[0] >> n, a[1] >> n, a[2] >> n, a[3] >> n]);
    }

    #[test]
    fn i64_shift_is_arithmetic(a in prop::array::uniform2(any::<i64>()), n in 0u32..64) {
        let v = I64x2::from_array(a);
        prop_assert_eq!((v >> n).to_array(), [a[0] >> n, a[1] >> n]);
    }

    #[test]
    fn unsigned_abs_matches_scalar(a in prop::array::uniform4(any::<i32>())) {
        let v = I32x4::from_array(a).unsigned_abs();
        prop_assert_eq!(v.to_array(), [
            a[0].unsigned_abs(),
            a[1].unsigned_abs(),
            a[2].unsigned_abs(),
            a[3].unsigned_abs(),
        ]);
    }

    #[test]
    fn bitwise_ops_match_scalar(a in prop::array::uniform2(any::<u64>()), b in prop::array::uniform2(any::<u64>())) {
        let (x, y) = (U64x2::from_array(a), U64x2::from_array(b));
        prop_assert_eq!((x & y).to_array(), [a[0] & b[0], a[1] & b[1]]);
        prop_assert_eq!((x | y).to_array(), [a[0] | b[0], a[1] | b[1]]);
        prop_assert_eq!((x ^ y).to_array(), [a[0] ^ b[0], a[1] ^ b[1]]);
        prop_assert_eq!(x.and_not(y).to_array(), [a[0] & !b[0], a[1] & !b[1]]);
        prop_assert_eq!((!x).to_array(), [!a[0], !a[1]]);
    }

    #[test]
    fn f32_to_i32_truncates(a in prop::array::uniform4(-1e6f32..1e6)) {
        let v = F32x4::from_array(a).to_i32x4();
        prop_assert_eq!(v.to_array(), [a[0] as i32, a[1] as i32, a[2] as i32, a[3] as i32]);
    }

    #[test]
    fn f32_to_u32_rounds(a in prop::array::uniform4(0.0f32..1e6)) {
        let v = F32x4::from_array(a).to_u32x4();
        let expected = [
            a[0].round_ties_even() as u32,
            a[1].round_ties_even() as u32,
            a[2].round_ties_even() as u32,
            a[3].round_ties_even() as u32,
        ];
        prop_assert_eq!(v.to_array(), expected);
    }

    #[test]
    fn f64_to_i64_truncates(a in prop::array::uniform2(-1e12f64..1e12)) {
        let v = F64x2::from_array(a).to_i64x2();
        prop_assert_eq!(v.to_array(), [a[0] as i64, a[1] as i64]);
    }

    #[test]
    fn i64_f64_round_trip_in_exact_range(a in prop::array::uniform2(-(1i64 << 51)..(1i64 << 51))) {
        let v = I64x2::from_array(a);
        prop_assert_eq!(v.to_f64x2().to_i64x2(), v);
    }

    #[test]
    fn u64_f64_round_trip_in_exact_range(a in prop::array::uniform2(0u64..(1u64 << 51))) {
        let v = U64x2::from_array(a);
        prop_assert_eq!(v.to_f64x2().to_u64x2(), v);
    }

    #[test]
    fn splat_extract_round_trip(x in any::<i32>(), i in 0usize..4) {
        prop_assert_eq!(I32x4::splat(x).extract(i), x);
    }

    #[test]
    fn array_round_trip(a in prop::array::uniform4(any::<u32>())) {
        prop_assert_eq!(U32x4::from_array(a).to_array(), a);
    }

    #[test]
    fn replace_touches_one_lane(a in prop::array::uniform4(any::<i32>()), i in 0usize..4, x in any::<i32>()) {
        let mut v = I32x4::from_array(a);
        v.replace(i, x);
        let mut expected = a;
        expected[i] = x;
        prop_assert_eq!(v.to_array(), expected);
    }

    #[test]
    fn bitcast_round_trips(a in prop::array::uniform4(any::<i32>())) {
        let v = I32x4::from_array(a);
        prop_assert_eq!(v.cast_unsigned().cast_signed(), v);
    }
}
