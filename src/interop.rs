//! bytemuck impls, behind the `bytemuck` feature
//!
//! Only the full-width types are `Pod`: casting arbitrary bytes into a
//! padded type could plant nonzero values in the padding lanes, which the
//! rest of the crate assumes are zero. The padded types are `Zeroable` only.

use bytemuck::{Pod, Zeroable};

use crate::{F32x2, F32x3, F32x4, F64x2, I32x2, I32x3, I32x4, I64x2, U32x2, U32x3, U32x4, U64x2};

// SAFETY: every type is a repr(transparent) wrapper over one 128-bit
// register with no padding bytes; the all-zero pattern is valid and keeps
// the padding-lane invariant.
unsafe impl Zeroable for F32x4 {}
unsafe impl Zeroable for F32x3 {}
unsafe impl Zeroable for F32x2 {}
unsafe impl Zeroable for F64x2 {}
unsafe impl Zeroable for I32x4 {}
unsafe impl Zeroable for I32x3 {}
unsafe impl Zeroable for I32x2 {}
unsafe impl Zeroable for U32x4 {}
unsafe impl Zeroable for U32x3 {}
unsafe impl Zeroable for U32x2 {}
unsafe impl Zeroable for I64x2 {}
unsafe impl Zeroable for U64x2 {}

// SAFETY: all lanes are live in these types, so any 16-byte pattern is a
// valid value.
unsafe impl Pod for F32x4 {}
unsafe impl Pod for F64x2 {}
unsafe impl Pod for I32x4 {}
unsafe impl Pod for U32x4 {}
unsafe impl Pod for I64x2 {}
unsafe impl Pod for U64x2 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_slice_round_trip() {
        let vs = [F32x4::new(1.0, 2.0, 3.0, 4.0), F32x4::splat(-1.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, -1.0, -1.0, -1.0, -1.0]);

        let back: &[F32x4] = bytemuck::cast_slice(floats);
        assert_eq!(back, &vs);
    }

    #[test]
    fn zeroed_padded_type_is_default() {
        let z: F32x3 = Zeroable::zeroed();
        assert_eq!(z, F32x3::default());
    }

    #[test]
    fn int_bytes_round_trip() {
        let v = I64x2::new(i64::MIN, -1);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytemuck::pod_read_unaligned::<I64x2>(bytes), v);
    }
}
