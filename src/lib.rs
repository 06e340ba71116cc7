//! Small fixed-width SIMD vectors with one uniform API across x86-64 SSE2,
//! AArch64 NEON, and a portable fallback.
//!
//! Every type occupies a single 128-bit register. The backend is chosen at
//! compile time from the target architecture; there is no runtime dispatch
//! and no feature detection. The 2- and 3-lane types sit in a full register
//! with zeroed padding lanes, and the crate keeps those lanes zero so that
//! narrow vectors behave exactly like their element count says.
//!
//! # Examples
//!
//! ```
//! use chispa::{F32x3, I32x4, U32x4};
//!
//! // Padded division cannot fault: the discarded lane divides by 1.0.
//! let v = F32x3::new(3.0, 6.0, 9.0) / F32x3::splat(3.0);
//! assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
//!
//! // Right shift follows the element type: arithmetic for signed lanes,
//! // logical for unsigned.
//! assert_eq!((I32x4::splat(-8) >> 1).to_array(), [-4; 4]);
//! assert_eq!((U32x4::splat(8) >> 1).to_array(), [4; 4]);
//! ```
//!
//! # Conversion semantics
//!
//! Float to signed integer truncates toward zero, like `as`. Float to
//! unsigned integer rounds to nearest (ties to even) first, because both
//! SIMD instruction sets reach unsigned values through a rounding convert.
//! The 64-bit integer/f64 conversions on x86 use an exponent-bias bit trick
//! that is exact for magnitudes up to 2^51; NEON and the portable backend
//! cover the full range.

mod backends;
mod error;
mod float32;
mod float64;
mod int32;
mod int64;
mod uint32;
mod uint64;

#[cfg(feature = "bytemuck")]
mod interop;

pub use error::LaneError;
pub use float32::{F32x2, F32x3, F32x4};
pub use float64::F64x2;
pub use int32::{I32x2, I32x3, I32x4};
pub use int64::I64x2;
pub use uint32::{U32x2, U32x3, U32x4};
pub use uint64::U64x2;

/// Instruction set the crate was compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// x86-64 SSE2 (baseline on every x86-64 target).
    Sse2,
    /// AArch64 NEON (baseline on every AArch64 target).
    Neon,
    /// Portable lane-by-lane fallback.
    Scalar,
}

impl Backend {
    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Sse2 => "sse2",
            Backend::Neon => "neon",
            Backend::Scalar => "scalar",
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reports which backend this build compiled in.
///
/// The choice is fixed at compile time by the target architecture; this
/// exists for logging and test diagnostics.
#[must_use]
pub const fn active_backend() -> Backend {
    #[cfg(target_arch = "x86_64")]
    return Backend::Sse2;
    #[cfg(target_arch = "aarch64")]
    return Backend::Neon;
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    Backend::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_matches_target() {
        let b = active_backend();
        #[cfg(target_arch = "x86_64")]
        assert_eq!(b, Backend::Sse2);
        #[cfg(target_arch = "aarch64")]
        assert_eq!(b, Backend::Neon);
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        assert_eq!(b, Backend::Scalar);
        assert!(!b.name().is_empty());
    }

    #[test]
    fn backend_display() {
        assert_eq!(Backend::Sse2.to_string(), "sse2");
        assert_eq!(Backend::Neon.to_string(), "neon");
        assert_eq!(Backend::Scalar.to_string(), "scalar");
    }

    #[test]
    fn all_types_are_one_register_wide() {
        use core::mem::size_of;
        assert_eq!(size_of::<F32x2>(), 16);
        assert_eq!(size_of::<F32x3>(), 16);
        assert_eq!(size_of::<F32x4>(), 16);
        assert_eq!(size_of::<F64x2>(), 16);
        assert_eq!(size_of::<I32x2>(), 16);
        assert_eq!(size_of::<I32x3>(), 16);
        assert_eq!(size_of::<I32x4>(), 16);
        assert_eq!(size_of::<U32x2>(), 16);
        assert_eq!(size_of::<U32x3>(), 16);
        assert_eq!(size_of::<U32x4>(), 16);
        assert_eq!(size_of::<I64x2>(), 16);
        assert_eq!(size_of::<U64x2>(), 16);
    }
}
