//! Backend implementations for the supported instruction sets
//!
//! Each backend defines the same six full-width register wrappers (`F32x4`,
//! `F64x2`, `I32x4`, `U32x4`, `I64x2`, `U64x2`) with an identical method
//! surface, and exactly one of them is aliased as `active` at compile time.
//! The public lane types in the crate root wrap the active backend's
//! registers; nothing dispatches at runtime.
//!
//! # Backends
//!
//! - `scalar`: portable baseline (plain arrays, per-lane loops). Always
//!   compiled; it is the correctness reference for the SIMD backends' tests.
//! - `sse2`: x86_64 baseline SIMD (128-bit XMM registers).
//! - `neon`: AArch64 SIMD (128-bit Q registers).
//!
//! # Safety
//!
//! SSE2 and NEON are baseline features of their respective targets, so the
//! backend wrappers are safe functions with the intrinsic calls isolated in
//! local `unsafe` blocks. No `unsafe` escapes this module except through the
//! raw-pointer `load`/`store` seam in the public layer.

// On SIMD targets the scalar backend is only reached from tests.
#[cfg_attr(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    allow(dead_code)
)]
pub(crate) mod scalar;

#[cfg(target_arch = "x86_64")]
pub(crate) mod sse2;

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;

#[cfg(target_arch = "x86_64")]
pub(crate) use sse2 as active;

#[cfg(target_arch = "aarch64")]
pub(crate) use neon as active;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) use scalar as active;
