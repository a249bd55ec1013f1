// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portable single precision float functions.
//!
//! One backend is selected when the crate is built: `std` uses the inherent `f32` methods
//! (likely your target's libc), `libm` uses the [`libm`](https://crates.io/crates/libm)
//! implementations for `no_std` targets. `std` wins if both are enabled. All backends agree
//! on [`is_nan`]: true exactly when the exponent field is all ones and the mantissa nonzero.

#[cfg(all(feature = "libm", not(feature = "std")))]
mod libm_backend;
#[cfg(feature = "std")]
mod std_backend;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm_backend::Libm;
#[cfg(feature = "std")]
pub use std_backend::Std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vg_common requires either the `std` or `libm` feature");

use crate::types::Float32;

/// The float functions a backend provides.
pub trait FloatBackend {
    fn is_nan(x: Float32) -> bool;
    fn sqrt(x: Float32) -> Float32;
    fn cos(x: Float32) -> Float32;
    fn sin(x: Float32) -> Float32;
    fn acos(x: Float32) -> Float32;
    fn asin(x: Float32) -> Float32;
    fn atan(x: Float32) -> Float32;
    fn floor(x: Float32) -> Float32;
    fn ceil(x: Float32) -> Float32;
}

/// The backend selected for this build.
#[cfg(feature = "std")]
pub type Selected = Std;
/// The backend selected for this build.
#[cfg(all(feature = "libm", not(feature = "std")))]
pub type Selected = Libm;

/// Whether `x` is not a number.
#[inline]
pub fn is_nan(x: Float32) -> bool {
    Selected::is_nan(x)
}

/// Square root.
#[inline]
pub fn sqrt(x: Float32) -> Float32 {
    Selected::sqrt(x)
}

/// Cosine of `x` radians.
#[inline]
pub fn cos(x: Float32) -> Float32 {
    Selected::cos(x)
}

/// Sine of `x` radians.
#[inline]
pub fn sin(x: Float32) -> Float32 {
    Selected::sin(x)
}

/// Arccosine, in radians.
#[inline]
pub fn acos(x: Float32) -> Float32 {
    Selected::acos(x)
}

/// Arcsine, in radians.
#[inline]
pub fn asin(x: Float32) -> Float32 {
    Selected::asin(x)
}

/// Arctangent, in radians.
#[inline]
pub fn atan(x: Float32) -> Float32 {
    Selected::atan(x)
}

#[inline]
pub fn floor(x: Float32) -> Float32 {
    Selected::floor(x)
}

#[inline]
pub fn ceil(x: Float32) -> Float32 {
    Selected::ceil(x)
}
