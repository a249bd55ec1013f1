// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::FloatBackend;
use crate::float_bits::FloatInt;
use crate::types::Float32;

/// Float functions from `libm`, for targets without `std`.
#[derive(Copy, Clone, Debug)]
pub struct Libm;

impl FloatBackend for Libm {
    // libm has no classification functions, so test the bits directly.
    #[inline]
    fn is_nan(x: Float32) -> bool {
        FloatInt::from_float(x).is_nan()
    }

    #[inline]
    fn sqrt(x: Float32) -> Float32 {
        libm::sqrtf(x)
    }

    #[inline]
    fn cos(x: Float32) -> Float32 {
        libm::cosf(x)
    }

    #[inline]
    fn sin(x: Float32) -> Float32 {
        libm::sinf(x)
    }

    #[inline]
    fn acos(x: Float32) -> Float32 {
        libm::acosf(x)
    }

    #[inline]
    fn asin(x: Float32) -> Float32 {
        libm::asinf(x)
    }

    #[inline]
    fn atan(x: Float32) -> Float32 {
        libm::atanf(x)
    }

    #[inline]
    fn floor(x: Float32) -> Float32 {
        libm::floorf(x)
    }

    #[inline]
    fn ceil(x: Float32) -> Float32 {
        libm::ceilf(x)
    }
}
