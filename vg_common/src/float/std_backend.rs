// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::FloatBackend;
use crate::types::Float32;

/// Float functions from the standard library.
#[derive(Copy, Clone, Debug)]
pub struct Std;

impl FloatBackend for Std {
    #[inline]
    fn is_nan(x: Float32) -> bool {
        x.is_nan()
    }

    #[inline]
    fn sqrt(x: Float32) -> Float32 {
        x.sqrt()
    }

    #[inline]
    fn cos(x: Float32) -> Float32 {
        x.cos()
    }

    #[inline]
    fn sin(x: Float32) -> Float32 {
        x.sin()
    }

    #[inline]
    fn acos(x: Float32) -> Float32 {
        x.acos()
    }

    #[inline]
    fn asin(x: Float32) -> Float32 {
        x.asin()
    }

    #[inline]
    fn atan(x: Float32) -> Float32 {
        x.atan()
    }

    #[inline]
    fn floor(x: Float32) -> Float32 {
        x.floor()
    }

    #[inline]
    fn ceil(x: Float32) -> Float32 {
        x.ceil()
    }
}
