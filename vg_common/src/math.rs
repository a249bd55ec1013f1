// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers used by the geometry and rasterization code.

use crate::types::Float32;

/// Half-width of the interval [`is_near_zero`] accepts.
pub const NEAR_ZERO_EPSILON: Float32 = 0.0001;

/// Converts degrees to radians.
///
/// The product is formed in double precision with a full precision π, so repeated
/// conversions don't drift.
#[inline]
pub fn deg_to_rad(a: Float32) -> Float32 {
    (f64::from(a) * core::f64::consts::PI / 180.0) as Float32
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(a: Float32) -> Float32 {
    (f64::from(a) * 180.0 / core::f64::consts::PI) as Float32
}

/// Absolute value by comparison against zero.
///
/// Unlike [`f32::abs`] this leaves `-0.0` and NaN untouched.
#[inline]
pub fn abs(a: Float32) -> Float32 {
    if a < 0.0 {
        -a
    } else {
        a
    }
}

/// The larger of `a` and `b`; `b` if they are unordered.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// The smaller of `a` and `b`; `b` if they are unordered.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Whether `a` lies in `[-0.0001, 0.0001)`.
///
/// The upper bound is exclusive. Curve and line code relies on exactly this interval before
/// dividing.
#[inline]
pub fn is_near_zero(a: Float32) -> bool {
    a >= -NEAR_ZERO_EPSILON && a < NEAR_ZERO_EPSILON
}

/// Exchanges two values.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

/// Exchanges two elements of a slice. `i == j` is a no-op.
///
/// # Panics
///
/// If either index is out of bounds.
#[inline]
pub fn swap_at<T>(values: &mut [T], i: usize, j: usize) {
    values.swap(i, j);
}

/// Clamps `a` into `[min, max]` in place.
///
/// `a` is only written when it lies outside the range. Calling this with `min > max` is a
/// contract violation; the result is unspecified and only debug builds check it.
#[inline]
pub fn clamp_in_place<T: PartialOrd + Copy>(a: &mut T, min: T, max: T) {
    debug_assert!(!(min > max), "clamp_in_place called with min > max");
    if *a < min {
        *a = min;
    } else if *a > max {
        *a = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_bounds() {
        assert!(is_near_zero(-0.0001));
        assert!(is_near_zero(0.0));
        assert!(is_near_zero(-0.0));
        assert!(is_near_zero(0.000_099));
        assert!(!is_near_zero(0.0001));
        assert!(!is_near_zero(0.001));
        assert!(!is_near_zero(-0.000_11));
        assert!(!is_near_zero(f32::NAN));
    }

    #[test]
    fn angle_conversion() {
        assert_eq!(deg_to_rad(180.0), core::f32::consts::PI);
        assert_eq!(rad_to_deg(core::f32::consts::FRAC_PI_2), 90.0);
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert!(abs(rad_to_deg(deg_to_rad(-720.0)) + 720.0) < 1e-4);
    }

    #[test]
    fn abs_min_max() {
        assert_eq!(abs(-3.5), 3.5);
        assert_eq!(abs(2.0), 2.0);
        assert!(abs(-0.0).is_sign_negative());
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(max(3, -3), 3);
        assert_eq!(min(3, -3), -3);
    }

    #[test]
    fn swap_values() {
        let mut a = 1.0_f32;
        let mut b = 2.0_f32;
        swap(&mut a, &mut b);
        assert_eq!((a, b), (2.0, 1.0));

        let mut v = [1.0_f32, 2.0, 3.0];
        swap_at(&mut v, 1, 1);
        assert_eq!(v, [1.0, 2.0, 3.0]);
        swap_at(&mut v, 0, 2);
        assert_eq!(v, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn clamp() {
        let mut a = -5.0_f32;
        clamp_in_place(&mut a, 0.0, 1.0);
        assert_eq!(a, 0.0);

        a = 5.0;
        clamp_in_place(&mut a, 0.0, 1.0);
        assert_eq!(a, 1.0);

        a = 0.25;
        clamp_in_place(&mut a, 0.0, 1.0);
        assert_eq!(a, 0.25);

        let mut depth = 40_u32;
        clamp_in_place(&mut depth, 0, 16);
        assert_eq!(depth, 16);
    }
}
