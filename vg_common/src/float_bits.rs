// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! IEEE-754 single precision bit layout and the largest finite float.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::types::{Float32, Uint32};

/// Number of sign bits in a [`Float32`].
pub const SIGN_BITS: Uint32 = 1;
/// Number of exponent bits in a [`Float32`].
pub const EXPONENT_BITS: Uint32 = 8;
/// Number of mantissa bits in a [`Float32`], not counting the implicit leading one.
pub const MANTISSA_BITS: Uint32 = 23;

const_assert_eq!(SIGN_BITS + EXPONENT_BITS + MANTISSA_BITS, 32);
const_assert_eq!(SIGN_BITS + EXPONENT_BITS + MANTISSA_BITS, Uint32::BITS);
const_assert_eq!(MANTISSA_BITS + 1, Float32::MANTISSA_DIGITS);

/// Mask selecting the sign bit.
pub const SIGN_MASK: Uint32 = 1 << (EXPONENT_BITS + MANTISSA_BITS);
/// Mask selecting the exponent field.
pub const EXPONENT_MASK: Uint32 = ((1 << EXPONENT_BITS) - 1) << MANTISSA_BITS;
/// Mask selecting the mantissa field.
pub const MANTISSA_MASK: Uint32 = (1 << MANTISSA_BITS) - 1;

const_assert_eq!(SIGN_MASK | EXPONENT_MASK | MANTISSA_MASK, Uint32::MAX);

/// Largest exponent field of a finite float.
///
/// The all-ones exponent encodes infinity and NaN, so one less than that.
pub const MAX_EXPONENT: Uint32 = (1 << EXPONENT_BITS) - 2;
/// Largest mantissa field.
pub const MAX_MANTISSA: Uint32 = (1 << MANTISSA_BITS) - 1;
/// Bit pattern of the largest finite float.
pub const MAX_FLOAT_BITS: Uint32 = (MAX_EXPONENT << MANTISSA_BITS) | MAX_MANTISSA;

const_assert_eq!(MAX_FLOAT_BITS, 0x7f7f_ffff);

/// The largest finite [`Float32`].
///
/// Use this wherever a finite upper bound is needed that never compares equal to NaN or
/// infinity.
pub const MAX_FLOAT: Float32 = Float32::from_bits(MAX_FLOAT_BITS);

/// Computes the largest finite [`Float32`] from its exponent and mantissa fields.
///
/// Always equal to [`MAX_FLOAT`].
#[inline]
pub fn max_float() -> Float32 {
    FloatInt::from_parts(false, MAX_EXPONENT, MAX_MANTISSA).to_float()
}

/// A 32-bit value that reads either as a [`Float32`] or as its [`Uint32`] bit pattern.
///
/// Converting between the two views never changes a bit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct FloatInt(Uint32);

impl FloatInt {
    /// Wraps a raw bit pattern.
    #[inline]
    pub const fn from_bits(bits: Uint32) -> Self {
        Self(bits)
    }

    /// Wraps the bits of a float.
    #[inline]
    pub fn from_float(f: Float32) -> Self {
        Self(bytemuck::cast(f))
    }

    /// Composes a float from its sign, exponent and mantissa fields.
    ///
    /// Fields wider than their slot are truncated to it.
    #[inline]
    pub const fn from_parts(negative: bool, exponent: Uint32, mantissa: Uint32) -> Self {
        let sign = if negative { SIGN_MASK } else { 0 };
        Self(sign | ((exponent << MANTISSA_BITS) & EXPONENT_MASK) | (mantissa & MANTISSA_MASK))
    }

    /// The integer view.
    #[inline]
    pub const fn bits(self) -> Uint32 {
        self.0
    }

    /// The float view.
    #[inline]
    pub fn to_float(self) -> Float32 {
        bytemuck::cast(self.0)
    }

    /// Overwrites the storage through the integer view.
    #[inline]
    pub fn set_bits(&mut self, bits: Uint32) {
        self.0 = bits;
    }

    /// Overwrites the storage through the float view.
    #[inline]
    pub fn set_float(&mut self, f: Float32) {
        self.0 = bytemuck::cast(f);
    }

    /// Whether the sign bit is set.
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// The biased exponent field.
    #[inline]
    pub const fn exponent(self) -> Uint32 {
        (self.0 & EXPONENT_MASK) >> MANTISSA_BITS
    }

    /// The mantissa field.
    #[inline]
    pub const fn mantissa(self) -> Uint32 {
        self.0 & MANTISSA_MASK
    }

    /// True iff the exponent is all ones and the mantissa is nonzero.
    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 & EXPONENT_MASK == EXPONENT_MASK && self.0 & MANTISSA_MASK != 0
    }

    /// True iff the exponent is all ones and the mantissa is zero.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 & !SIGN_MASK == EXPONENT_MASK
    }
}

impl From<Float32> for FloatInt {
    fn from(f: Float32) -> Self {
        Self::from_float(f)
    }
}

impl From<FloatInt> for Float32 {
    fn from(v: FloatInt) -> Self {
        v.to_float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_float_is_largest_finite() {
        let v = max_float();
        assert!(v.is_finite());
        assert!(!v.is_nan());
        assert!(v > 3.0e38);
        assert!(v < f32::INFINITY);
        assert_eq!(v, f32::MAX);
        assert_eq!(v.to_bits(), MAX_FLOAT_BITS);
        assert_eq!(MAX_FLOAT, v);
    }

    #[test]
    fn next_pattern_is_infinity() {
        let inf = FloatInt::from_bits(MAX_FLOAT_BITS + 1);
        assert!(inf.is_infinite());
        assert_eq!(inf.to_float(), f32::INFINITY);
    }

    #[test]
    fn views_share_storage() {
        let mut v = FloatInt::default();
        v.set_float(1.0);
        assert_eq!(v.bits(), 0x3f80_0000);
        v.set_bits(0xc000_0000);
        assert_eq!(v.to_float(), -2.0);
        assert!(v.is_sign_negative());
        assert_eq!(v.exponent(), 128);
        assert_eq!(v.mantissa(), 0);
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let v = FloatInt::from(-0.0_f32);
        assert_eq!(v.bits(), SIGN_MASK);
        assert!(!v.is_nan());
        assert!(!FloatInt::from(0.0_f32).is_nan());
    }

    #[test]
    fn nan_patterns() {
        assert!(FloatInt::from_bits(0x7f80_0001).is_nan());
        assert!(FloatInt::from_bits(0xffc0_0000).is_nan());
        assert!(FloatInt::from(f32::NAN).is_nan());
        assert!(!FloatInt::from_bits(0x7f80_0000).is_nan());
        assert!(!FloatInt::from_bits(0xff80_0000).is_nan());
        assert!(FloatInt::from_bits(0xff80_0000).is_infinite());
    }

    #[test]
    fn parts_are_truncated() {
        let v = FloatInt::from_parts(false, 0x1ff, 0xffff_ffff);
        assert_eq!(v.exponent(), 0xff);
        assert_eq!(v.mantissa(), MANTISSA_MASK);
        assert!(v.is_nan());
    }
}
