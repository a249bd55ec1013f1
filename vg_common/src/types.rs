// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-width numeric types.
//!
//! All renderer code uses these aliases instead of naming primitive or platform types, so that
//! the widths seen by the tessellator, the paint code and the graphics API binding are the
//! same on every target.
//!
//! By default the aliases resolve to Rust's fixed-width integers. With the `c-types` feature
//! they resolve to the native C types of the target instead, which is what the graphics API
//! headers use. That mapping assumes `char`, `short` and `int` are 8, 16 and 32 bits wide;
//! the assertions at the bottom of this module fail the build on a target where they aren't.

use static_assertions::const_assert_eq;

#[cfg(not(feature = "c-types"))]
mod resolved {
    pub type Int8 = i8;
    pub type Uint8 = u8;
    pub type Int16 = i16;
    pub type Uint16 = u16;
    pub type Int32 = i32;
    pub type Uint32 = u32;
}

#[cfg(feature = "c-types")]
mod resolved {
    pub type Int8 = core::ffi::c_schar;
    pub type Uint8 = core::ffi::c_uchar;
    pub type Int16 = core::ffi::c_short;
    pub type Uint16 = core::ffi::c_ushort;
    pub type Int32 = core::ffi::c_int;
    pub type Uint32 = core::ffi::c_uint;
}

/// Signed 8-bit integer.
pub type Int8 = resolved::Int8;
/// Unsigned 8-bit integer.
pub type Uint8 = resolved::Uint8;
/// Signed 16-bit integer.
pub type Int16 = resolved::Int16;
/// Unsigned 16-bit integer.
pub type Uint16 = resolved::Uint16;
/// Signed 32-bit integer.
pub type Int32 = resolved::Int32;
/// Unsigned 32-bit integer.
pub type Uint32 = resolved::Uint32;
/// IEEE-754 single precision float.
pub type Float32 = f32;

/// The default signed integer of the renderer.
pub type Int = Int32;
/// The default unsigned integer of the renderer.
pub type Uint = Uint32;
/// The default float of the renderer.
pub type Float = Float32;

/// Largest value of [`Int`].
pub const MAX_INT: Int = 0x7fff_ffff;
/// Smallest value of [`Int`].
pub const MIN_INT: Int = -0x7fff_ffff - 1;

const_assert_eq!(core::mem::size_of::<Int8>(), 1);
const_assert_eq!(core::mem::size_of::<Uint8>(), 1);
const_assert_eq!(core::mem::size_of::<Int16>(), 2);
const_assert_eq!(core::mem::size_of::<Uint16>(), 2);
const_assert_eq!(core::mem::size_of::<Int32>(), 4);
const_assert_eq!(core::mem::size_of::<Uint32>(), 4);
const_assert_eq!(core::mem::size_of::<Float32>(), 4);

// Signedness can't be read off the size, so check the extremes too.
const_assert_eq!(Int8::MIN as i64, i8::MIN as i64);
const_assert_eq!(Uint8::MAX as u64, u8::MAX as u64);
const_assert_eq!(Int16::MIN as i64, i16::MIN as i64);
const_assert_eq!(Uint16::MAX as u64, u16::MAX as u64);
const_assert_eq!(Int32::MIN as i64, i32::MIN as i64);
const_assert_eq!(Uint32::MAX as u64, u32::MAX as u64);

const_assert_eq!(MAX_INT as i64, i32::MAX as i64);
const_assert_eq!(MIN_INT as i64, i32::MIN as i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_widths() {
        assert_eq!(Int8::BITS, 8);
        assert_eq!(Uint8::BITS, 8);
        assert_eq!(Int16::BITS, 16);
        assert_eq!(Uint16::BITS, 16);
        assert_eq!(Int32::BITS, 32);
        assert_eq!(Uint32::BITS, 32);
        assert_eq!(Float32::MANTISSA_DIGITS, 24);
    }

    #[test]
    fn int_extremes() {
        assert_eq!(MAX_INT, Int::MAX);
        assert_eq!(MIN_INT, Int::MIN);
        assert_eq!(MAX_INT.wrapping_add(1), MIN_INT);
    }
}
