// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate holds the numeric foundation of the vg renderer: fixed-width numeric types,
//! IEEE-754 bit utilities, the small float helpers used throughout path and paint code,
//! the object construction convention and the table of hard implementation limits.
//!
//! # Usage
//!
//! Renderer components should refer to the aliases in [`types`] rather than to primitive
//! types directly, and size their internal buffers from the constants in [`limits`].
//!
//! ```
//! use vg_common::limits::{GRADIENT_TEX_COORD_SIZE, GRADIENT_TEX_SIZE};
//! use vg_common::float_bits::MAX_FLOAT;
//!
//! assert_eq!(GRADIENT_TEX_COORD_SIZE, GRADIENT_TEX_SIZE * 4);
//! assert!(MAX_FLOAT.is_finite());
//! ```
//!
//! # Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//! - `c-types`: Map the integer aliases onto the native C types of the target.
//!   The build fails if those types don't have the expected widths.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
#![cfg_attr(feature = "libm", doc = "[libm]: libm")]
#![cfg_attr(not(feature = "libm"), doc = "[libm]: https://crates.io/crates/libm")]
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![no_std]

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod float_bits;
pub mod limits;
pub mod math;
pub mod object;
pub mod types;

use alloc::collections::TryReserveError;
use thiserror::Error;

pub use float_bits::{max_float, FloatInt, MAX_FLOAT};
pub use limits::{LimitParam, Limits};
pub use object::{delete_obj, deinit_obj, init_obj, new_obj, new_obj_in, EngineObject, ObjBox};
pub use types::{Float, Float32, Int, Int16, Int32, Int8, Uint, Uint16, Uint32, Uint8};

/// Errors reported by the numeric layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An image dimension was zero or negative.
    #[error("Image dimensions must be positive, got {width}x{height}")]
    IllegalImageSize { width: Int, height: Int },
    /// An image exceeds one of the image limits.
    #[error("Image of {width}x{height} with {bytes_per_pixel} bytes per pixel exceeds the implementation limits")]
    ImageTooLarge {
        width: Int,
        height: Int,
        bytes_per_pixel: Int,
    },
    /// A path produced more vertices than the tessellator may emit.
    #[error("{count} vertices exceed the maximum of {max}")]
    TooManyVertices { count: usize, max: Int },
    /// Curve subdivision went deeper than allowed.
    #[error("Recursion depth {depth} exceeds the maximum of {max}")]
    RecursionTooDeep { depth: Uint, max: Uint },
    /// A parameter code that doesn't name a queryable limit.
    #[error("Unknown limit parameter {0:#06x}")]
    UnknownParam(Uint),
    /// Storage for an object could not be reserved.
    #[error("Couldn't reserve object storage")]
    Alloc(#[from] TryReserveError),
}

/// Specialization of `Result` for the numeric layer.
pub type Result<T, E = Error> = core::result::Result<T, E>;
