// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hard implementation limits.
//!
//! Internal buffers and loops are sized from these constants, so they are fixed at compile
//! time. Raising one is a deliberate, versioned change: the gradient lookup table, for
//! instance, is allocated directly from [`GRADIENT_TEX_COORD_SIZE`].
//!
//! [`Limits`] carries the same table as a value. It can be narrowed (e.g. to bound the
//! tessellator more tightly on small devices) but never widened.

use alloc::boxed::Box;
use static_assertions::const_assert_eq;

use crate::float_bits::MAX_FLOAT;
use crate::types::{Float32, Int, Uint, MAX_INT};
use crate::{Error, Result};

/// Maximum number of scissor rectangles.
pub const MAX_SCISSOR_RECTS: Int = 1;
/// Maximum number of entries in a dash pattern.
pub const MAX_DASH_COUNT: Int = MAX_INT;
/// Maximum image width in pixels.
pub const MAX_IMAGE_WIDTH: Int = MAX_INT;
/// Maximum image height in pixels.
pub const MAX_IMAGE_HEIGHT: Int = MAX_INT;
/// Maximum number of pixels in an image.
pub const MAX_IMAGE_PIXELS: Int = MAX_INT;
/// Maximum number of bytes in an image.
pub const MAX_IMAGE_BYTES: Int = MAX_INT;
/// Maximum number of stops in a color ramp; further stops are ignored.
pub const MAX_COLOR_RAMP_STOPS: Int = 256;

/// Maximum number of vertices the tessellator emits for one path.
pub const MAX_VERTICES: Int = 999_999_999;
/// Maximum recursion depth of curve subdivision.
pub const MAX_RECURSE_DEPTH: Uint = 16;

/// Number of texels in a gradient lookup texture.
pub const GRADIENT_TEX_SIZE: usize = 1024;
/// Channels per gradient texel (RGBA).
pub const GRADIENT_CHANNELS: usize = 4;
/// Number of floats in a gradient lookup table.
pub const GRADIENT_TEX_COORD_SIZE: usize = GRADIENT_TEX_SIZE * GRADIENT_CHANNELS;

const_assert_eq!(GRADIENT_TEX_COORD_SIZE, 4096);
const_assert_eq!(GRADIENT_TEX_COORD_SIZE, GRADIENT_TEX_SIZE * 4);

/// A gradient lookup table, one RGBA texel after another.
pub type GradientLut = [Float32; GRADIENT_TEX_COORD_SIZE];

/// Allocates a zeroed gradient lookup table.
pub fn gradient_lut() -> Box<GradientLut> {
    Box::new([0.0; GRADIENT_TEX_COORD_SIZE])
}

/// The implementation limits, as a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_scissor_rects: Int,
    pub max_dash_count: Int,
    pub max_image_width: Int,
    pub max_image_height: Int,
    pub max_image_pixels: Int,
    pub max_image_bytes: Int,
    pub max_color_ramp_stops: Int,
    pub max_vertices: Int,
    pub max_recurse_depth: Uint,
}

impl Default for Limits {
    fn default() -> Self {
        Self::IMPLEMENTATION
    }
}

// Requests above the hard limit are clamped to it.
fn narrow<T: PartialOrd + Copy + core::fmt::Display>(name: &str, requested: T, hard: T) -> T {
    if requested > hard {
        log::debug!("Requested {name} of {requested} exceeds the implementation limit {hard}");
        hard
    } else {
        requested
    }
}

// Counts are `Int` but slice lengths are `usize`; negative limits admit nothing.
fn as_len(limit: Int) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

impl Limits {
    /// The hard limits of this implementation.
    pub const IMPLEMENTATION: Self = Self {
        max_scissor_rects: MAX_SCISSOR_RECTS,
        max_dash_count: MAX_DASH_COUNT,
        max_image_width: MAX_IMAGE_WIDTH,
        max_image_height: MAX_IMAGE_HEIGHT,
        max_image_pixels: MAX_IMAGE_PIXELS,
        max_image_bytes: MAX_IMAGE_BYTES,
        max_color_ramp_stops: MAX_COLOR_RAMP_STOPS,
        max_vertices: MAX_VERTICES,
        max_recurse_depth: MAX_RECURSE_DEPTH,
    };

    /// Narrows the vertex limit.
    #[must_use]
    pub fn with_max_vertices(mut self, max: Int) -> Self {
        self.max_vertices = narrow("max_vertices", max, MAX_VERTICES);
        self
    }

    /// Narrows the subdivision depth limit.
    #[must_use]
    pub fn with_max_recurse_depth(mut self, max: Uint) -> Self {
        self.max_recurse_depth = narrow("max_recurse_depth", max, MAX_RECURSE_DEPTH);
        self
    }

    /// Narrows the color ramp stop limit.
    #[must_use]
    pub fn with_max_color_ramp_stops(mut self, max: Int) -> Self {
        self.max_color_ramp_stops = narrow("max_color_ramp_stops", max, MAX_COLOR_RAMP_STOPS);
        self
    }

    /// Narrows the dash pattern limit.
    #[must_use]
    pub fn with_max_dash_count(mut self, max: Int) -> Self {
        self.max_dash_count = narrow("max_dash_count", max, MAX_DASH_COUNT);
        self
    }

    /// Narrows the image limits.
    #[must_use]
    pub fn with_max_image_size(mut self, width: Int, height: Int, pixels: Int, bytes: Int) -> Self {
        self.max_image_width = narrow("max_image_width", width, MAX_IMAGE_WIDTH);
        self.max_image_height = narrow("max_image_height", height, MAX_IMAGE_HEIGHT);
        self.max_image_pixels = narrow("max_image_pixels", pixels, MAX_IMAGE_PIXELS);
        self.max_image_bytes = narrow("max_image_bytes", bytes, MAX_IMAGE_BYTES);
        self
    }

    /// Checks the size of an image about to be created.
    pub fn validate_image(&self, width: Int, height: Int, bytes_per_pixel: Int) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Err(Error::IllegalImageSize { width, height });
        }
        let pixels = i64::from(width) * i64::from(height);
        let bytes = pixels.saturating_mul(i64::from(bytes_per_pixel.max(0)));
        if width > self.max_image_width
            || height > self.max_image_height
            || pixels > i64::from(self.max_image_pixels)
            || bytes > i64::from(self.max_image_bytes)
        {
            return Err(Error::ImageTooLarge {
                width,
                height,
                bytes_per_pixel,
            });
        }
        Ok(())
    }

    /// Checks a tessellated vertex count.
    pub fn validate_vertices(&self, count: usize) -> Result<()> {
        if count > as_len(self.max_vertices) {
            return Err(Error::TooManyVertices {
                count,
                max: self.max_vertices,
            });
        }
        Ok(())
    }

    /// Checks a subdivision depth. Depth `max_recurse_depth` itself is allowed.
    pub fn validate_recursion(&self, depth: Uint) -> Result<()> {
        if depth > self.max_recurse_depth {
            return Err(Error::RecursionTooDeep {
                depth,
                max: self.max_recurse_depth,
            });
        }
        Ok(())
    }

    /// The color ramp stops that are honored; the rest are ignored.
    pub fn color_ramp_stops<'a, T>(&self, stops: &'a [T]) -> &'a [T] {
        truncated("color ramp stops", stops, self.max_color_ramp_stops)
    }

    /// The dash pattern entries that are honored; the rest are ignored.
    pub fn dash_pattern<'a, T>(&self, dashes: &'a [T]) -> &'a [T] {
        truncated("dash entries", dashes, self.max_dash_count)
    }

    /// The scissor rectangles that are honored; the rest are ignored.
    pub fn scissor_rects<'a, T>(&self, rects: &'a [T]) -> &'a [T] {
        truncated("scissor rectangles", rects, self.max_scissor_rects)
    }

    /// Answers a limit query.
    ///
    /// [`LimitParam::MaxFloat`] saturates to [`MAX_INT`]; use [`Limits::query_float`] for it.
    pub fn query(&self, param: LimitParam) -> Int {
        match param {
            LimitParam::MaxScissorRects => self.max_scissor_rects,
            LimitParam::MaxDashCount => self.max_dash_count,
            LimitParam::MaxColorRampStops => self.max_color_ramp_stops,
            LimitParam::MaxImageWidth => self.max_image_width,
            LimitParam::MaxImageHeight => self.max_image_height,
            LimitParam::MaxImagePixels => self.max_image_pixels,
            LimitParam::MaxImageBytes => self.max_image_bytes,
            LimitParam::MaxFloat => MAX_INT,
        }
    }

    /// Answers a limit query as a float.
    pub fn query_float(&self, param: LimitParam) -> Float32 {
        match param {
            LimitParam::MaxFloat => MAX_FLOAT,
            _ => self.query(param) as Float32,
        }
    }
}

fn truncated<'a, T>(what: &str, items: &'a [T], limit: Int) -> &'a [T] {
    let max = as_len(limit);
    if items.len() > max {
        log::debug!("Ignoring {} of {} {what}", items.len() - max, items.len());
        &items[..max]
    } else {
        items
    }
}

/// The queryable limits, with their OpenVG parameter codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum LimitParam {
    MaxScissorRects = 0x1114,
    MaxDashCount = 0x1115,
    MaxColorRampStops = 0x1118,
    MaxImageWidth = 0x1119,
    MaxImageHeight = 0x111A,
    MaxImagePixels = 0x111B,
    MaxImageBytes = 0x111C,
    MaxFloat = 0x111D,
}

impl LimitParam {
    /// All queryable limits.
    pub const ALL: [Self; 8] = [
        Self::MaxScissorRects,
        Self::MaxDashCount,
        Self::MaxColorRampStops,
        Self::MaxImageWidth,
        Self::MaxImageHeight,
        Self::MaxImagePixels,
        Self::MaxImageBytes,
        Self::MaxFloat,
    ];

    /// The parameter code.
    pub const fn code(self) -> Uint {
        self as Uint
    }
}

impl TryFrom<Uint> for LimitParam {
    type Error = Error;

    fn try_from(code: Uint) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|param| param.code() == code)
            .ok_or(Error::UnknownParam(code))
    }
}
