//! Mapping from display coordinates to source-image pixels.
//!
//! The crop box is edited over the photo as it is shown on screen. Before
//! cropping, the box is scaled per axis by `source / display`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Bounds, CropRect};

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("Invalid display size: {width}x{height} (must be positive and finite)")]
    InvalidDisplay { width: f64, height: f64 },

    #[error("Invalid source size: {width}x{height} (must be non-zero)")]
    EmptySource { width: u32, height: u32 },
}

/// Crop region in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp into a `image_width` x `image_height` image, keeping at least
    /// one pixel in each direction.
    ///
    /// Callers must pass a non-empty image size.
    pub fn clamped_to(self, image_width: u32, image_height: u32) -> Self {
        let x = self.x.min(image_width.saturating_sub(1));
        let y = self.y.min(image_height.saturating_sub(1));
        let right = x.saturating_add(self.width).min(image_width);
        let bottom = y.saturating_add(self.height).min(image_height);
        Self {
            x,
            y,
            width: right.saturating_sub(x).max(1),
            height: bottom.saturating_sub(y).max(1),
        }
    }
}

/// Per-axis scale between the on-screen photo and its source pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMapping {
    display: Bounds,
    source_width: u32,
    source_height: u32,
}

impl DisplayMapping {
    pub fn new(display: Bounds, source_width: u32, source_height: u32) -> Result<Self, MappingError> {
        if !display.is_valid() {
            return Err(MappingError::InvalidDisplay {
                width: display.width,
                height: display.height,
            });
        }
        if source_width == 0 || source_height == 0 {
            return Err(MappingError::EmptySource {
                width: source_width,
                height: source_height,
            });
        }
        Ok(Self {
            display,
            source_width,
            source_height,
        })
    }

    pub fn display(&self) -> Bounds {
        self.display
    }

    pub fn scale_x(&self) -> f64 {
        self.source_width as f64 / self.display.width
    }

    pub fn scale_y(&self) -> f64 {
        self.source_height as f64 / self.display.height
    }

    /// Scale a display rectangle to source pixels.
    ///
    /// Edges are rounded to the nearest pixel and the result is clamped
    /// into the source image with a 1x1 minimum.
    pub fn to_source(&self, rect: &CropRect) -> PixelRect {
        let left = round_px(rect.x * self.scale_x());
        let top = round_px(rect.y * self.scale_y());
        let right = round_px(rect.right() * self.scale_x());
        let bottom = round_px(rect.bottom() * self.scale_y());

        PixelRect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
        .clamped_to(self.source_width, self.source_height)
    }

    /// Express a display rectangle as `(left, top, width, height)` fractions
    /// of the display, each clamped to `[0, 1]`.
    pub fn to_normalized(&self, rect: &CropRect) -> (f64, f64, f64, f64) {
        (
            (rect.x / self.display.width).clamp(0.0, 1.0),
            (rect.y / self.display.height).clamp(0.0, 1.0),
            (rect.width / self.display.width).clamp(0.0, 1.0),
            (rect.height / self.display.height).clamp(0.0, 1.0),
        )
    }
}

/// Round to the nearest pixel; negatives and NaN become 0.
fn round_px(value: f64) -> u32 {
    // `as` saturates for out-of-range floats and maps NaN to 0
    value.round().max(0.0) as u32
}


// ============================================================================
// Property-Based Tests
// ============================================================================
