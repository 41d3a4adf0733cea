//! Pixel cropping of captured photos.
//!
//! Two entry points:
//!
//! - [`apply_crop`] takes a [`PixelRect`] in source pixels, as produced by
//!   [`DisplayMapping::to_source`](crate::mapping::DisplayMapping::to_source).
//! - [`apply_normalized_crop`] takes `(left, top, width, height)` fractions
//!   of the image, each in `0.0..=1.0`.
//!
//! Regions reaching past the image are clamped; the output is never smaller
//! than 1x1.

use image::imageops;
use thiserror::Error;

use crate::decode::DecodedImage;
use crate::mapping::PixelRect;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    #[error("Cannot crop an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Crop `image` to `region`, given in source pixels.
///
/// # Example
///
/// ```
/// use cropcam_core::decode::DecodedImage;
/// use cropcam_core::mapping::PixelRect;
/// use cropcam_core::transform::apply_crop;
///
/// let image = DecodedImage::new(100, 100, vec![128u8; 100 * 100 * 3]);
/// let cropped = apply_crop(&image, PixelRect::new(25, 25, 50, 50)).unwrap();
/// assert_eq!((cropped.width, cropped.height), (50, 50));
/// ```
pub fn apply_crop(image: &DecodedImage, region: PixelRect) -> Result<DecodedImage, CropError> {
    if image.width == 0 || image.height == 0 {
        return Err(CropError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    }
    if image.pixels.len() != image.expected_len() {
        return Err(CropError::InvalidPixelData {
            expected: image.expected_len(),
            actual: image.pixels.len(),
        });
    }

    let region = region.clamped_to(image.width, image.height);
    if region == PixelRect::new(0, 0, image.width, image.height) {
        return Ok(image.clone());
    }

    let source = image.to_rgb_image().ok_or(CropError::InvalidPixelData {
        expected: image.expected_len(),
        actual: image.pixels.len(),
    })?;
    let cropped = imageops::crop_imm(&source, region.x, region.y, region.width, region.height)
        .to_image();

    log::debug!(
        "cropped {}x{} photo to {}x{} at ({}, {})",
        image.width,
        image.height,
        region.width,
        region.height,
        region.x,
        region.y
    );
    Ok(DecodedImage::from_rgb_image(cropped))
}

/// Crop `image` using fractions of its size.
pub fn apply_normalized_crop(
    image: &DecodedImage,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Result<DecodedImage, CropError> {
    let to_px = |fraction: f64, extent: u32| -> u32 {
        (fraction.clamp(0.0, 1.0) * extent as f64).round() as u32
    };
    let region = PixelRect::new(
        to_px(left, image.width),
        to_px(top, image.height),
        to_px(width, image.width),
        to_px(height, image.height),
    );
    apply_crop(image, region)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
