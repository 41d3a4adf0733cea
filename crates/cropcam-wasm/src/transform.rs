//! WASM bindings for placing and applying the crop box.
//!
//! The crop box lives in display coordinates (the size the photo is drawn
//! at). `crop_display_region` maps it onto the photo's own pixels before
//! cropping.

use crate::types::{JsCropRect, JsDecodedImage};
use cropcam_core::decode::DecodedImage;
use cropcam_core::{
    apply_crop, AutoBoxConfig, Bounds, CaptureError, CropRect, DisplayMapping, EditorConfig,
};
use wasm_bindgen::prelude::*;

/// Propose the initial crop box for a photo drawn at
/// `display_width` x `display_height`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const start = default_crop_region(view.clientWidth, view.clientHeight);
/// ```
#[wasm_bindgen]
pub fn default_crop_region(display_width: f64, display_height: f64) -> JsCropRect {
    cropcam_core::default_crop_region(
        Bounds::new(display_width, display_height),
        &AutoBoxConfig::default(),
        &EditorConfig::default(),
    )
    .into()
}

/// Crop `image` to a rectangle given in display coordinates.
///
/// # Arguments
///
/// * `image` - The captured photo
/// * `x`, `y`, `width`, `height` - Crop box in display units
/// * `display_width`, `display_height` - Size the photo is drawn at
///
/// # Errors
///
/// Returns an error if the display size is not positive or the image is
/// empty or malformed.
#[wasm_bindgen]
pub fn crop_display_region(
    image: &JsDecodedImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    display_width: f64,
    display_height: f64,
) -> Result<JsDecodedImage, JsValue> {
    crop_in_display(
        &image.to_decoded(),
        CropRect::new(x, y, width, height),
        Bounds::new(display_width, display_height),
    )
    .map(JsDecodedImage::from_decoded)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn crop_in_display(
    image: &DecodedImage,
    rect: CropRect,
    display: Bounds,
) -> Result<DecodedImage, CaptureError> {
    let mapping = DisplayMapping::new(display, image.width, image.height)?;
    let region = mapping.to_source(&rect);
    Ok(apply_crop(image, region)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a simple test image.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_default_crop_region_proportions() {
        let rect = default_crop_region(1000.0, 2000.0);
        assert!((rect.x() - 100.0).abs() < 1e-9);
        assert!((rect.y() - 300.0).abs() < 1e-9);
        assert!((rect.width() - 800.0).abs() < 1e-9);
        assert!((rect.height() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_crop_scales_to_source_pixels() {
        // Photo drawn at half size: a 50x25 display box is 100x50 pixels
        let img = test_image(200, 100);
        let cropped = crop_in_display(
            &img,
            CropRect::new(10.0, 5.0, 50.0, 25.0),
            Bounds::new(100.0, 50.0),
        )
        .unwrap();
        assert_eq!(cropped.width, 100);
        assert_eq!(cropped.height, 50);
    }

    #[test]
    fn test_crop_whole_display_keeps_image() {
        let img = test_image(40, 30);
        let cropped = crop_in_display(
            &img,
            CropRect::new(0.0, 0.0, 400.0, 300.0),
            Bounds::new(400.0, 300.0),
        )
        .unwrap();
        assert_eq!(cropped, img);
    }

    #[test]
    fn test_crop_rejects_zero_display() {
        let img = test_image(40, 30);
        let result = crop_in_display(
            &img,
            CropRect::new(0.0, 0.0, 10.0, 10.0),
            Bounds::new(0.0, 300.0),
        );
        assert!(matches!(result, Err(CaptureError::Mapping(_))));
    }

    #[test]
    fn test_crop_rejects_short_pixel_buffer() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0u8; 12],
        };
        let result = crop_in_display(
            &img,
            CropRect::new(0.0, 0.0, 5.0, 5.0),
            Bounds::new(10.0, 10.0),
        );
        assert!(matches!(result, Err(CaptureError::Crop(_))));
    }
}
