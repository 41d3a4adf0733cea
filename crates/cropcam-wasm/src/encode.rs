//! JPEG export WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg_from_image } from '@cropcam/wasm';
//!
//! const jpeg = encode_jpeg_from_image(cropped); // quality 90
//! const blob = new Blob([jpeg], { type: 'image/jpeg' });
//! ```

use crate::types::JsDecodedImage;
use cropcam_core::{encode, DEFAULT_JPEG_QUALITY};
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality 1-100; defaults to 90 when omitted
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: Option<u8>,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality.unwrap_or(DEFAULT_JPEG_QUALITY))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsDecodedImage to JPEG bytes.
///
/// Use this on the output of `crop_display_region` to produce the file
/// handed back to the caller.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(
    image: &JsDecodedImage,
    quality: Option<u8>,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_decoded(), quality.unwrap_or(DEFAULT_JPEG_QUALITY))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
