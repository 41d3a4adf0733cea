//! Photo decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_photo } from '@cropcam/wasm';
//!
//! const bytes = new Uint8Array(await blob.arrayBuffer());
//! const photo = decode_photo(bytes);
//! console.log(`Captured ${photo.width}x${photo.height}`);
//! ```

use crate::types::JsDecodedImage;
use cropcam_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a captured photo (JPEG or PNG) from bytes.
///
/// EXIF orientation is applied, so the returned pixels are upright.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a recognised image format
/// - The image is corrupted or truncated
/// - The image has zero width or height
#[wasm_bindgen]
pub fn decode_photo(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_photo(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
