//! JPEG export of the cropped photo.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is clamped to 1-100. The capture flow exports at 90, which
/// keeps text in photographed documents legible.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    log::debug!(
        "encoded {}x{} JPEG at quality {} ({} bytes)",
        width,
        height,
        quality,
        bytes.len()
    );
    Ok(bytes)
}

/// Encode a decoded image to JPEG bytes.
pub fn encode_image(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&image.pixels, image.width, image.height, quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_jpeg_markers(bytes: &[u8]) {
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 64 * 48 * 3];
        let bytes = encode_jpeg(&pixels, 64, 48, 90).unwrap();
        assert_jpeg_markers(&bytes);
    }

    #[test]
    fn test_encode_image() {
        let image = DecodedImage::new(10, 20, vec![30u8; 10 * 20 * 3]);
        let bytes = encode_image(&image, 90).unwrap();
        assert_jpeg_markers(&bytes);
    }

    #[test]
    fn test_quality_out_of_range_is_clamped() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert_eq!(
            encode_jpeg(&pixels, 10, 10, 0).unwrap(),
            encode_jpeg(&pixels, 10, 10, 1).unwrap()
        );
        assert_eq!(
            encode_jpeg(&pixels, 10, 10, 255).unwrap(),
            encode_jpeg(&pixels, 10, 10, 100).unwrap()
        );
    }

    #[test]
    fn test_wrong_buffer_length() {
        let pixels = vec![128u8; 99 * 100 * 3];
        match encode_jpeg(&pixels, 100, 100, 90) {
            Err(EncodeError::InvalidPixelData { expected, actual }) => {
                assert_eq!(expected, 30000);
                assert_eq!(actual, 29700);
            }
            other => panic!("Expected InvalidPixelData, got: {:?}", other),
        }
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 100, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 100, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = EncodeError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (5) must be non-zero"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
