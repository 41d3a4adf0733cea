//! Captured photo decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::metadata::Orientation;
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode a captured photo, applying its EXIF orientation.
///
/// The container format is guessed from the bytes, so JPEG and PNG
/// captures both work.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized,
/// `DecodeError::CorruptedFile` if decoding fails and
/// `DecodeError::EmptyImage` if the result has no pixels.
pub fn decode_photo(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);
    let mut img = decode_dynamic(bytes)?;
    img.apply_orientation(orientation);
    finish(img)
}

/// Decode a captured photo without applying EXIF orientation.
pub fn decode_photo_no_orientation(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    finish(decode_dynamic(bytes)?)
}

/// EXIF orientation of a photo, `Orientation::NoTransforms` when absent or
/// out of range.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn finish(img: DynamicImage) -> Result<DecodedImage, DecodeError> {
    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }
    log::debug!("decoded photo {}x{}", width, height);
    Ok(DecodedImage::from_rgb_image(rgb))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Orientation::from_exif)
            .unwrap_or(Orientation::NoTransforms),
        Err(e) => {
            log::debug!("no usable EXIF orientation: {}", e);
            Orientation::NoTransforms
        }
    }
}
