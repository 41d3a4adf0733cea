//! Decoding of captured photos.
//!
//! The camera hands over encoded bytes (JPEG on device, PNG in some web
//! captures). Decoding is delegated to the `image` crate; this module only
//! normalizes the result to upright RGB8.
//!
//! # Examples
//!
//! ```ignore
//! use cropcam_core::decode::decode_photo;
//!
//! let image = decode_photo(&captured_bytes)?;
//! println!("Captured {}x{} photo", image.width, image.height);
//! ```

mod photo;
mod types;

pub use image::metadata::Orientation;
pub use photo::{decode_photo, decode_photo_no_orientation, get_orientation};
pub use types::{DecodeError, DecodedImage};
