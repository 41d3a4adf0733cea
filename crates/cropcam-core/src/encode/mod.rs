//! Export encoding for cropped photos.
//!
//! # Examples
//!
//! ```ignore
//! use cropcam_core::encode::encode_image;
//!
//! let jpeg_bytes = encode_image(&cropped, 90)?;
//! ```

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
