//! Image transforms applied to the captured photo.
//!
//! # Coordinate System
//!
//! - Crop regions are in source pixels ([`PixelRect`](crate::mapping::PixelRect))
//!   or in fractions of the image size (0.0 to 1.0)
//! - Origin is top-left corner

mod crop;

pub use crop::{apply_crop, apply_normalized_crop, CropError};
