//! Cropcam Core - crop box editing and capture pipeline
//!
//! This crate holds the logic behind a camera capture flow: a photo is
//! taken, a draggable and resizable crop box is laid over it, the photo is
//! cropped and exported, and the result is previewed with pan and zoom
//! before it is confirmed.
//!
//! The crop box ([`RectEditor`]) and the preview ([`PreviewViewport`]) are
//! driven through the [`GestureHandler`] interface: one start, any number
//! of moves with cumulative displacement, one end.

pub mod config;
pub mod decode;
pub mod detect;
pub mod editor;
pub mod encode;
pub mod geometry;
pub mod gesture;
pub mod handle;
pub mod mapping;
pub mod preview;
pub mod session;
pub mod transform;

pub use config::{
    AutoBoxConfig, CaptureConfig, EditorConfig, ZoomConfig, DEFAULT_JPEG_QUALITY, HANDLE_MARGIN,
    MIN_CROP_SIZE,
};
pub use detect::default_crop_region;
pub use editor::{GestureState, RectEditor};
pub use geometry::{Bounds, CropRect};
pub use gesture::GestureHandler;
pub use handle::DragHandle;
pub use mapping::{DisplayMapping, MappingError, PixelRect};
pub use preview::{fit_display_size, Pan, PreviewViewport};
pub use session::{CaptureError, CaptureSession, CaptureStage};
pub use transform::{apply_crop, apply_normalized_crop, CropError};
