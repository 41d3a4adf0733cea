//! Cropcam WASM - WebAssembly bindings for Cropcam
//!
//! This crate exposes the cropcam-core capture flow to JavaScript/TypeScript:
//! the crop box editor, the preview viewport, and the decode, crop and
//! export steps between them.
//!
//! # Module Structure
//!
//! - `editor` - Draggable and resizable crop box
//! - `preview` - Pan and zoom state of the preview screen
//! - `types` - WASM-compatible wrapper types for image data and rectangles
//! - `decode` - Photo decoding bindings
//! - `transform` - Default crop box and display-space cropping
//! - `encode` - JPEG export bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropEditor, decode_photo, default_crop_region } from '@cropcam/wasm';
//!
//! await init();
//!
//! const photo = decode_photo(new Uint8Array(await blob.arrayBuffer()));
//! const start = default_crop_region(viewWidth, viewHeight);
//! const editor = new JsCropEditor(start.x, start.y, start.width, start.height, viewWidth, viewHeight);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod preview;
mod transform;
mod types;

pub use decode::decode_photo;
pub use editor::JsCropEditor;
pub use encode::{encode_jpeg, encode_jpeg_from_image};
pub use preview::JsPreviewViewport;
pub use transform::{crop_display_region, default_crop_region};
pub use types::{JsCropRect, JsDecodedImage};

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics and `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // A second init (e.g. hot reload) finds the logger already set
        let _ = console_log::init_with_level(log::Level::Debug);
    }
    log::info!("cropcam-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
    }
}
