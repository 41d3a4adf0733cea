//! Preview screen pan/zoom bindings.
//!
//! ```typescript
//! const viewport = new JsPreviewViewport(innerWidth, innerHeight, cropped.width, cropped.height);
//! zoomIn.onclick = () => { viewport.zoom_in(); redraw(viewport); };
//! img.onpointerdown = () => viewport.pan_start();
//! img.onpointermove = (e) => viewport.pan_move(e.clientX - startX, e.clientY - startY);
//! img.onpointerup = () => viewport.pan_end();
//! ```

use cropcam_core::{Bounds, GestureHandler, PreviewViewport, ZoomConfig};
use wasm_bindgen::prelude::*;

/// Pan and zoom state of the cropped photo preview.
#[wasm_bindgen]
pub struct JsPreviewViewport {
    inner: PreviewViewport,
}

#[wasm_bindgen]
impl JsPreviewViewport {
    /// Fit a `image_width` x `image_height` photo to 90% of the screen
    /// width, at 100% zoom.
    #[wasm_bindgen(constructor)]
    pub fn new(
        screen_width: f64,
        screen_height: f64,
        image_width: u32,
        image_height: u32,
    ) -> JsPreviewViewport {
        JsPreviewViewport {
            inner: PreviewViewport::new(
                Bounds::new(screen_width, screen_height),
                image_width,
                image_height,
                ZoomConfig::default(),
            ),
        }
    }

    /// Fitted image width at 100% zoom.
    #[wasm_bindgen(getter)]
    pub fn display_width(&self) -> f64 {
        self.inner.image_size().width
    }

    /// Fitted image height at 100% zoom.
    #[wasm_bindgen(getter)]
    pub fn display_height(&self) -> f64 {
        self.inner.image_size().height
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale()
    }

    /// Zoom label value, e.g. `150` for 1.5x.
    #[wasm_bindgen(getter)]
    pub fn zoom_percent(&self) -> u32 {
        self.inner.zoom_percent()
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> f64 {
        self.inner.translation().x
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> f64 {
        self.inner.translation().y
    }

    /// Step the zoom up; returns the new scale.
    pub fn zoom_in(&mut self) -> f64 {
        self.inner.zoom_in()
    }

    /// Step the zoom down; returns the new scale.
    pub fn zoom_out(&mut self) -> f64 {
        self.inner.zoom_out()
    }

    pub fn pan_start(&mut self) {
        self.inner.on_gesture_start(0.0, 0.0);
    }

    /// Apply the displacement since `pan_start`. Returns `false` when no
    /// pan is active.
    pub fn pan_move(&mut self, dx: f64, dy: f64) -> bool {
        self.inner.on_gesture_move(dx, dy).is_some()
    }

    /// Finish the pan; the translation settles back inside the image.
    pub fn pan_end(&mut self) {
        self.inner.on_gesture_end();
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> JsPreviewViewport {
        JsPreviewViewport::new(400.0, 800.0, 2000, 1000)
    }

    #[test]
    fn test_fitted_size() {
        let vp = viewport();
        assert_eq!(vp.display_width(), 360.0);
        assert_eq!(vp.display_height(), 180.0);
        assert_eq!(vp.zoom_percent(), 100);
    }

    #[test]
    fn test_zoom_buttons() {
        let mut vp = viewport();
        assert_eq!(vp.zoom_in(), 1.5);
        assert_eq!(vp.zoom_percent(), 150);
        assert_eq!(vp.zoom_out(), 1.0);
        assert_eq!(vp.zoom_out(), 0.5);
        assert_eq!(vp.zoom_out(), 0.5);
    }

    #[test]
    fn test_pan_settles_on_release() {
        let mut vp = viewport();
        vp.zoom_in();
        vp.zoom_in();
        // 2x: 720 wide vs 360 viewport leaves 180 of slack each side
        vp.pan_start();
        assert!(vp.pan_move(250.0, 40.0));
        assert_eq!((vp.translate_x(), vp.translate_y()), (250.0, 40.0));
        vp.pan_end();
        assert_eq!((vp.translate_x(), vp.translate_y()), (180.0, 0.0));
    }

    #[test]
    fn test_pan_move_without_start() {
        let mut vp = viewport();
        assert!(!vp.pan_move(10.0, 10.0));
    }
}
