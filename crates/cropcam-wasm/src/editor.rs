//! Crop box editor bindings.
//!
//! Wire pointer events straight through: `gesture_start` with the pointer
//! position relative to the box, `gesture_move` with the displacement since
//! the gesture started, `gesture_end` on release or cancel. Read the box back
//! through the getters after every move.
//!
//! ```typescript
//! const editor = new JsCropEditor(40, 120, 320, 320, 400, 700);
//! box.onpointerdown = (e) => editor.gesture_start(e.offsetX, e.offsetY);
//! box.onpointermove = (e) => {
//!   if (editor.gesture_move(e.clientX - startX, e.clientY - startY)) redraw(editor);
//! };
//! box.onpointerup = () => editor.gesture_end();
//! ```

use cropcam_core::{Bounds, CropRect, DragHandle, EditorConfig, GestureHandler, RectEditor};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::JsCropRect;

/// Plain-object view of the editor handed to JavaScript by `snapshot()`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditorSnapshot {
    rect: CropRect,
    bounds: Bounds,
    handle: DragHandle,
    dragging: bool,
}

/// Draggable, resizable crop box constrained to a display region.
#[wasm_bindgen]
pub struct JsCropEditor {
    inner: RectEditor,
}

#[wasm_bindgen]
impl JsCropEditor {
    /// Create an editor with the default minimum size (100) and handle
    /// margin (24). The initial box is clamped into the bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        bounds_width: f64,
        bounds_height: f64,
    ) -> JsCropEditor {
        Self::build(
            CropRect::new(x, y, width, height),
            Bounds::new(bounds_width, bounds_height),
            EditorConfig::default(),
        )
    }

    /// Create an editor with custom settings.
    ///
    /// `config` is a plain object such as `{ min_size: 80 }`; missing fields
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not match the editor settings shape.
    pub fn with_config(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        bounds_width: f64,
        bounds_height: f64,
        config: JsValue,
    ) -> Result<JsCropEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {e}")))?
        };
        Ok(Self::build(
            CropRect::new(x, y, width, height),
            Bounds::new(bounds_width, bounds_height),
            config,
        ))
    }

    /// Start a gesture at a point relative to the box's top-left corner.
    ///
    /// Returns the grabbed handle name (`"move"`, `"topLeft"`, ...), or
    /// `"none"` when the point is outside the box.
    pub fn gesture_start(&mut self, local_x: f64, local_y: f64) -> String {
        self.inner.on_gesture_start(local_x, local_y);
        self.handle()
    }

    /// Apply the displacement since gesture start.
    ///
    /// Returns `true` when the box was updated.
    pub fn gesture_move(&mut self, dx: f64, dy: f64) -> bool {
        self.inner.on_gesture_move(dx, dy).is_some()
    }

    /// End the current gesture (release or cancel).
    pub fn gesture_end(&mut self) {
        self.inner.on_gesture_end();
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.rect().x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.rect().y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.rect().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.rect().height
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Handle held by the current gesture, `"none"` when idle.
    #[wasm_bindgen(getter)]
    pub fn handle(&self) -> String {
        self.inner
            .active_handle()
            .unwrap_or_default()
            .as_str()
            .to_string()
    }

    pub fn rect(&self) -> JsCropRect {
        self.inner.rect().into()
    }

    /// Replace the box; returns the clamped result.
    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> JsCropRect {
        self.inner
            .set_rect(CropRect::new(x, y, width, height))
            .into()
    }

    /// Change the display region (e.g. on resize or rotation) and re-clamp.
    pub fn set_bounds(&mut self, width: f64, height: f64) -> JsCropRect {
        self.inner.set_bounds(Bounds::new(width, height)).into()
    }

    /// Editor state as `{ rect, bounds, handle, dragging }`.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = EditorSnapshot {
            rect: self.inner.rect(),
            bounds: self.inner.bounds(),
            handle: self.inner.active_handle().unwrap_or_default(),
            dragging: self.inner.is_dragging(),
        };
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsCropEditor {
    fn build(rect: CropRect, bounds: Bounds, config: EditorConfig) -> Self {
        Self {
            inner: RectEditor::new(rect, bounds, config),
        }
    }
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_with_config_undefined_uses_defaults() {
        let ed =
            JsCropEditor::with_config(0.0, 0.0, 10.0, 10.0, 800.0, 600.0, JsValue::UNDEFINED)
                .unwrap();
        assert_eq!(ed.width(), 100.0);
    }

    #[wasm_bindgen_test]
    fn test_with_config_partial_object() {
        let config = plain_object(&[("min_size", 50.0)]);
        let ed = JsCropEditor::with_config(0.0, 0.0, 10.0, 10.0, 800.0, 600.0, config).unwrap();
        assert_eq!(ed.width(), 50.0);
    }

    #[wasm_bindgen_test]
    fn test_with_config_rejects_wrong_shape() {
        let result = JsCropEditor::with_config(
            0.0,
            0.0,
            10.0,
            10.0,
            800.0,
            600.0,
            JsValue::from_str("big"),
        );
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_snapshot() {
        let mut ed = JsCropEditor::new(100.0, 100.0, 200.0, 200.0, 800.0, 600.0);
        ed.gesture_start(2.0, 2.0);
        let snapshot = ed.snapshot().unwrap();
        assert!(snapshot.is_object());
    }

    fn plain_object(fields: &[(&str, f64)]) -> JsValue {
        use serde::Serialize;
        let map: std::collections::BTreeMap<&str, f64> = fields.iter().copied().collect();
        map.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .unwrap()
    }
}
