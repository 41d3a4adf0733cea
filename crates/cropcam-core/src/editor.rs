//! Crop box editor driven by drag gestures.
//!
//! The editor owns one [`CropRect`] inside a [`Bounds`]. A gesture start
//! picks a [`DragHandle`] from the pointer position; every move applies the
//! cumulative displacement to the box as it was at gesture start and clamps
//! the result. The gesture end always returns the editor to idle.
//!
//! ```ignore
//! let mut editor = RectEditor::new(rect, bounds, EditorConfig::default());
//! editor.on_gesture_start(2.0, 2.0); // top-left corner
//! let updated = editor.on_gesture_move(-30.0, -30.0);
//! editor.on_gesture_end();
//! ```

use crate::config::EditorConfig;
use crate::geometry::{Bounds, CropRect};
use crate::gesture::GestureHandler;
use crate::handle::DragHandle;

/// Gesture state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        handle: DragHandle,
        /// Box at gesture start; displacements are applied to this
        origin: CropRect,
    },
}

/// Interactive crop box.
#[derive(Debug, Clone)]
pub struct RectEditor {
    rect: CropRect,
    bounds: Bounds,
    config: EditorConfig,
    state: GestureState,
}

impl RectEditor {
    /// Create an editor. The initial rectangle is clamped into `bounds`.
    pub fn new(initial: CropRect, bounds: Bounds, config: EditorConfig) -> Self {
        Self {
            rect: initial.clamped(bounds, config.min_size),
            bounds,
            config,
            state: GestureState::Idle,
        }
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Handle held by the current gesture, if any.
    pub fn active_handle(&self) -> Option<DragHandle> {
        match self.state {
            GestureState::Dragging { handle, .. } => Some(handle),
            GestureState::Idle => None,
        }
    }

    /// Replace the rectangle from outside (e.g. a new auto-detected box).
    ///
    /// During a drag the gesture is rebased onto the new rectangle.
    pub fn set_rect(&mut self, rect: CropRect) -> CropRect {
        self.rect = rect.clamped(self.bounds, self.config.min_size);
        if let GestureState::Dragging { origin, .. } = &mut self.state {
            *origin = self.rect;
        }
        self.rect
    }

    /// Change the bounding region and re-clamp the rectangle into it.
    pub fn set_bounds(&mut self, bounds: Bounds) -> CropRect {
        self.bounds = bounds;
        self.set_rect(self.rect)
    }

    /// Begin a gesture at a point given in the box's local coordinates.
    ///
    /// Returns the classified handle, which stays fixed until the gesture
    /// ends.
    pub fn begin_drag(&mut self, local_x: f64, local_y: f64) -> DragHandle {
        let handle = DragHandle::classify(
            local_x,
            local_y,
            self.rect.width,
            self.rect.height,
            self.config.handle_margin,
        );
        log::debug!(
            "crop drag started on {} at ({:.1}, {:.1})",
            handle.as_str(),
            local_x,
            local_y
        );
        self.state = GestureState::Dragging {
            handle,
            origin: self.rect,
        };
        handle
    }

    /// Apply a cumulative displacement to the active gesture.
    ///
    /// Returns the new rectangle, or `None` when idle or when the gesture
    /// grabbed nothing.
    pub fn drag_to(&mut self, dx: f64, dy: f64) -> Option<CropRect> {
        let GestureState::Dragging { handle, origin } = self.state else {
            return None;
        };
        let candidate = handle.displace(origin, dx, dy)?;
        self.rect = candidate.clamped(self.bounds, self.config.min_size);
        log::trace!("crop drag {} -> {:?}", handle.as_str(), self.rect);
        Some(self.rect)
    }

    /// End the active gesture, whatever its state.
    pub fn end_drag(&mut self) {
        if let GestureState::Dragging { handle, .. } = self.state {
            log::debug!("crop drag on {} ended at {:?}", handle.as_str(), self.rect);
        }
        self.state = GestureState::Idle;
    }
}

impl GestureHandler for RectEditor {
    type Output = CropRect;

    fn on_gesture_start(&mut self, x: f64, y: f64) {
        self.begin_drag(x, y);
    }

    fn on_gesture_move(&mut self, dx: f64, dy: f64) -> Option<CropRect> {
        self.drag_to(dx, dy)
    }

    fn on_gesture_end(&mut self) -> Option<CropRect> {
        self.end_drag();
        None
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ALL_HANDLES: [DragHandle; 9] = [
        DragHandle::Move,
        DragHandle::Top,
        DragHandle::Bottom,
        DragHandle::Left,
        DragHandle::Right,
        DragHandle::TopLeft,
        DragHandle::TopRight,
        DragHandle::BottomLeft,
        DragHandle::BottomRight,
    ];

    fn handle_strategy() -> impl Strategy<Value = DragHandle> {
        (0usize..ALL_HANDLES.len()).prop_map(|i| ALL_HANDLES[i])
    }

    /// Editor over a bounding region at least as large as the minimum size,
    /// with a valid starting rectangle.
    fn editor_strategy() -> impl Strategy<Value = RectEditor> {
        (100.0f64..=1500.0, 100.0f64..=1500.0).prop_flat_map(|(bw, bh)| {
            (0.0f64..=1.0, 0.0f64..=1.0, 100.0f64..=bw, 100.0f64..=bh).prop_map(
                move |(fx, fy, w, h)| {
                    let rect = CropRect::new(fx * (bw - w), fy * (bh - h), w, h);
                    RectEditor::new(rect, Bounds::new(bw, bh), EditorConfig::default())
                },
            )
        })
    }

    fn start_for(editor: &RectEditor, handle: DragHandle) -> (f64, f64) {
        let r = editor.rect();
        let m = editor.config().handle_margin / 2.0;
        let (cx, cy) = (r.width / 2.0, r.height / 2.0);
        match handle {
            DragHandle::Move | DragHandle::None => (cx, cy),
            DragHandle::Top => (cx, m),
            DragHandle::Bottom => (cx, r.height - m),
            DragHandle::Left => (m, cy),
            DragHandle::Right => (r.width - m, cy),
            DragHandle::TopLeft => (m, m),
            DragHandle::TopRight => (r.width - m, m),
            DragHandle::BottomLeft => (m, r.height - m),
            DragHandle::BottomRight => (r.width - m, r.height - m),
        }
    }

    proptest! {
        /// Property: Every emitted rectangle satisfies the size and containment invariants.
        #[test]
        fn prop_result_always_fits(
            editor in editor_strategy(),
            handle in handle_strategy(),
            dx in -3000.0f64..=3000.0,
            dy in -3000.0f64..=3000.0,
        ) {
            let mut editor = editor;
            let (lx, ly) = start_for(&editor, handle);
            editor.begin_drag(lx, ly);
            let rect = editor.drag_to(dx, dy).unwrap();
            prop_assert!(rect.fits_within(editor.bounds(), 100.0), "{:?}", rect);
        }

        /// Property: The start position alone decides the handle.
        #[test]
        fn prop_classification_matches_zone(
            editor in editor_strategy(),
            handle in handle_strategy(),
        ) {
            let mut editor = editor;
            let (lx, ly) = start_for(&editor, handle);
            prop_assert_eq!(editor.begin_drag(lx, ly), handle);
        }

        /// Property: A zero displacement never changes a valid rectangle.
        #[test]
        fn prop_zero_drag_is_identity(
            editor in editor_strategy(),
            handle in handle_strategy(),
        ) {
            let mut editor = editor;
            let before = editor.rect();
            let (lx, ly) = start_for(&editor, handle);
            editor.begin_drag(lx, ly);
            prop_assert_eq!(editor.drag_to(0.0, 0.0), Some(before));
        }

        /// Property: Replaying the same cumulative displacement yields the same rectangle.
        #[test]
        fn prop_moves_depend_only_on_cumulative_delta(
            editor in editor_strategy(),
            handle in handle_strategy(),
            (dx1, dy1) in (-500.0f64..=500.0, -500.0f64..=500.0),
            (dx2, dy2) in (-500.0f64..=500.0, -500.0f64..=500.0),
        ) {
            let mut editor = editor;
            let (lx, ly) = start_for(&editor, handle);
            editor.begin_drag(lx, ly);
            let direct = editor.drag_to(dx2, dy2);
            editor.drag_to(dx1, dy1);
            let via_detour = editor.drag_to(dx2, dy2);
            prop_assert_eq!(direct, via_detour);
        }
    }
}
