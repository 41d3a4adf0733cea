//! Drag handles: which part of the crop box a gesture grabbed.
//!
//! The handle is chosen once, from the pointer position at gesture start,
//! and decides how the cumulative drag displacement reshapes the box.

use serde::{Deserialize, Serialize};

use crate::geometry::CropRect;

/// Zone of the crop box grabbed by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragHandle {
    /// Interior: translate the whole box.
    Move,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Pointer was not on the box; drags are ignored.
    #[default]
    None,
}

impl DragHandle {
    /// Classify a pointer position given in the box's local coordinates.
    ///
    /// Corner zones win over edge zones, edge zones over the interior. A
    /// zone is `margin` wide along each side. Points outside the box (or
    /// non-finite ones) yield [`DragHandle::None`].
    pub fn classify(local_x: f64, local_y: f64, width: f64, height: f64, margin: f64) -> Self {
        if !local_x.is_finite() || !local_y.is_finite() {
            return DragHandle::None;
        }
        if local_x < 0.0 || local_y < 0.0 || local_x > width || local_y > height {
            return DragHandle::None;
        }

        let near_left = local_x < margin;
        let near_right = local_x > width - margin;
        let near_top = local_y < margin;
        let near_bottom = local_y > height - margin;

        if near_left && near_top {
            DragHandle::TopLeft
        } else if near_right && near_top {
            DragHandle::TopRight
        } else if near_left && near_bottom {
            DragHandle::BottomLeft
        } else if near_right && near_bottom {
            DragHandle::BottomRight
        } else if near_top {
            DragHandle::Top
        } else if near_bottom {
            DragHandle::Bottom
        } else if near_left {
            DragHandle::Left
        } else if near_right {
            DragHandle::Right
        } else {
            DragHandle::Move
        }
    }

    /// Unclamped candidate rectangle after dragging this handle by
    /// `(dx, dy)` from `origin`.
    ///
    /// Returns `None` for [`DragHandle::None`].
    pub fn displace(self, origin: CropRect, dx: f64, dy: f64) -> Option<CropRect> {
        let CropRect {
            x,
            y,
            width: w,
            height: h,
        } = origin;

        let rect = match self {
            DragHandle::Move => CropRect::new(x + dx, y + dy, w, h),
            DragHandle::Top => CropRect::new(x, y + dy, w, h - dy),
            DragHandle::Bottom => CropRect::new(x, y, w, h + dy),
            DragHandle::Left => CropRect::new(x + dx, y, w - dx, h),
            DragHandle::Right => CropRect::new(x, y, w + dx, h),
            DragHandle::TopLeft => CropRect::new(x + dx, y + dy, w - dx, h - dy),
            DragHandle::TopRight => CropRect::new(x, y + dy, w + dx, h - dy),
            DragHandle::BottomLeft => CropRect::new(x + dx, y, w - dx, h + dy),
            DragHandle::BottomRight => CropRect::new(x, y, w + dx, h + dy),
            DragHandle::None => return None,
        };
        Some(rect)
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            DragHandle::TopLeft
                | DragHandle::TopRight
                | DragHandle::BottomLeft
                | DragHandle::BottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            DragHandle::Top | DragHandle::Bottom | DragHandle::Left | DragHandle::Right
        )
    }

    /// Name used across the JS boundary (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            DragHandle::Move => "move",
            DragHandle::Top => "top",
            DragHandle::Bottom => "bottom",
            DragHandle::Left => "left",
            DragHandle::Right => "right",
            DragHandle::TopLeft => "topLeft",
            DragHandle::TopRight => "topRight",
            DragHandle::BottomLeft => "bottomLeft",
            DragHandle::BottomRight => "bottomRight",
            DragHandle::None => "none",
        }
    }
}
