//! Rectangle and bounding-region primitives.
//!
//! All values are in display coordinates: the space the crop box is drawn
//! and dragged in. Origin is the top-left corner of the bounding region,
//! x grows right and y grows down.

use serde::{Deserialize, Serialize};

const EDGE_TOLERANCE: f64 = 1e-9;

/// The area a crop rectangle must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned crop rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether a point in the rectangle's local coordinates lies on or
    /// inside its outline.
    pub fn contains_local(&self, local_x: f64, local_y: f64) -> bool {
        (0.0..=self.width).contains(&local_x) && (0.0..=self.height).contains(&local_y)
    }

    /// Clamp the rectangle into `bounds` while keeping each side at least
    /// `min_size` long.
    ///
    /// Size is clamped before position: width goes to
    /// `[min_size, bounds.width]` first, then `x` goes to
    /// `[0, bounds.width - width]`. The same applies to height and `y`.
    ///
    /// If `bounds` is smaller than `min_size` the lower limit wins, so the
    /// result is `min_size` wide at position 0 and overflows the bounds.
    pub fn clamped(self, bounds: Bounds, min_size: f64) -> Self {
        let width = clamp_floor_wins(self.width, min_size, bounds.width);
        let height = clamp_floor_wins(self.height, min_size, bounds.height);
        Self {
            x: clamp_floor_wins(self.x, 0.0, bounds.width - width),
            y: clamp_floor_wins(self.y, 0.0, bounds.height - height),
            width,
            height,
        }
    }

    /// Check the editor invariants: minimum size and full containment.
    ///
    /// The far edges are compared with a small tolerance since
    /// `(bound - width) + width` may round one ulp past `bound`.
    pub fn fits_within(&self, bounds: Bounds, min_size: f64) -> bool {
        self.width >= min_size
            && self.height >= min_size
            && self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= bounds.width + EDGE_TOLERANCE
            && self.bottom() <= bounds.height + EDGE_TOLERANCE
    }
}

/// `max(lo, min(value, hi))`.
///
/// Unlike `f64::clamp` this never panics when `lo > hi`; the floor wins.
#[inline]
fn clamp_floor_wins(value: f64, lo: f64, hi: f64) -> f64 {
    lo.max(value.min(hi))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (100.0f64..=2000.0, 100.0f64..=2000.0).prop_map(|(w, h)| Bounds::new(w, h))
    }

    fn rect_strategy() -> impl Strategy<Value = CropRect> {
        (
            -3000.0f64..=3000.0,
            -3000.0f64..=3000.0,
            -3000.0f64..=3000.0,
            -3000.0f64..=3000.0,
        )
            .prop_map(|(x, y, w, h)| CropRect::new(x, y, w, h))
    }

    proptest! {
        /// Property: Clamping always produces a rectangle that satisfies the invariants.
        #[test]
        fn prop_clamped_fits(bounds in bounds_strategy(), rect in rect_strategy()) {
            let clamped = rect.clamped(bounds, 100.0);
            prop_assert!(clamped.fits_within(bounds, 100.0), "{:?} in {:?}", clamped, bounds);
        }

        /// Property: Clamping is idempotent.
        #[test]
        fn prop_clamp_idempotent(bounds in bounds_strategy(), rect in rect_strategy()) {
            let once = rect.clamped(bounds, 100.0);
            let twice = once.clamped(bounds, 100.0);
            prop_assert_eq!(once, twice);
        }
    }
}
