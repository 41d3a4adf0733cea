//! Initial crop box proposed right after a photo is taken.

use crate::config::{AutoBoxConfig, EditorConfig};
use crate::geometry::{Bounds, CropRect};

/// Propose a crop box for a freshly captured photo shown in `bounds`.
///
/// The box is horizontally centred, `top_fraction` down from the top, and
/// sized by the configured fractions of the region. The result is clamped
/// with the editor's rules so it is always a valid starting rectangle.
pub fn default_crop_region(
    bounds: Bounds,
    auto_box: &AutoBoxConfig,
    editor: &EditorConfig,
) -> CropRect {
    let width = bounds.width * auto_box.width_fraction;
    let height = bounds.height * auto_box.height_fraction;
    let x = (bounds.width - width) / 2.0;
    let y = bounds.height * auto_box.top_fraction;

    CropRect::new(x, y, width, height).clamped(bounds, editor.min_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_proportions() {
        let rect = default_crop_region(
            Bounds::new(1000.0, 2000.0),
            &AutoBoxConfig::default(),
            &EditorConfig::default(),
        );
        assert!((rect.width - 800.0).abs() < 1e-9);
        assert!((rect.height - 800.0).abs() < 1e-9);
        assert!((rect.x - 100.0).abs() < 1e-9);
        assert!((rect.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_screen_respects_minimum() {
        let rect = default_crop_region(
            Bounds::new(110.0, 200.0),
            &AutoBoxConfig::default(),
            &EditorConfig::default(),
        );
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 100.0);
        assert!(rect.fits_within(Bounds::new(110.0, 200.0), 100.0));
    }

    #[test]
    fn test_custom_fractions() {
        let auto_box = AutoBoxConfig {
            width_fraction: 1.0,
            height_fraction: 1.0,
            top_fraction: 0.0,
        };
        let bounds = Bounds::new(390.0, 844.0);
        let rect = default_crop_region(bounds, &auto_box, &EditorConfig::default());
        assert_eq!(rect, CropRect::new(0.0, 0.0, 390.0, 844.0));
    }

    #[test]
    fn test_oversized_top_fraction_is_pulled_inside() {
        let auto_box = AutoBoxConfig {
            top_fraction: 0.9,
            ..Default::default()
        };
        let bounds = Bounds::new(400.0, 800.0);
        let rect = default_crop_region(bounds, &auto_box, &EditorConfig::default());
        assert!(rect.fits_within(bounds, 100.0));
        assert!((rect.bottom() - 800.0).abs() < 1e-9);
    }
}
