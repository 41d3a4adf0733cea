//! Tunables for the capture flow.
//!
//! Every struct deserializes with per-field defaults, so callers only pass
//! the values they want to change.

use serde::{Deserialize, Serialize};

/// Smallest allowed crop box side, in display units.
pub const MIN_CROP_SIZE: f64 = 100.0;

/// Width of the grab zone along each side of the crop box.
pub const HANDLE_MARGIN: f64 = 24.0;

/// JPEG quality used when exporting the cropped photo.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Crop box editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum width and height of the crop box
    pub min_size: f64,
    /// Size of the corner and edge grab zones
    pub handle_margin: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_CROP_SIZE,
            handle_margin: HANDLE_MARGIN,
        }
    }
}

/// Proportions of the crop box proposed right after capture.
///
/// All fractions are relative to the bounding region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoBoxConfig {
    pub width_fraction: f64,
    pub height_fraction: f64,
    /// Distance of the top edge from the top of the region
    pub top_fraction: f64,
}

impl Default for AutoBoxConfig {
    fn default() -> Self {
        Self {
            width_fraction: 0.8,
            height_fraction: 0.4,
            top_fraction: 0.15,
        }
    }
}

/// Preview screen pan/zoom settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Scale change per zoom button press
    pub step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Share of the screen the preview image is fitted into
    pub viewport_fraction: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: 0.5,
            min_scale: 0.5,
            max_scale: 3.0,
            viewport_fraction: 0.9,
        }
    }
}

/// Settings for a whole capture session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub editor: EditorConfig,
    pub auto_box: AutoBoxConfig,
    pub zoom: ZoomConfig,
    /// JPEG quality for the cropped export (1-100)
    pub jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            auto_box: AutoBoxConfig::default(),
            zoom: ZoomConfig::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CaptureConfig::default();
        assert_eq!(config.editor.min_size, 100.0);
        assert_eq!(config.editor.handle_margin, 24.0);
        assert_eq!(config.auto_box.width_fraction, 0.8);
        assert_eq!(config.zoom.max_scale, 3.0);
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CaptureConfig =
            serde_json::from_str(r#"{ "editor": { "min_size": 48.0 }, "jpeg_quality": 75 }"#)
                .unwrap();
        assert_eq!(config.editor.min_size, 48.0);
        assert_eq!(config.editor.handle_margin, HANDLE_MARGIN);
        assert_eq!(config.zoom, ZoomConfig::default());
        assert_eq!(config.jpeg_quality, 75);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: CaptureConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CaptureConfig::default());
    }
}
