//! Pan and zoom state for previewing the cropped photo.
//!
//! The cropped image is fitted to a fraction of the screen width. Zoom
//! buttons step the scale and recentre the image; a drag pans it, and when
//! the drag ends the translation settles back inside the range where the
//! scaled image still covers the viewport.

use serde::{Deserialize, Serialize};

use crate::config::ZoomConfig;
use crate::geometry::Bounds;
use crate::gesture::GestureHandler;

/// Translation of the preview image from its centred position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

impl Pan {
    pub const ZERO: Pan = Pan { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum PanState {
    #[default]
    Idle,
    Panning { start: Pan },
}

/// Fit an image to `viewport_fraction` of the screen width, keeping its
/// aspect ratio.
///
/// A degenerate source size falls back to a square of the fitted width.
pub fn fit_display_size(
    screen: Bounds,
    source_width: u32,
    source_height: u32,
    viewport_fraction: f64,
) -> Bounds {
    let display_width = screen.width * viewport_fraction;
    if source_width == 0 || source_height == 0 {
        return Bounds::new(display_width, display_width);
    }
    let aspect = source_width as f64 / source_height as f64;
    Bounds::new(display_width, display_width / aspect)
}

/// Pan/zoom state of the preview screen.
#[derive(Debug, Clone)]
pub struct PreviewViewport {
    screen: Bounds,
    image: Bounds,
    config: ZoomConfig,
    scale: f64,
    translation: Pan,
    pan: PanState,
}

impl PreviewViewport {
    /// Create a viewport for a `source_width` x `source_height` image on
    /// `screen`, at scale 1 and centred.
    pub fn new(screen: Bounds, source_width: u32, source_height: u32, config: ZoomConfig) -> Self {
        let image = fit_display_size(screen, source_width, source_height, config.viewport_fraction);
        Self {
            screen,
            image,
            config,
            scale: 1.0,
            translation: Pan::ZERO,
            pan: PanState::Idle,
        }
    }

    /// Fitted image size at scale 1.
    pub fn image_size(&self) -> Bounds {
        self.image
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translation(&self) -> Pan {
        self.translation
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.pan, PanState::Panning { .. })
    }

    /// Zoom label value, e.g. `150` for 1.5x.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round().max(0.0) as u32
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_scale(self.scale + self.config.step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_scale(self.scale - self.config.step)
    }

    /// Set the scale (clamped to the configured range) and recentre.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        self.scale = scale.max(self.config.min_scale).min(self.config.max_scale);
        self.translation = Pan::ZERO;
        log::debug!("preview zoom {}%", self.zoom_percent());
        self.scale
    }

    /// Largest translation per axis that keeps the viewport covered.
    ///
    /// Zero on an axis where the scaled image is smaller than the
    /// viewport.
    pub fn max_pan(&self) -> Pan {
        let fraction = self.config.viewport_fraction;
        let scaled_w = self.image.width * self.scale;
        let scaled_h = self.image.height * self.scale;
        Pan::new(
            ((scaled_w - self.screen.width * fraction) / 2.0).max(0.0),
            ((scaled_h - self.screen.height * fraction) / 2.0).max(0.0),
        )
    }

    /// Pull the translation back inside [`max_pan`](Self::max_pan).
    pub fn settle(&mut self) -> Pan {
        let max = self.max_pan();
        self.translation = Pan::new(
            self.translation.x.max(-max.x).min(max.x),
            self.translation.y.max(-max.y).min(max.y),
        );
        self.translation
    }
}

impl GestureHandler for PreviewViewport {
    type Output = Pan;

    fn on_gesture_start(&mut self, _x: f64, _y: f64) {
        self.pan = PanState::Panning {
            start: self.translation,
        };
    }

    fn on_gesture_move(&mut self, dx: f64, dy: f64) -> Option<Pan> {
        let PanState::Panning { start } = self.pan else {
            return None;
        };
        self.translation = Pan::new(start.x + dx, start.y + dy);
        Some(self.translation)
    }

    fn on_gesture_end(&mut self) -> Option<Pan> {
        if !self.is_panning() {
            return None;
        }
        self.pan = PanState::Idle;
        let settled = self.settle();
        log::trace!("preview pan settled at ({:.1}, {:.1})", settled.x, settled.y);
        Some(settled)
    }
}
