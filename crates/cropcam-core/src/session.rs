//! Capture session: photo, crop, preview, confirm.
//!
//! The session owns the state of one pass through the capture flow. UI
//! concerns (camera permission, navigation, haptics) stay with the caller,
//! which drives the session from its event handlers:
//!
//! ```text
//! Viewfinder --capture--> Cropping --continue--> Preview --confirm--> Confirmed
//!     ^                      |                     |
//!     +-------- retake ------+---------------------+
//! ```

use thiserror::Error;

use crate::config::CaptureConfig;
use crate::decode::{decode_photo, DecodeError, DecodedImage};
use crate::detect::default_crop_region;
use crate::editor::RectEditor;
use crate::encode::{encode_image, EncodeError};
use crate::geometry::{Bounds, CropRect};
use crate::mapping::{DisplayMapping, MappingError, PixelRect};
use crate::preview::PreviewViewport;
use crate::transform::{apply_crop, CropError};

/// Stage of the capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStage {
    /// Waiting for a photo.
    Viewfinder,
    /// Photo taken, crop box shown.
    Cropping,
    /// Cropped photo shown with pan/zoom.
    Preview,
    /// Crop accepted.
    Confirmed,
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Cannot {operation} during {stage:?} stage")]
    InvalidStage {
        operation: &'static str,
        stage: CaptureStage,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[derive(Debug, Clone)]
enum Stage {
    Viewfinder,
    Cropping {
        photo: DecodedImage,
        editor: RectEditor,
    },
    Preview {
        cropped: DecodedImage,
        jpeg: Vec<u8>,
        viewport: PreviewViewport,
    },
    Confirmed {
        jpeg: Vec<u8>,
    },
}

/// One pass through the capture flow.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    config: CaptureConfig,
    /// Size of the photo as shown on screen; the crop box lives here
    display: Bounds,
    /// Full screen, used to fit the preview
    screen: Bounds,
    stage: Stage,
}

impl CaptureSession {
    /// Start a session. `display` is where the captured photo is drawn
    /// (the crop box's bounding region); `screen` is the preview area.
    pub fn new(config: CaptureConfig, display: Bounds, screen: Bounds) -> Self {
        Self {
            config,
            display,
            screen,
            stage: Stage::Viewfinder,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn stage(&self) -> CaptureStage {
        match self.stage {
            Stage::Viewfinder => CaptureStage::Viewfinder,
            Stage::Cropping { .. } => CaptureStage::Cropping,
            Stage::Preview { .. } => CaptureStage::Preview,
            Stage::Confirmed { .. } => CaptureStage::Confirmed,
        }
    }

    /// Decode captured bytes and enter the cropping stage.
    ///
    /// Returns the initial crop box.
    pub fn capture_photo(&mut self, bytes: &[u8]) -> Result<CropRect, CaptureError> {
        self.expect_stage(CaptureStage::Viewfinder, "capture a photo")?;
        let photo = decode_photo(bytes)?;
        self.capture_image(photo)
    }

    /// Enter the cropping stage with an already decoded photo.
    ///
    /// The crop box starts at the default region for the display bounds.
    pub fn capture_image(&mut self, photo: DecodedImage) -> Result<CropRect, CaptureError> {
        self.expect_stage(CaptureStage::Viewfinder, "capture a photo")?;
        // Validate now so a bad display size fails at capture, not at crop time
        DisplayMapping::new(self.display, photo.width, photo.height)?;

        let initial = default_crop_region(self.display, &self.config.auto_box, &self.config.editor);
        let editor = RectEditor::new(initial, self.display, self.config.editor);
        let rect = editor.rect();
        log::debug!(
            "captured {}x{} photo, initial crop {:?}",
            photo.width,
            photo.height,
            rect
        );
        self.stage = Stage::Cropping { photo, editor };
        Ok(rect)
    }

    /// Crop box editor, while cropping.
    pub fn editor(&self) -> Option<&RectEditor> {
        match &self.stage {
            Stage::Cropping { editor, .. } => Some(editor),
            _ => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut RectEditor> {
        match &mut self.stage {
            Stage::Cropping { editor, .. } => Some(editor),
            _ => None,
        }
    }

    /// Crop the photo to the current box, export it, and enter preview.
    ///
    /// Returns the cropped region in source pixels.
    pub fn continue_to_preview(&mut self) -> Result<PixelRect, CaptureError> {
        let Stage::Cropping { photo, editor } = &self.stage else {
            return Err(self.invalid("continue to preview"));
        };

        let mapping = DisplayMapping::new(self.display, photo.width, photo.height)?;
        let region = mapping.to_source(&editor.rect());
        let cropped = apply_crop(photo, region)?;
        let jpeg = encode_image(&cropped, self.config.jpeg_quality)?;
        let viewport = PreviewViewport::new(self.screen, cropped.width, cropped.height, self.config.zoom);
        log::debug!("crop {:?} exported as {} byte JPEG", region, jpeg.len());

        self.stage = Stage::Preview {
            cropped,
            jpeg,
            viewport,
        };
        Ok(region)
    }

    /// Cropped photo, while previewing.
    pub fn cropped(&self) -> Option<&DecodedImage> {
        match &self.stage {
            Stage::Preview { cropped, .. } => Some(cropped),
            _ => None,
        }
    }

    pub fn viewport(&self) -> Option<&PreviewViewport> {
        match &self.stage {
            Stage::Preview { viewport, .. } => Some(viewport),
            _ => None,
        }
    }

    pub fn viewport_mut(&mut self) -> Option<&mut PreviewViewport> {
        match &mut self.stage {
            Stage::Preview { viewport, .. } => Some(viewport),
            _ => None,
        }
    }

    /// Accept the preview. Returns the exported JPEG bytes.
    pub fn confirm(&mut self) -> Result<Vec<u8>, CaptureError> {
        match std::mem::replace(&mut self.stage, Stage::Viewfinder) {
            Stage::Preview { jpeg, .. } => {
                log::debug!("capture confirmed ({} bytes)", jpeg.len());
                let exported = jpeg.clone();
                self.stage = Stage::Confirmed { jpeg };
                Ok(exported)
            }
            other => {
                self.stage = other;
                Err(self.invalid("confirm"))
            }
        }
    }

    /// Exported JPEG of a confirmed session.
    pub fn confirmed_jpeg(&self) -> Option<&[u8]> {
        match &self.stage {
            Stage::Confirmed { jpeg } => Some(jpeg.as_slice()),
            _ => None,
        }
    }

    /// Drop the current photo and go back to the viewfinder.
    pub fn retake(&mut self) -> Result<(), CaptureError> {
        match self.stage() {
            CaptureStage::Cropping | CaptureStage::Preview => {
                log::debug!("retake from {:?}", self.stage());
                self.stage = Stage::Viewfinder;
                Ok(())
            }
            _ => Err(self.invalid("retake")),
        }
    }

    fn expect_stage(&self, expected: CaptureStage, operation: &'static str) -> Result<(), CaptureError> {
        if self.stage() == expected {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> CaptureError {
        CaptureError::InvalidStage {
            operation,
            stage: self.stage(),
        }
    }
}
