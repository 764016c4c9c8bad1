use image::{GrayImage, RgbImage};
use imageproc::rect::Rect;

pub mod detect;
pub mod display;
pub mod error;
pub mod ocr;
pub mod registry;
pub mod utils;

use error::GateError;
use ocr::Ocr;
use registry::Registry;

/// Pipeline context: everything that outlives a single frame.
pub struct PlateGate {
    registry: Registry,
    ocr: Ocr,
}

/// What the pipeline produced for a frame that contained a plate-shaped
/// region. Lives only as long as the frame it came from.
pub struct Recognition {
    pub text: String,
    pub allowed: bool,
    pub bbox: Rect,
    pub plate: GrayImage,
}

impl PlateGate {

    pub fn new(registry: Registry) -> Self {
        Self { registry, ocr: Ocr::new() }
    }

    /// Run detection, OCR and the registry lookup on one frame.
    ///
    /// `Ok(None)` means no plate-shaped contour was found; that is not an
    /// error, the caller just moves on to the next frame.
    pub fn process_frame(&self, frame: &RgbImage) -> Result<Option<Recognition>, GateError> {
        let gray = detect::preprocess(frame);
        let candidate = match detect::find_plate(&gray) {
            Some(candidate) => candidate,
            None => return Ok(None),
        };
        let plate = detect::crop_plate(&gray, candidate.bbox);
        let raw = self.ocr.recognize(&plate)?;
        let text = ocr::filter_plate_text(&raw);
        let allowed = self.registry.contains(&text);
        Ok(Some(Recognition { text, allowed, bbox: candidate.bbox, plate }))
    }

}
