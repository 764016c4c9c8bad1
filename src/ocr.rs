use image::{DynamicImage, GrayImage};
use rusty_tesseract::{Args, Image};

use std::collections::HashMap;

use crate::error::GateError;

// tesseract page segmentation mode 11: sparse text, no layout analysis
const SPARSE_TEXT: i32 = 11;

/// Thin wrapper over the tesseract CLI, fixed to sparse-text mode.
///
/// No confidence threshold and no retry: whatever tesseract returns for the
/// crop is handed to the text filter as-is.
pub struct Ocr {
    args: Args,
}

impl Ocr {

    pub fn new() -> Self {
        let args = Args {
            lang: "eng".to_string(),
            config_variables: HashMap::new(),
            dpi: None,
            psm: Some(SPARSE_TEXT),
            oem: Some(3),
        };
        Self { args }
    }

    pub fn recognize(&self, plate: &GrayImage) -> Result<String, GateError> {
        let image = Image::from_dynamic_image(&DynamicImage::ImageLuma8(plate.clone()))?;
        let text = rusty_tesseract::image_to_string(&image, &self.args)?;
        Ok(text)
    }

}

impl Default for Ocr {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce raw OCR output to the characters a plate can contain: strip
/// everything outside `[A-Za-z0-9-]`, then uppercase. No length or format
/// validation, any resulting string is accepted.
pub fn filter_plate_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_uppercase()
}
