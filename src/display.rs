use image::{GrayImage, RgbImage};
use minifb::{Key, Window, WindowOptions};

use std::time::Duration;

use crate::error::GateError;
use crate::utils;

/// A live window fed one image per update. Quit key is `q`.
pub struct VideoWindow {
    window: Window,
}

impl VideoWindow {

    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, GateError> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.limit_update_rate(Some(Duration::from_micros(16_600)));
        Ok(Self { window })
    }

    pub fn show_rgb(&mut self, frame: &RgbImage) -> Result<(), GateError> {
        let buffer = utils::pack_rgb(frame);
        self.window.update_with_buffer(
            &buffer,
            frame.width() as usize,
            frame.height() as usize,
        )?;
        Ok(())
    }

    pub fn show_gray(&mut self, frame: &GrayImage) -> Result<(), GateError> {
        let buffer = utils::pack_luma(frame);
        self.window.update_with_buffer(
            &buffer,
            frame.width() as usize,
            frame.height() as usize,
        )?;
        Ok(())
    }

    /// Pump the event loop without pushing a new buffer, so key state stays
    /// current on frames that are not displayed.
    pub fn poll(&mut self) {
        self.window.update();
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn quit_requested(&self) -> bool {
        self.window.is_key_down(Key::Q)
    }

}
