use minifb::Error as WindowError;
use nokhwa::NokhwaError;
use rusty_tesseract::TessError;

use std::error::Error;
use std::fmt;
use std::io::Error as IOError;

#[derive(Debug)]
pub struct GateError(GateErrorKind);

#[derive(Debug)]
pub enum GateErrorKind {
    IOError(IOError),
    CameraError(NokhwaError),
    OcrError(TessError),
    WindowError(WindowError),
}

impl GateError {
    fn kind(&self) -> &GateErrorKind {
        &self.0
    }
}

impl<T> From<T> for GateError
where T: Into<GateErrorKind>
{
    fn from(e: T) -> Self {
        Self(e.into())
    }
}

impl fmt::Display for GateError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            GateErrorKind::IOError(e) => e.fmt(f),
            GateErrorKind::CameraError(e) => e.fmt(f),
            GateErrorKind::OcrError(e) => e.fmt(f),
            GateErrorKind::WindowError(e) => e.fmt(f),
        }
    }
}

impl Error for GateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.kind() {
            GateErrorKind::IOError(e) => Some(e),
            GateErrorKind::CameraError(e) => Some(e),
            GateErrorKind::OcrError(e) => Some(e),
            GateErrorKind::WindowError(e) => Some(e),
        }
    }
}

impl From<IOError> for GateErrorKind {
    fn from(e: IOError) -> Self {
        Self::IOError(e)
    }
}

impl From<NokhwaError> for GateErrorKind {
    fn from(e: NokhwaError) -> Self {
        Self::CameraError(e)
    }
}

impl From<TessError> for GateErrorKind {
    fn from(e: TessError) -> Self {
        Self::OcrError(e)
    }
}

impl From<WindowError> for GateErrorKind {
    fn from(e: WindowError) -> Self {
        Self::WindowError(e)
    }
}
