use robotui_core::LocateResult;
use thiserror::Error;

use crate::ports::OptionBag;

/// Failures reported by a vision backend.
///
/// These pass through the interaction layer untranslated; only an empty
/// locate result is ever retried, never an error.
#[derive(Error, Debug)]
pub enum VisionError {
    /// The configured backend cannot service the requested operation, for
    /// example a frame output mode the wrapper does not understand.
    #[error("unsupported frame output: {0}")]
    UnsupportedFrameOutput(String),
    #[error("frame acquisition failed: {0}")]
    Acquisition(String),
    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Observation side of the device under test.
///
/// A provider pairs a frame source (camera or screenshot emulation) with
/// image- and text-recognition engines. `Frame` is whatever handle the
/// backend uses for one capture; the interaction layer never looks inside
/// it and never caches one across locate calls.
pub trait VisionProvider: Send + Sync {
    type Frame;

    /// Takes a fresh capture of the current on-screen state. Must be
    /// callable repeatedly; cost and latency are backend-defined.
    fn acquire_frame(&self) -> Result<Self::Frame, VisionError>;

    /// Locates `image_id` within `frame`, best match first. `force_reload`
    /// asks the backend to bypass any reference-image cache.
    fn locate_image(
        &self,
        frame: &Self::Frame,
        image_id: &str,
        force_reload: bool,
        options: &OptionBag,
    ) -> Result<LocateResult, VisionError>;

    /// Locates `text` within `frame`, best match first.
    fn locate_text(
        &self,
        frame: &Self::Frame,
        text: &str,
        options: &OptionBag,
    ) -> Result<LocateResult, VisionError>;
}
