//! Mock vision provider with scripted per-poll results.
//!
//! Each locate call consumes the next scripted result; once the script is
//! exhausted every further poll reports empty. All incoming calls are
//! recorded for verification.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use robotui_core::LocateResult;

use crate::ports::OptionBag;
use crate::ports::VisionError;
use crate::ports::VisionProvider;

/// Specifies what error to return from mock vision operations.
#[derive(Debug, Clone)]
pub enum MockVisionError {
    UnsupportedFrameOutput(String),
    Acquisition(String),
    Recognition(String),
}

impl MockVisionError {
    fn to_vision_error(&self) -> VisionError {
        match self {
            MockVisionError::UnsupportedFrameOutput(mode) => {
                VisionError::UnsupportedFrameOutput(mode.clone())
            }
            MockVisionError::Acquisition(reason) => VisionError::Acquisition(reason.clone()),
            MockVisionError::Recognition(reason) => VisionError::Recognition(reason.clone()),
        }
    }
}

/// What a single locate call asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateQuery {
    Image { image_id: String, force_reload: bool },
    Text { text: String },
}

/// A recorded locate call: which frame it ran against and what it asked for.
#[derive(Debug, Clone)]
pub struct LocateCall {
    pub frame: u64,
    pub query: LocateQuery,
    pub options: OptionBag,
}

impl LocateCall {
    pub fn image_id(&self) -> Option<&str> {
        match &self.query {
            LocateQuery::Image { image_id, .. } => Some(image_id),
            LocateQuery::Text { .. } => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.query {
            LocateQuery::Text { text } => Some(text),
            LocateQuery::Image { .. } => None,
        }
    }

    pub fn force_reload(&self) -> bool {
        matches!(
            self.query,
            LocateQuery::Image {
                force_reload: true,
                ..
            }
        )
    }
}

/// A configurable mock vision provider.
///
/// With no scripted results every poll reports empty, which exercises the
/// retry loop's timeout path. Frames are plain sequence numbers so tests
/// can verify that every poll acquired a fresh one.
#[derive(Default)]
pub struct MockVision {
    responses: Mutex<VecDeque<LocateResult>>,
    acquire_error: Option<MockVisionError>,
    locate_error: Option<MockVisionError>,
    frame_latency: Duration,
    frames_acquired: AtomicUsize,
    locate_calls: Mutex<Vec<LocateCall>>,
}

impl MockVision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MockVisionBuilder {
        MockVisionBuilder::new()
    }

    /// Returns the number of frames acquired so far.
    pub fn frames_acquired(&self) -> usize {
        self.frames_acquired.load(Ordering::SeqCst)
    }

    /// Returns the number of locate calls received so far.
    pub fn locate_call_count(&self) -> usize {
        self.locate_calls.lock().unwrap().len()
    }

    /// Returns every locate call received, in order.
    pub fn locate_calls(&self) -> Vec<LocateCall> {
        self.locate_calls.lock().unwrap().clone()
    }

    fn record(&self, call: LocateCall) {
        self.locate_calls.lock().unwrap().push(call);
    }

    fn next_response(&self) -> LocateResult {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default()
    }
}

impl VisionProvider for MockVision {
    type Frame = u64;

    fn acquire_frame(&self) -> Result<u64, VisionError> {
        if !self.frame_latency.is_zero() {
            std::thread::sleep(self.frame_latency);
        }
        let frame = self.frames_acquired.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        if let Some(err) = &self.acquire_error {
            return Err(err.to_vision_error());
        }
        Ok(frame)
    }

    fn locate_image(
        &self,
        frame: &u64,
        image_id: &str,
        force_reload: bool,
        options: &OptionBag,
    ) -> Result<LocateResult, VisionError> {
        self.record(LocateCall {
            frame: *frame,
            query: LocateQuery::Image {
                image_id: image_id.to_string(),
                force_reload,
            },
            options: options.clone(),
        });
        if let Some(err) = &self.locate_error {
            return Err(err.to_vision_error());
        }
        Ok(self.next_response())
    }

    fn locate_text(
        &self,
        frame: &u64,
        text: &str,
        options: &OptionBag,
    ) -> Result<LocateResult, VisionError> {
        self.record(LocateCall {
            frame: *frame,
            query: LocateQuery::Text {
                text: text.to_string(),
            },
            options: options.clone(),
        });
        if let Some(err) = &self.locate_error {
            return Err(err.to_vision_error());
        }
        Ok(self.next_response())
    }
}

#[derive(Default)]
pub struct MockVisionBuilder {
    responses: VecDeque<LocateResult>,
    acquire_error: Option<MockVisionError>,
    locate_error: Option<MockVisionError>,
    frame_latency: Duration,
}

impl MockVisionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next locate call to return `result`.
    pub fn with_result(mut self, result: LocateResult) -> Self {
        self.responses.push_back(result);
        self
    }

    /// Scripts `empty_polls` empty results followed by `result`.
    pub fn with_found_after(mut self, empty_polls: usize, result: LocateResult) -> Self {
        for _ in 0..empty_polls {
            self.responses.push_back(Vec::new());
        }
        self.responses.push_back(result);
        self
    }

    pub fn with_acquire_error(mut self, error: MockVisionError) -> Self {
        self.acquire_error = Some(error);
        self
    }

    pub fn with_locate_error(mut self, error: MockVisionError) -> Self {
        self.locate_error = Some(error);
        self
    }

    /// Makes every frame acquisition block for `latency`, emulating the
    /// cost of a real capture.
    pub fn with_frame_latency(mut self, latency: Duration) -> Self {
        self.frame_latency = latency;
        self
    }

    pub fn build(self) -> MockVision {
        MockVision {
            responses: Mutex::new(self.responses),
            acquire_error: self.acquire_error,
            locate_error: self.locate_error,
            frame_latency: self.frame_latency,
            frames_acquired: AtomicUsize::new(0),
            locate_calls: Mutex::new(Vec::new()),
        }
    }
}
