//! Mock gesture provider that records every dispatched call.

use std::sync::Mutex;
use std::time::Duration;

use robotui_core::Position;

use crate::ports::GestureError;
use crate::ports::GestureProvider;
use crate::ports::OptionBag;

/// Specifies what error to return from mock gesture operations.
#[derive(Debug, Clone)]
pub enum MockGestureError {
    Unsupported(String),
    Rejected(String),
    Device(String),
}

impl MockGestureError {
    fn to_gesture_error(&self) -> GestureError {
        match self {
            MockGestureError::Unsupported(gesture) => GestureError::Unsupported(gesture.clone()),
            MockGestureError::Rejected(reason) => GestureError::Rejected(reason.clone()),
            MockGestureError::Device(reason) => GestureError::Device(reason.clone()),
        }
    }
}

/// A dispatched gesture with exactly the parameters the provider received.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureCall {
    Tap {
        pos: Position,
        duration: Duration,
        options: OptionBag,
    },
    Drag {
        begin: Position,
        end: Position,
        begin_duration: Duration,
        end_duration: Duration,
        options: OptionBag,
    },
    Swipe {
        begin: Position,
        end: Position,
        options: OptionBag,
    },
    Flick {
        begin: Position,
        end: Position,
        options: OptionBag,
    },
    Rotate {
        center: Position,
        begin: Position,
        arc_angle: f64,
        options: OptionBag,
    },
}

/// A mock gesture provider. Successful by default; `failing` makes every
/// operation return the given error after recording the call.
#[derive(Default)]
pub struct MockGesture {
    calls: Mutex<Vec<GestureCall>>,
    error: Option<MockGestureError>,
}

impl MockGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: MockGestureError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            error: Some(error),
        }
    }

    /// Returns every dispatched call, in order.
    pub fn calls(&self) -> Vec<GestureCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<GestureCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn record(&self, call: GestureCall) -> Result<(), GestureError> {
        self.calls.lock().unwrap().push(call);
        match &self.error {
            Some(err) => Err(err.to_gesture_error()),
            None => Ok(()),
        }
    }
}

impl GestureProvider for MockGesture {
    fn tap(
        &self,
        pos: Position,
        duration: Duration,
        options: &OptionBag,
    ) -> Result<(), GestureError> {
        self.record(GestureCall::Tap {
            pos,
            duration,
            options: options.clone(),
        })
    }

    fn drag(
        &self,
        begin: Position,
        end: Position,
        begin_duration: Duration,
        end_duration: Duration,
        options: &OptionBag,
    ) -> Result<(), GestureError> {
        self.record(GestureCall::Drag {
            begin,
            end,
            begin_duration,
            end_duration,
            options: options.clone(),
        })
    }

    fn swipe(
        &self,
        begin: Position,
        end: Position,
        options: &OptionBag,
    ) -> Result<(), GestureError> {
        self.record(GestureCall::Swipe {
            begin,
            end,
            options: options.clone(),
        })
    }

    fn flick(
        &self,
        begin: Position,
        end: Position,
        options: &OptionBag,
    ) -> Result<(), GestureError> {
        self.record(GestureCall::Flick {
            begin,
            end,
            options: options.clone(),
        })
    }

    fn rotate(
        &self,
        center: Position,
        begin: Position,
        arc_angle: f64,
        options: &OptionBag,
    ) -> Result<(), GestureError> {
        self.record(GestureCall::Rotate {
            center,
            begin,
            arc_angle,
            options: options.clone(),
        })
    }
}
