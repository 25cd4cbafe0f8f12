use std::time::Duration;

use robotui_core::Position;
use thiserror::Error;

use crate::ports::OptionBag;

/// Failures reported by a gesture backend. Passed through untranslated;
/// gesture dispatch is never retried.
#[derive(Error, Debug)]
pub enum GestureError {
    /// The configured backend cannot synthesize the requested gesture.
    #[error("unsupported gesture: {0}")]
    Unsupported(String),
    #[error("gesture rejected: {0}")]
    Rejected(String),
    #[error("device error: {0}")]
    Device(String),
}

/// Touch-synthesis side of the device under test.
///
/// Positions are normalized work-area coordinates, durations are
/// non-negative; a zero tap duration means an ordinary tap with no hold.
/// The options bag arrives exactly as the caller supplied it.
pub trait GestureProvider: Send + Sync {
    /// Press and release at `pos`, holding for at least `duration`.
    fn tap(
        &self,
        pos: Position,
        duration: Duration,
        options: &OptionBag,
    ) -> Result<(), GestureError>;

    /// Sharp begin, straight move, sharp end. `begin_duration` and
    /// `end_duration` are the minimum holds around the move.
    fn drag(
        &self,
        begin: Position,
        end: Position,
        begin_duration: Duration,
        end_duration: Duration,
        options: &OptionBag,
    ) -> Result<(), GestureError>;

    /// Smooth begin, straight move, smooth end.
    fn swipe(
        &self,
        begin: Position,
        end: Position,
        options: &OptionBag,
    ) -> Result<(), GestureError>;

    /// Sharp begin, straight move, smooth end.
    fn flick(
        &self,
        begin: Position,
        end: Position,
        options: &OptionBag,
    ) -> Result<(), GestureError>;

    /// Curved move around `center` starting at `begin`. The sign of
    /// `arc_angle` encodes the rotation direction (positive clockwise), its
    /// magnitude the sweep, up to one full revolution per call.
    fn rotate(
        &self,
        center: Position,
        begin: Position,
        arc_angle: f64,
        options: &OptionBag,
    ) -> Result<(), GestureError>;
}
