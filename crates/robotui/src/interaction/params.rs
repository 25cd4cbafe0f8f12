//! Per-family gesture parameters.
//!
//! Every struct carries the optional tail of its gesture family with
//! workable defaults: relative positions at the element center, zero hold
//! durations, the facade-level locate timeout, and an empty options bag.

use std::time::Duration;

use robotui_core::Position;
use robotui_core::geometry::ANGLE_UP;

use crate::ports::OptionBag;

/// A directional end point: travel `distance` (as a proportion of the
/// maximal in-area travel) from the begin position along `angle`. When a
/// gesture is given a direction it pre-empts any explicit end target.
#[derive(Debug, Clone, Copy)]
pub struct Direction {
    pub angle: f64,
    pub distance: f64,
}

impl Direction {
    pub fn new(angle: f64, distance: f64) -> Self {
        Self { angle, distance }
    }

    /// Full travel toward the work-area edge at `angle`.
    pub fn toward(angle: f64) -> Self {
        Self::new(angle, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct TapParams {
    /// Point to tap within the target's bounding box.
    pub rel: Position,
    /// Minimum hold between press and release; zero is an ordinary tap.
    pub duration: Duration,
    /// Overrides the facade-level locate timeout for symbolic targets.
    pub locate_timeout: Option<Duration>,
    pub options: OptionBag,
}

impl Default for TapParams {
    fn default() -> Self {
        Self {
            rel: Position::CENTER,
            duration: Duration::ZERO,
            locate_timeout: None,
            options: OptionBag::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DragParams {
    pub begin_rel: Position,
    pub end_rel: Position,
    /// Pre-empts the end target when set.
    pub direction: Option<Direction>,
    /// Minimum hold between press and move.
    pub begin_duration: Duration,
    /// Minimum hold between move and release.
    pub end_duration: Duration,
    pub locate_timeout: Option<Duration>,
    pub options: OptionBag,
}

impl Default for DragParams {
    fn default() -> Self {
        Self {
            begin_rel: Position::CENTER,
            end_rel: Position::CENTER,
            direction: None,
            begin_duration: Duration::ZERO,
            end_duration: Duration::ZERO,
            locate_timeout: None,
            options: OptionBag::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SwipeParams {
    pub begin_rel: Position,
    pub end_rel: Position,
    /// Pre-empts the end target when set.
    pub direction: Option<Direction>,
    pub locate_timeout: Option<Duration>,
    pub options: OptionBag,
}

impl Default for SwipeParams {
    fn default() -> Self {
        Self {
            begin_rel: Position::CENTER,
            end_rel: Position::CENTER,
            direction: None,
            locate_timeout: None,
            options: OptionBag::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlickParams {
    pub begin_rel: Position,
    pub end_rel: Position,
    /// Pre-empts the end target when set.
    pub direction: Option<Direction>,
    pub locate_timeout: Option<Duration>,
    pub options: OptionBag,
}

impl Default for FlickParams {
    fn default() -> Self {
        Self {
            begin_rel: Position::CENTER,
            end_rel: Position::CENTER,
            direction: None,
            locate_timeout: None,
            options: OptionBag::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RotateParams {
    /// Center of rotation within the element's bounding box.
    pub center_rel: Position,
    /// Explicit starting position; when unset it is derived from
    /// `begin_angle` and `radius` on the element's own area.
    pub begin: Option<Position>,
    pub begin_angle: f64,
    /// Starting-point distance from the center, as a proportion of the
    /// maximal travel within the element at `begin_angle`.
    pub radius: f64,
    /// Signed arc: positive clockwise, negative counterclockwise, magnitude
    /// up to one full revolution.
    pub arc_angle: f64,
    pub options: OptionBag,
}

impl Default for RotateParams {
    fn default() -> Self {
        Self {
            center_rel: Position::CENTER,
            begin: None,
            begin_angle: ANGLE_UP,
            radius: 0.8,
            arc_angle: 360.0,
            options: OptionBag::new(),
        }
    }
}
