//! Core value types for robotui.
//!
//! This crate carries the pure domain of the interaction layer: normalized
//! work-area geometry (interpolation and direction-to-edge projection) and
//! the immutable element model produced by vision lookups.

#![deny(clippy::all)]

mod element;
pub mod geometry;

pub use element::Element;
pub use element::GestureTarget;
pub use element::LocateResult;
pub use geometry::ANGLE_DOWN;
pub use geometry::ANGLE_LEFT;
pub use geometry::ANGLE_RIGHT;
pub use geometry::ANGLE_UP;
pub use geometry::BoundingBox;
pub use geometry::Position;
pub use geometry::clockwise_arc_angle;
pub use geometry::counterclockwise_arc_angle;
pub use geometry::interpolate;
pub use geometry::max_travel_distance;
pub use geometry::project_along_angle;
