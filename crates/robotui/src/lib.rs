//! Gesture and vision composition for GUI test robots.
//!
//! The device under test sits behind two capability traits: a
//! [`VisionProvider`] that captures frames and locates images or text in
//! them, and a [`GestureProvider`] that synthesizes touch gestures at
//! normalized work-area coordinates. [`UserInteraction`] composes the two:
//! it resolves a target given in any form (position, element, image
//! identifier, text) to a concrete coordinate, polling vision within a
//! bounded timeout when the target is symbolic, and dispatches the gesture.
//!
//! ```no_run
//! use std::sync::Arc;
//! use robotui::test_support::{MockGesture, MockVision};
//! use robotui::{TapParams, UserInteraction};
//!
//! let ui = UserInteraction::new(Arc::new(MockVision::new()), Arc::new(MockGesture::new()));
//! ui.tap_image("homescreen-browser.png", &TapParams::default())?;
//! # Ok::<(), robotui::InteractionError>(())
//! ```

#![deny(clippy::all)]

mod config;
mod error;
mod interaction;
mod locator;
pub mod ports;
pub mod telemetry;
pub mod test_support;

pub use config::InteractionConfig;
pub use error::InteractionError;
pub use interaction::Direction;
pub use interaction::DragParams;
pub use interaction::FlickParams;
pub use interaction::RotateParams;
pub use interaction::SwipeParams;
pub use interaction::TapParams;
pub use interaction::UserInteraction;
pub use locator::locate_image;
pub use locator::locate_text;
pub use ports::GestureError;
pub use ports::GestureProvider;
pub use ports::OptionBag;
pub use ports::VisionError;
pub use ports::VisionProvider;

// Domain types, re-exported so callers rarely need robotui-core directly.
pub use robotui_core::BoundingBox;
pub use robotui_core::Element;
pub use robotui_core::GestureTarget;
pub use robotui_core::LocateResult;
pub use robotui_core::Position;

pub type Result<T> = std::result::Result<T, InteractionError>;
