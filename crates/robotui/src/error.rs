//! Errors surfaced by the interaction facade.

use thiserror::Error;

use crate::ports::GestureError;
use crate::ports::VisionError;

/// Errors raised by [`UserInteraction`](crate::UserInteraction) methods.
///
/// The not-recognized variants exist only at this layer: the locate engine
/// reports "not found" as an empty result, and the facade turns that into an
/// error when the caller asked for a gesture on the target. Collaborator
/// failures propagate unchanged.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("image not recognized: {0}")]
    ImageNotRecognized(String),
    #[error("text not recognized: {0}")]
    TextNotRecognized(String),
    #[error(transparent)]
    Vision(#[from] VisionError),
    #[error(transparent)]
    Gesture(#[from] GestureError),
}

impl InteractionError {
    /// The symbolic target that failed to resolve, if that is what failed.
    pub fn target(&self) -> Option<&str> {
        match self {
            InteractionError::ImageNotRecognized(target)
            | InteractionError::TextNotRecognized(target) => Some(target),
            _ => None,
        }
    }

    /// Whether retrying with a longer locate timeout could help. Backend
    /// failures are not retried at this layer.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InteractionError::ImageNotRecognized(_) | InteractionError::TextNotRecognized(_)
        )
    }
}
