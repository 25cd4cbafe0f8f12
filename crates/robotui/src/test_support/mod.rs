//! Mock collaborators for exercising the interaction layer without real
//! camera, recognition, or touch hardware.

mod mock_gesture;
mod mock_vision;

pub use mock_gesture::GestureCall;
pub use mock_gesture::MockGesture;
pub use mock_gesture::MockGestureError;
pub use mock_vision::LocateCall;
pub use mock_vision::LocateQuery;
pub use mock_vision::MockVision;
pub use mock_vision::MockVisionBuilder;
pub use mock_vision::MockVisionError;
