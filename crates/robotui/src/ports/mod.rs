//! Collaborator contracts consumed by the interaction layer.
//!
//! Concrete backends (robot arms, cameras, OCR and image-recognition
//! engines, software emulation) live behind these traits; every operation
//! must be implemented, there are no default bodies.

pub mod gesture;
pub mod vision;

pub use gesture::GestureError;
pub use gesture::GestureProvider;
pub use vision::VisionError;
pub use vision::VisionProvider;

/// Open, implementation-defined parameter bag forwarded verbatim to
/// collaborators (pressure, finger radius, safety bypass, confidence, ...).
///
/// The interaction layer never interprets or validates keys it does not
/// itself define.
pub type OptionBag = serde_json::Map<String, serde_json::Value>;
