//! Resolved screen targets and the target forms a gesture can aim at.

use serde::Deserialize;
use serde::Serialize;

use crate::geometry::BoundingBox;
use crate::geometry::Position;
use crate::geometry::interpolate;

/// A resolved or resolvable screen target.
///
/// Elements are immutable value objects: nothing mutates a position or a
/// bounding box after construction, and they are freely clonable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// A fixed point; its bounding box is degenerate.
    Point { pos: Position },
    /// A plain rectangular area.
    Rectangle { bbox: BoundingBox },
    /// A rectangle matched against a known image, tagged with its identifier.
    Image { bbox: BoundingBox, image_id: String },
    /// Consecutive words that may occupy a non-rectangular area; there is no
    /// guarantee that every position inside the bounding box has a word at it.
    TextRegion { bbox: BoundingBox, text: String },
    /// A single word occupying a rectangular area.
    Word { bbox: BoundingBox, word: String },
}

/// Elements returned by a locate operation, best match first. Empty means
/// "not found". The ordering is collaborator-defined and preserved as is.
pub type LocateResult = Vec<Element>;

impl Element {
    pub fn point(pos: Position) -> Self {
        Element::Point { pos }
    }

    pub fn rectangle(upper_left: Position, lower_right: Position) -> Self {
        Element::Rectangle {
            bbox: BoundingBox::new(upper_left, lower_right),
        }
    }

    pub fn image(
        upper_left: Position,
        lower_right: Position,
        image_id: impl Into<String>,
    ) -> Self {
        Element::Image {
            bbox: BoundingBox::new(upper_left, lower_right),
            image_id: image_id.into(),
        }
    }

    pub fn text_region(
        upper_left: Position,
        lower_right: Position,
        text: impl Into<String>,
    ) -> Self {
        Element::TextRegion {
            bbox: BoundingBox::new(upper_left, lower_right),
            text: text.into(),
        }
    }

    pub fn word(upper_left: Position, lower_right: Position, word: impl Into<String>) -> Self {
        Element::Word {
            bbox: BoundingBox::new(upper_left, lower_right),
            word: word.into(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Element::Point { pos } => BoundingBox::new(*pos, *pos),
            Element::Rectangle { bbox }
            | Element::Image { bbox, .. }
            | Element::TextRegion { bbox, .. }
            | Element::Word { bbox, .. } => *bbox,
        }
    }

    /// The point at `rel` within this element's bounding box.
    ///
    /// A `Point` ignores `rel` and always yields its fixed position.
    pub fn position_at(&self, rel: Position) -> Position {
        match self {
            Element::Point { pos } => *pos,
            _ => interpolate(self.bounding_box(), rel),
        }
    }

    /// The center of this element.
    pub fn position(&self) -> Position {
        self.position_at(Position::CENTER)
    }

    /// The matched image identifier, for image elements.
    pub fn image_id(&self) -> Option<&str> {
        match self {
            Element::Image { image_id, .. } => Some(image_id),
            _ => None,
        }
    }

    /// The matched text content, for text and word elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::TextRegion { text, .. } => Some(text),
            Element::Word { word, .. } => Some(word),
            _ => None,
        }
    }

    /// Word-level decomposition of this element.
    ///
    /// A `Word` decomposes into itself. `None` means the decomposition is
    /// not available; segmenting a `TextRegion` needs per-word boxes from
    /// the vision backend.
    // TODO: segment TextRegion once VisionProvider exposes word boxes
    pub fn words(&self) -> Option<Vec<Element>> {
        match self {
            Element::Word { .. } => Some(vec![self.clone()]),
            _ => None,
        }
    }
}

/// The target forms a gesture can aim at.
///
/// Position and element targets resolve without any lookup; image and text
/// targets are symbolic and need a locate step before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureTarget {
    Position(Position),
    Element(Element),
    Image(String),
    Text(String),
}

impl GestureTarget {
    pub fn image(image_id: impl Into<String>) -> Self {
        GestureTarget::Image(image_id.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        GestureTarget::Text(text.into())
    }
}

impl From<Position> for GestureTarget {
    fn from(pos: Position) -> Self {
        GestureTarget::Position(pos)
    }
}

impl From<Element> for GestureTarget {
    fn from(element: Element) -> Self {
        GestureTarget::Element(element)
    }
}
