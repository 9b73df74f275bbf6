//! Paragraph types.

use super::BoundingBox;
use serde::{Deserialize, Serialize};

/// Writing direction of a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right lines stacked top to bottom
    #[default]
    Horizontal,
    /// Top-to-bottom columns stacked right to left
    Vertical,
}

/// A detected paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Writing direction
    pub direction: Direction,

    /// Region on the page
    #[serde(rename = "box")]
    pub bbox: BoundingBox,

    /// Recognized text, possibly with embedded line breaks
    pub contents: String,

    /// Reading-order position assigned upstream
    pub order: u32,
}

impl Paragraph {
    /// Create a horizontal paragraph.
    pub fn new(bbox: BoundingBox, contents: impl Into<String>, order: u32) -> Self {
        Self {
            direction: Direction::Horizontal,
            bbox,
            contents: contents.into(),
            order,
        }
    }

    /// Set direction and return self.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Check if the paragraph carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.contents.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_json_field_names() {
        let para = Paragraph::new(BoundingBox([0.0, 0.0, 10.0, 10.0]), "dummy\n", 0)
            .with_direction(Direction::Vertical);
        let value = serde_json::to_value(&para).unwrap();

        assert_eq!(value["direction"], "vertical");
        assert_eq!(value["box"][2], 10.0);
        assert_eq!(value["contents"], "dummy\n");
        assert_eq!(value["order"], 0);
    }

    #[test]
    fn test_paragraph_is_empty() {
        assert!(Paragraph::new(BoundingBox::default(), " \n", 0).is_empty());
        assert!(!Paragraph::new(BoundingBox::default(), "a", 0).is_empty());
    }
}
