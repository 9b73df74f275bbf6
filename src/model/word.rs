//! Word-level recognition results.

use super::{Direction, Quad};
use serde::{Deserialize, Serialize};

/// A single recognized word with its detection outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPrediction {
    /// Outline corners
    pub points: Quad,

    /// Recognized text
    pub content: String,

    /// Writing direction
    pub direction: Direction,

    /// Text detection confidence
    pub det_score: f64,

    /// Text recognition confidence
    pub rec_score: f64,
}

impl WordPrediction {
    /// Create a horizontal word prediction.
    pub fn new(points: Quad, content: impl Into<String>, det_score: f64, rec_score: f64) -> Self {
        Self {
            points,
            content: content.into(),
            direction: Direction::Horizontal,
            det_score,
            rec_score,
        }
    }
}
