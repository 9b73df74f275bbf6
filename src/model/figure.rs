//! Figure detections.

use super::BoundingBox;
use serde::{Deserialize, Serialize};

/// A detected figure region. Passed through to JSON untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Region on the page
    #[serde(rename = "box")]
    pub bbox: BoundingBox,

    /// Detection confidence
    pub score: f64,
}

impl Figure {
    pub fn new(bbox: BoundingBox, score: f64) -> Self {
        Self { bbox, score }
    }
}
