//! Geometry types shared by detected elements.

use serde::{Deserialize, Serialize};

/// An axis-aligned box `[x1, y1, x2, y2]` in image coordinates.
///
/// Serialized as a plain four-element array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox(pub [f64; 4]);

impl BoundingBox {
    /// Left edge.
    pub fn x1(&self) -> f64 {
        self.0[0]
    }

    /// Top edge.
    pub fn y1(&self) -> f64 {
        self.0[1]
    }

    /// Right edge.
    pub fn x2(&self) -> f64 {
        self.0[2]
    }

    /// Bottom edge.
    pub fn y2(&self) -> f64 {
        self.0[3]
    }

    /// Check the `x1 <= x2`, `y1 <= y2` invariant.
    ///
    /// Boxes read from JSON are taken as-is, so this can be false for
    /// malformed producer output.
    pub fn is_normalized(&self) -> bool {
        self.x1() <= self.x2() && self.y1() <= self.y2()
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(coords: [f64; 4]) -> Self {
        Self(coords)
    }
}

/// A quadrilateral given by four corner points, clockwise from top-left.
///
/// Word detections carry rotated or skewed outlines, so they use this
/// instead of [`BoundingBox`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quad(pub [[f64; 2]; 4]);
