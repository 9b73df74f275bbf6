//! Document model types for assembled detection results.
//!
//! These records are produced by upstream detection and recognition models
//! and are treated as frozen once a [`Document`] is built. Field names match
//! the JSON representation.

mod document;
mod figure;
mod geometry;
mod paragraph;
mod table;
mod word;

pub use document::{Document, DocumentStats, Element};
pub use figure::Figure;
pub use geometry::{BoundingBox, Quad};
pub use paragraph::{Direction, Paragraph};
pub use table::{Table, TableCell};
pub use word::WordPrediction;
