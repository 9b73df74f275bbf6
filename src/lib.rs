//! # layoutdoc
//!
//! Assemble layout detection results into a document and export it.
//!
//! Upstream detection and recognition models produce paragraphs, tables
//! (cells with row/column spans), figures and word predictions, each
//! paragraph and table carrying a reading-order index. This library merges
//! them into reading order and renders the result as JSON, CSV, HTML or
//! Markdown.
//!
//! ## Quick Start
//!
//! ```no_run
//! use layoutdoc::{load_document, render, RenderOptions};
//!
//! fn main() -> layoutdoc::Result<()> {
//!     let doc = load_document("analysis.json")?;
//!
//!     let options = RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options);
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Four output formats**: JSON, CSV, HTML, Markdown
//! - **Merged cells**: HTML keeps `rowspan`/`colspan`; CSV and Markdown
//!   place merged text at the anchor cell only
//! - **Tolerant**: malformed tables still render deterministically
//! - **Atomic output**: files are fully written or not created
//! - **Parallel batch export** with Rayon

pub mod error;
pub mod export;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{export, export_all, export_to_path, Artifact, OutputFormat};
pub use model::{
    BoundingBox, Direction, Document, Element, Figure, Paragraph, Quad, Table, TableCell,
    WordPrediction,
};
pub use render::{JsonFormat, RenderOptions, TableGrid};

use std::path::Path;

/// Load a document from a JSON file produced upstream.
///
/// # Example
///
/// ```no_run
/// use layoutdoc::load_document;
///
/// let doc = load_document("analysis.json").unwrap();
/// println!("Tables: {}", doc.tables.len());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    export::read_json(path)
}

/// Convert a document JSON file to Markdown.
///
/// # Example
///
/// ```no_run
/// use layoutdoc::to_markdown;
///
/// let markdown = to_markdown("analysis.json", false).unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P, ignore_line_break: bool) -> Result<String> {
    convert_file(path, OutputFormat::Markdown, ignore_line_break)
}

/// Convert a document JSON file to HTML.
pub fn to_html<P: AsRef<Path>>(path: P, ignore_line_break: bool) -> Result<String> {
    convert_file(path, OutputFormat::Html, ignore_line_break)
}

/// Convert a document JSON file to CSV.
pub fn to_csv<P: AsRef<Path>>(path: P, ignore_line_break: bool) -> Result<String> {
    convert_file(path, OutputFormat::Csv, ignore_line_break)
}

fn convert_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    ignore_line_break: bool,
) -> Result<String> {
    let doc = load_document(path)?;
    let options = RenderOptions::new().with_ignore_line_break(ignore_line_break);
    Ok(export(&doc, format, &options)?.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_document_missing_file() {
        let result = load_document("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_reexports_compose() {
        let mut doc = Document::new();
        doc.add_table(
            Table::new(BoundingBox::default(), 1, 1, 0).with_cell(TableCell::new(1, 1, "x")),
        );
        let artifact = export(&doc, OutputFormat::Markdown, &RenderOptions::default()).unwrap();
        assert_eq!(artifact.content, "|x|\n|-|\n");
    }
}
