//! Document export: render a whole document and write the artifact.
//!
//! # Example
//!
//! ```no_run
//! use layoutdoc::export::{export_to_path, OutputFormat};
//! use layoutdoc::{Document, RenderOptions};
//!
//! fn main() -> layoutdoc::Result<()> {
//!     let doc = Document::from_json(&std::fs::read_to_string("page.json")?)?;
//!     let options = RenderOptions::new().with_ignore_line_break(true);
//!     export_to_path(&doc, OutputFormat::Markdown, &options, "out/page.md")?;
//!     Ok(())
//! }
//! ```

mod write;

pub use write::{read_json, write_atomic, write_json};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{self, JsonFormat, RenderOptions};

/// Output format for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Structured JSON
    #[default]
    Json,

    /// Flat CSV
    Csv,

    /// HTML fragments
    Html,

    /// Markdown
    Markdown,
}

impl OutputFormat {
    /// All formats, in the order `export_all` writes them.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Html,
        OutputFormat::Markdown,
    ];

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
        }
    }

    /// MIME type of the artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Html => "text/html",
            OutputFormat::Markdown => "text/markdown",
        }
    }

    /// Look up a format by file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "html" | "htm" => Some(OutputFormat::Html),
            "md" | "markdown" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }

    /// Infer the format from a destination path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s.trim()).ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
            OutputFormat::Html => "HTML",
            OutputFormat::Markdown => "Markdown",
        };
        f.write_str(name)
    }
}

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Format the content was rendered in
    pub format: OutputFormat,

    /// Rendered content
    pub content: String,
}

impl Artifact {
    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Render a document in the given format.
///
/// Paragraphs and tables appear in reading order. JSON is pretty-printed and
/// keeps figures and words.
pub fn export(doc: &Document, format: OutputFormat, options: &RenderOptions) -> Result<Artifact> {
    log::debug!(
        "Exporting {} paragraph(s), {} table(s) as {}",
        doc.paragraphs.len(),
        doc.tables.len(),
        format
    );

    let content = match format {
        OutputFormat::Json => render::to_json(doc, JsonFormat::Pretty, options)?,
        OutputFormat::Csv => render::to_csv(doc, options)?,
        OutputFormat::Html => render::to_html(doc, options),
        OutputFormat::Markdown => render::to_markdown(doc, options),
    };
    Ok(Artifact { format, content })
}

/// Render a document and write it to `path`.
///
/// The file is either written completely or not at all.
pub fn export_to_path<P: AsRef<Path>>(
    doc: &Document,
    format: OutputFormat,
    options: &RenderOptions,
    path: P,
) -> Result<()> {
    let artifact = export(doc, format, options)?;
    write_atomic(path, artifact.content.as_bytes())
}

/// Write every format into `dir` as `<stem>.<ext>`.
///
/// Returns the written paths in [`OutputFormat::ALL`] order.
pub fn export_all<P: AsRef<Path>>(
    doc: &Document,
    dir: P,
    stem: &str,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    OutputFormat::ALL
        .iter()
        .map(|&format| {
            let path = dir.join(format!("{}.{}", stem, format.extension()));
            export_to_path(doc, format, options, &path)?;
            Ok(path)
        })
        .collect()
}

/// Render independent documents in parallel.
///
/// Results keep the input order.
pub fn export_batch(
    docs: &[Document],
    format: OutputFormat,
    options: &RenderOptions,
) -> Vec<Result<Artifact>> {
    docs.par_iter()
        .map(|doc| export(doc, format, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Paragraph};

    #[test]
    fn test_output_format_lookup() {
        assert_eq!(OutputFormat::from_extension("MD"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_extension("htm"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_extension("docx"), None);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("out/doc.json").unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_path("out/doc").is_err());
    }

    #[test]
    fn test_export_formats() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new(BoundingBox::default(), "Hello\n", 0));

        let options = RenderOptions::new();
        let html = export(&doc, OutputFormat::Html, &options).unwrap();
        assert_eq!(html.content, "<p>Hello<br></p>");
        assert_eq!(html.mime_type(), "text/html");

        let md = export(&doc, OutputFormat::Markdown, &options).unwrap();
        assert_eq!(md.content, "Hello<br>\n");

        let csv = export(&doc, OutputFormat::Csv, &options).unwrap();
        assert_eq!(csv.content, "\"Hello\n\"\r\n\"\"\r\n");

        let json = export(&doc, OutputFormat::Json, &options).unwrap();
        assert_eq!(Document::from_json(&json.content).unwrap(), doc);
    }

    #[test]
    fn test_export_batch_keeps_order() {
        let docs: Vec<Document> = (0..8)
            .map(|i| {
                let mut doc = Document::new();
                doc.add_paragraph(Paragraph::new(BoundingBox::default(), format!("doc {i}"), 0));
                doc
            })
            .collect();

        let results = export_batch(&docs, OutputFormat::Html, &RenderOptions::new());
        for (i, result) in results.into_iter().enumerate() {
            assert_eq!(result.unwrap().content, format!("<p>doc {i}</p>"));
        }
    }
}
