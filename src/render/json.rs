//! JSON rendering.
//!
//! JSON keeps the document structure as-is. The only transformation is
//! line-break removal from paragraph and cell contents when
//! `ignore_line_break` is set; it is applied to a copy.

use serde::Serialize;

use crate::error::Result;
use crate::model::{Document, Paragraph, Table};

use super::text::normalize;
use super::RenderOptions;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Copy of a paragraph prepared for JSON output.
pub fn paragraph_to_json(para: &Paragraph, options: &RenderOptions) -> Paragraph {
    let mut para = para.clone();
    if options.ignore_line_break {
        para.contents = normalize(&para.contents, true).into_owned();
    }
    para
}

/// Copy of a table prepared for JSON output.
pub fn table_to_json(table: &Table, options: &RenderOptions) -> Table {
    let mut table = table.clone();
    if options.ignore_line_break {
        for cell in &mut table.cells {
            cell.contents = normalize(&cell.contents, true).into_owned();
        }
    }
    table
}

/// Copy of a whole document prepared for JSON output.
///
/// Field and element order are left untouched.
pub fn document_to_json(doc: &Document, options: &RenderOptions) -> Document {
    Document {
        paragraphs: doc
            .paragraphs
            .iter()
            .map(|p| paragraph_to_json(p, options))
            .collect(),
        tables: doc
            .tables
            .iter()
            .map(|t| table_to_json(t, options))
            .collect(),
        figures: doc.figures.clone(),
        words: doc.words.clone(),
    }
}

/// Serialize any model value.
pub fn value_to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
        JsonFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat, options: &RenderOptions) -> Result<String> {
    if options.ignore_line_break {
        value_to_json(&document_to_json(doc, options), format)
    } else {
        value_to_json(doc, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, TableCell};

    fn sample_table() -> Table {
        Table::new(BoundingBox([0.0, 0.0, 100.0, 100.0]), 2, 2, 0)
            .with_cell(TableCell::new(1, 1, "dummy\n").rowspan(2))
            .with_cell(TableCell::new(1, 2, "dummy\n"))
            .with_cell(TableCell::new(2, 2, "dummy\n"))
    }

    #[test]
    fn test_paragraph_to_json() {
        let para = Paragraph::new(BoundingBox([0.0, 0.0, 10.0, 10.0]), "dummy\n", 0);

        assert_eq!(
            paragraph_to_json(&para, &RenderOptions::new()).contents,
            "dummy\n"
        );

        let options = RenderOptions::new().with_ignore_line_break(true);
        assert_eq!(paragraph_to_json(&para, &options).contents, "dummy");
        assert_eq!(para.contents, "dummy\n");
    }

    #[test]
    fn test_table_to_json() {
        let table = sample_table();

        let kept = table_to_json(&table, &RenderOptions::new());
        assert!(kept.cells.iter().all(|c| c.contents == "dummy\n"));

        let options = RenderOptions::new().with_ignore_line_break(true);
        let stripped = table_to_json(&table, &options);
        assert!(stripped.cells.iter().all(|c| c.contents == "dummy"));
        assert_eq!(stripped.n_row, table.n_row);
    }

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new(BoundingBox::default(), "これはテスト", 0));

        let json = to_json(&doc, JsonFormat::Pretty, &RenderOptions::new()).unwrap();
        assert!(json.contains("\"paragraphs\""));
        assert!(json.contains("これはテスト"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::new();
        let json = to_json(&doc, JsonFormat::Compact, &RenderOptions::new()).unwrap();
        assert_eq!(
            json,
            r#"{"paragraphs":[],"tables":[],"figures":[],"words":[]}"#
        );
    }

    #[test]
    fn test_to_json_round_trip() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new(BoundingBox([1.5, 2.0, 3.0, 4.0]), "a\nb", 3));
        doc.add_table(sample_table());

        let json = to_json(&doc, JsonFormat::Pretty, &RenderOptions::new()).unwrap();
        assert_eq!(Document::from_json(&json).unwrap(), doc);

        let options = RenderOptions::new().with_ignore_line_break(true);
        let json = to_json(&doc, JsonFormat::Compact, &options).unwrap();
        let parsed = Document::from_json(&json).unwrap();
        assert_eq!(parsed.paragraphs[0].contents, "ab");
        assert_eq!(parsed.tables[0].cells[0].contents, "dummy");
    }
}
