//! HTML rendering.
//!
//! Produces bare fragments: `<p>` per paragraph and a bordered `<table>` per
//! table. Wrapping in `<html>`/`<body>` is left to the caller.

use std::fmt::Write;

use crate::model::{Document, Element, Paragraph, Table};

use super::escape::escape_html;
use super::grid::{SpanCell, TableGrid};
use super::text::{normalize, replace_line_breaks};
use super::RenderOptions;

const TABLE_OPEN: &str = r#"<table border="1" style="border-collapse: collapse">"#;
const LINE_BREAK: &str = "<br>";

/// Escape text and render its line breaks as `<br>`.
pub fn text_to_html(text: &str, options: &RenderOptions) -> String {
    let text = normalize(text, options.ignore_line_break);
    replace_line_breaks(&escape_html(&text), LINE_BREAK).into_owned()
}

/// Render a paragraph as `<p>…</p>`.
pub fn paragraph_to_html(para: &Paragraph, options: &RenderOptions) -> String {
    format!("<p>{}</p>", text_to_html(&para.contents, options))
}

/// Render a table, preserving merged cells via `rowspan`/`colspan`.
pub fn table_to_html(table: &Table, options: &RenderOptions) -> String {
    let grid = TableGrid::build(table);
    let mut output = String::from(TABLE_OPEN);

    for row in grid.span_rows() {
        output.push_str("<tr>");
        for entry in row {
            match entry {
                SpanCell::Cell(cell) => push_td(
                    &mut output,
                    cell.row_span.max(1),
                    cell.col_span.max(1),
                    &text_to_html(&cell.contents, options),
                ),
                SpanCell::Blank => push_td(&mut output, 1, 1, ""),
            }
        }
        output.push_str("</tr>");
    }

    output.push_str("</table>");
    output
}

fn push_td(output: &mut String, row_span: u32, col_span: u32, content: &str) {
    // Writing to a String cannot fail
    let _ = write!(
        output,
        r#"<td rowspan="{}" colspan="{}">{}</td>"#,
        row_span, col_span, content
    );
}

/// Render a single element.
pub fn element_to_html(element: &Element<'_>, options: &RenderOptions) -> String {
    match element {
        Element::Paragraph(p) => paragraph_to_html(p, options),
        Element::Table(t) => table_to_html(t, options),
    }
}

/// Render a document: element fragments in reading order, one per line.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    doc.ordered_elements()
        .iter()
        .map(|element| element_to_html(element, options))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, TableCell};

    fn spanning_table() -> Table {
        Table::new(BoundingBox([0.0, 0.0, 100.0, 100.0]), 2, 2, 0)
            .with_cell(TableCell::new(1, 1, "dummy\n").rowspan(2))
            .with_cell(TableCell::new(1, 2, "dummy\n"))
            .with_cell(TableCell::new(2, 2, ""))
    }

    #[test]
    fn test_table_to_html() {
        let table = spanning_table();

        let expected = concat!(
            r#"<table border="1" style="border-collapse: collapse">"#,
            r#"<tr><td rowspan="2" colspan="1">dummy<br></td><td rowspan="1" colspan="1">dummy<br></td></tr>"#,
            r#"<tr><td rowspan="1" colspan="1"></td></tr></table>"#
        );
        assert_eq!(table_to_html(&table, &RenderOptions::new()), expected);

        let expected = concat!(
            r#"<table border="1" style="border-collapse: collapse">"#,
            r#"<tr><td rowspan="2" colspan="1">dummy</td><td rowspan="1" colspan="1">dummy</td></tr>"#,
            r#"<tr><td rowspan="1" colspan="1"></td></tr></table>"#
        );
        let options = RenderOptions::new().with_ignore_line_break(true);
        assert_eq!(table_to_html(&table, &options), expected);
    }

    #[test]
    fn test_table_gap_renders_empty_td() {
        let table =
            Table::new(BoundingBox::default(), 1, 2, 0).with_cell(TableCell::new(1, 2, "b"));
        assert_eq!(
            table_to_html(&table, &RenderOptions::new()),
            concat!(
                r#"<table border="1" style="border-collapse: collapse"><tr>"#,
                r#"<td rowspan="1" colspan="1"></td><td rowspan="1" colspan="1">b</td>"#,
                r#"</tr></table>"#
            )
        );
    }

    #[test]
    fn test_table_cell_contents_escaped() {
        let table = Table::new(BoundingBox::default(), 1, 1, 0)
            .with_cell(TableCell::new(1, 1, "a < b & c"));
        assert!(table_to_html(&table, &RenderOptions::new()).contains(">a &lt; b &amp; c</td>"));
    }

    #[test]
    fn test_paragraph_to_html() {
        let para = Paragraph::new(
            BoundingBox([0.0, 0.0, 10.0, 10.0]),
            "これはテストです。<a href='https://www.google.com'>Google</a>\n",
            0,
        );

        assert_eq!(
            paragraph_to_html(&para, &RenderOptions::new()),
            "<p>これはテストです。&lt;a href=&#x27;https://www.google.com&#x27;&gt;Google&lt;/a&gt;<br></p>"
        );

        let options = RenderOptions::new().with_ignore_line_break(true);
        assert_eq!(
            paragraph_to_html(&para, &options),
            "<p>これはテストです。&lt;a href=&#x27;https://www.google.com&#x27;&gt;Google&lt;/a&gt;</p>"
        );
    }

    #[test]
    fn test_to_html_orders_elements() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new(BoundingBox::default(), "after", 1));
        doc.add_table(
            Table::new(BoundingBox::default(), 1, 1, 0).with_cell(TableCell::new(1, 1, "cell")),
        );
        doc.add_paragraph(Paragraph::new(BoundingBox::default(), "last", 2));

        let html = to_html(&doc, &RenderOptions::new());
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("<table"));
        assert_eq!(lines[1], "<p>after</p>");
        assert_eq!(lines[2], "<p>last</p>");
    }
}
