//! Markdown rendering.

use crate::model::{Document, Element, Paragraph, Table};

use super::escape::escape_markdown;
use super::grid::TableGrid;
use super::text::{normalize, replace_line_breaks};
use super::RenderOptions;

/// Markdown tables cannot hold literal newlines, so breaks become `<br>`
/// everywhere for consistency.
const LINE_BREAK: &str = "<br>";

/// Escape Markdown special characters, then render line breaks as `<br>`.
pub fn text_to_markdown(text: &str, options: &RenderOptions) -> String {
    let text = normalize(text, options.ignore_line_break);
    replace_line_breaks(&escape_markdown(&text), LINE_BREAK).into_owned()
}

/// Render a paragraph as escaped text terminated by a newline.
pub fn paragraph_to_md(para: &Paragraph, options: &RenderOptions) -> String {
    let mut output = text_to_markdown(&para.contents, options);
    output.push('\n');
    output
}

/// Render a table as a pipe table.
///
/// The first grid row doubles as the header and is followed by a separator
/// with one `-` per column. Merged cells are flattened: text appears at the
/// anchor position only.
pub fn table_to_md(table: &Table, options: &RenderOptions) -> String {
    let grid = TableGrid::build(table);
    let rows = grid.flat_rows(|cell| text_to_markdown(&cell.contents, options));

    let mut output = String::new();
    for (i, row) in rows.iter().enumerate() {
        output.push('|');
        for cell in row {
            output.push_str(cell);
            output.push('|');
        }
        output.push('\n');

        if i == 0 {
            output.push('|');
            output.push_str(&"-|".repeat(grid.n_col()));
            output.push('\n');
        }
    }
    output
}

/// Render a single element.
pub fn element_to_md(element: &Element<'_>, options: &RenderOptions) -> String {
    match element {
        Element::Paragraph(p) => paragraph_to_md(p, options),
        Element::Table(t) => table_to_md(t, options),
    }
}

/// Render a document: element fragments in reading order, separated by a
/// blank line.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    doc.ordered_elements()
        .iter()
        .map(|element| element_to_md(element, options))
        .collect::<Vec<_>>()
        .join("\n")
}
