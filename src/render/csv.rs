//! CSV rendering.
//!
//! Element renderers produce raw strings with no escaping; quoting is left
//! to the `csv` writer used when a whole document is written out.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{Document, Element, Paragraph, Table};

use super::grid::TableGrid;
use super::text::normalize;
use super::RenderOptions;

/// Render a paragraph as a single CSV field.
pub fn paragraph_to_csv(para: &Paragraph, options: &RenderOptions) -> String {
    normalize(&para.contents, options.ignore_line_break).into_owned()
}

/// Render a table as an `n_row x n_col` matrix of fields.
///
/// Merged cells are flattened: text appears at the anchor position only.
/// There is no header row.
pub fn table_to_csv(table: &Table, options: &RenderOptions) -> Vec<Vec<String>> {
    TableGrid::build(table)
        .flat_rows(|cell| normalize(&cell.contents, options.ignore_line_break).into_owned())
}

/// CSV records for a whole document, in reading order.
///
/// A table contributes one record per grid row and a paragraph one
/// single-field record. Every element is followed by a separator record
/// holding one empty field.
pub fn to_csv_records(doc: &Document, options: &RenderOptions) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    for element in doc.ordered_elements() {
        match element {
            Element::Paragraph(p) => records.push(vec![paragraph_to_csv(p, options)]),
            Element::Table(t) => records.extend(table_to_csv(t, options)),
        }
        records.push(vec![String::new()]);
    }
    records
}

/// Write a document as CSV to any writer.
pub fn write_csv<W: Write>(doc: &Document, options: &RenderOptions, writer: W) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .terminator(::csv::Terminator::CRLF)
        .from_writer(writer);

    for record in to_csv_records(doc, options) {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a document to a CSV string.
pub fn to_csv(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(doc, options, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(format!("CSV output is not UTF-8: {}", e)))
}
