//! Table types.

use super::BoundingBox;
use crate::error::Result;
use crate::render::TableGrid;
use serde::{Deserialize, Serialize};

/// A recognized table: declared grid size plus a sparse list of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Region on the page
    #[serde(rename = "box")]
    pub bbox: BoundingBox,

    /// Number of grid rows
    pub n_row: u32,

    /// Number of grid columns
    pub n_col: u32,

    /// Anchor cells, in producer order
    pub cells: Vec<TableCell>,

    /// Reading-order position assigned upstream
    pub order: u32,
}

impl Table {
    /// Create an empty table with the given grid size.
    pub fn new(bbox: BoundingBox, n_row: u32, n_col: u32, order: u32) -> Self {
        Self {
            bbox,
            n_row,
            n_col,
            cells: Vec::new(),
            order,
        }
    }

    /// Add a cell to the table.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Add a cell and return self.
    pub fn with_cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Number of logical grid positions (`n_row * n_col`).
    pub fn area(&self) -> usize {
        (self.n_row as usize).saturating_mul(self.n_col as usize)
    }

    /// Check if the table has complex structure (merged cells).
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(TableCell::is_merged)
    }

    /// Check that the cells tile the `n_row x n_col` grid exactly.
    ///
    /// Rendering never calls this; it tolerates malformed tables. Use it to
    /// report producer defects.
    pub fn validate(&self) -> Result<()> {
        TableGrid::build(self).validate()
    }
}

/// The top-left anchor of a (possibly merged) table region.
///
/// `row` and `col` are 1-based. The cell covers
/// `[row, row + row_span) x [col, col + col_span)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Region on the page
    #[serde(rename = "box")]
    pub bbox: BoundingBox,

    /// 1-based row of the anchor
    pub row: u32,

    /// 1-based column of the anchor
    pub col: u32,

    /// Number of rows this cell spans
    pub row_span: u32,

    /// Number of columns this cell spans
    pub col_span: u32,

    /// Recognized text
    pub contents: String,
}

impl TableCell {
    /// Create a 1x1 cell at the given 1-based position.
    pub fn new(row: u32, col: u32, contents: impl Into<String>) -> Self {
        Self {
            bbox: BoundingBox::default(),
            row,
            col,
            row_span: 1,
            col_span: 1,
            contents: contents.into(),
        }
    }

    /// Set row span and return self.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    /// Set column span and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.col_span = span;
        self
    }

    /// Set the cell box and return self.
    pub fn with_box(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }

    /// Area claimed by the cell, counting a zero span as one.
    pub fn area(&self) -> usize {
        (self.row_span.max(1) as usize).saturating_mul(self.col_span.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(BoundingBox([0.0, 0.0, 100.0, 100.0]), 2, 2, 0)
            .with_cell(TableCell::new(1, 1, "dummy\n").rowspan(2))
            .with_cell(TableCell::new(1, 2, "dummy\n"))
            .with_cell(TableCell::new(2, 2, ""))
    }

    #[test]
    fn test_table_area() {
        let table = sample();
        assert_eq!(table.area(), 4);
        assert!(table.has_merged_cells());

        let covered: usize = table.cells.iter().map(TableCell::area).sum();
        assert_eq!(covered, table.area());
    }

    #[test]
    fn test_table_validate() {
        assert!(sample().validate().is_ok());

        let gap = Table::new(BoundingBox::default(), 1, 2, 0).with_cell(TableCell::new(1, 1, "a"));
        assert!(gap.validate().is_err());
    }

    #[test]
    fn test_table_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["n_row"], 2);
        assert_eq!(value["n_col"], 2);
        assert_eq!(value["cells"][0]["row_span"], 2);
        assert_eq!(value["cells"][0]["col_span"], 1);
        assert!(value["cells"][0]["box"].is_array());
    }
}
