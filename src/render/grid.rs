//! Table grid reconstruction.
//!
//! A [`Table`] carries a sparse list of anchor cells with row/column spans.
//! [`TableGrid`] expands it once into a dense `n_row x n_col` matrix, and
//! every table renderer reads that matrix through one of two views:
//!
//! - the flat view ([`TableGrid::flat_rows`]) used by CSV and Markdown, where
//!   a cell's text appears only at its anchor position and every other
//!   position of its span is empty;
//! - the span view ([`TableGrid::span_rows`]) used by HTML, which yields one
//!   entry per anchor and lets `rowspan`/`colspan` cover the rest.
//!
//! Malformed input is tolerated. Cells are written in input order and a
//! later cell overwrites positions claimed by an earlier one. Positions
//! outside the declared grid are dropped. Each such condition is recorded as
//! a [`GridDefect`] so callers can report it via [`TableGrid::validate`].
//!
//! Declared dimensions are not trusted for allocation. A grid larger than
//! [`MAX_GRID_SLOTS`] is shrunk to the extent its cells actually reach.

use std::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::model::{Table, TableCell};

/// Upper bound on `n_row * n_col + n_row` for a materialized grid.
pub const MAX_GRID_SLOTS: usize = 1 << 24;

/// State of one grid position. Cell indices refer to `Table::cells`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot {
    /// No cell covers this position
    Empty,
    /// Top-left position of the cell
    Anchor(usize),
    /// Covered by the span of the cell, but not its anchor
    Covered(usize),
}

impl GridSlot {
    /// Index of the cell occupying this position, if any.
    pub fn cell_index(&self) -> Option<usize> {
        match *self {
            GridSlot::Empty => None,
            GridSlot::Anchor(idx) | GridSlot::Covered(idx) => Some(idx),
        }
    }
}

/// An entry of the span view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanCell<'a> {
    /// An anchor cell; rendered with its spans
    Cell(&'a TableCell),
    /// A position nobody covers; rendered as an empty 1x1 cell
    Blank,
}

/// A tolerated inconsistency found while building the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridDefect {
    /// The cell declares a zero row or column span; treated as 1
    ZeroSpan { cell: usize },
    /// The anchor lies outside the grid; the cell is not placed
    OutOfBounds { cell: usize },
    /// The span extends past the grid edge; the excess is dropped
    Clipped { cell: usize },
    /// Two cells claim the same position; the later one wins
    Overlap {
        row: usize,
        col: usize,
        earlier: usize,
        later: usize,
    },
    /// No cell covers the position
    Gap { row: usize, col: usize },
    /// The declared size was too large; the grid holds only `n_row x n_col`
    Truncated {
        n_row: usize,
        n_col: usize,
        declared_row: usize,
        declared_col: usize,
    },
}

impl fmt::Display for GridDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridDefect::ZeroSpan { cell } => write!(f, "cell #{} has a zero span", cell),
            GridDefect::OutOfBounds { cell } => write!(f, "cell #{} lies outside the grid", cell),
            GridDefect::Clipped { cell } => write!(f, "cell #{} spans past the grid edge", cell),
            GridDefect::Overlap {
                row,
                col,
                earlier,
                later,
            } => write!(
                f,
                "cells #{} and #{} overlap at ({}, {})",
                earlier,
                later,
                row + 1,
                col + 1
            ),
            GridDefect::Gap { row, col } => {
                write!(f, "no cell covers ({}, {})", row + 1, col + 1)
            }
            GridDefect::Truncated {
                n_row,
                n_col,
                declared_row,
                declared_col,
            } => write!(
                f,
                "declared {}x{} grid truncated to {}x{}",
                declared_row, declared_col, n_row, n_col
            ),
        }
    }
}

/// Dense grid reconstructed from a table's spanning cells.
#[derive(Debug, Clone)]
pub struct TableGrid<'a> {
    table: &'a Table,
    n_row: usize,
    n_col: usize,
    slots: Vec<GridSlot>,
    defects: Vec<GridDefect>,
}

impl<'a> TableGrid<'a> {
    /// Expand the table's cells into a dense grid.
    pub fn build(table: &'a Table) -> Self {
        let declared = (table.n_row as usize, table.n_col as usize);
        let (n_row, n_col) = fit_extent(table);
        let (n_row, n_col, slots) = match allocate(n_row, n_col) {
            Some(slots) => (n_row, n_col, slots),
            None => (0, 0, Vec::new()),
        };

        let mut grid = Self {
            table,
            n_row,
            n_col,
            slots,
            defects: Vec::new(),
        };
        if (n_row, n_col) != declared {
            grid.defects.push(GridDefect::Truncated {
                n_row,
                n_col,
                declared_row: declared.0,
                declared_col: declared.1,
            });
        }

        for (idx, cell) in table.cells.iter().enumerate() {
            grid.place(idx, cell);
        }

        if !grid.defects.is_empty() {
            log::warn!(
                "Table at order {} is malformed ({} defect(s), first: {}); rendering with later-wins",
                table.order,
                grid.defects.len(),
                grid.defects[0]
            );
        }
        grid
    }

    fn place(&mut self, idx: usize, cell: &TableCell) {
        if cell.row_span == 0 || cell.col_span == 0 {
            self.defects.push(GridDefect::ZeroSpan { cell: idx });
        }

        let (Some(row0), Some(col0)) = (
            (cell.row as usize).checked_sub(1),
            (cell.col as usize).checked_sub(1),
        ) else {
            self.defects.push(GridDefect::OutOfBounds { cell: idx });
            return;
        };
        if row0 >= self.n_row || col0 >= self.n_col {
            self.defects.push(GridDefect::OutOfBounds { cell: idx });
            return;
        }

        let row_end = row0 + cell.row_span.max(1) as usize;
        let col_end = col0 + cell.col_span.max(1) as usize;
        if row_end > self.n_row || col_end > self.n_col {
            self.defects.push(GridDefect::Clipped { cell: idx });
        }

        for row in row0..row_end.min(self.n_row) {
            for col in col0..col_end.min(self.n_col) {
                let slot = if row == row0 && col == col0 {
                    GridSlot::Anchor(idx)
                } else {
                    GridSlot::Covered(idx)
                };
                let pos = row * self.n_col + col;
                if let Some(earlier) = self.slots[pos].cell_index() {
                    self.defects.push(GridDefect::Overlap {
                        row,
                        col,
                        earlier,
                        later: idx,
                    });
                }
                self.slots[pos] = slot;
            }
        }
    }

    /// The table this grid was built from.
    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn n_row(&self) -> usize {
        self.n_row
    }

    pub fn n_col(&self) -> usize {
        self.n_col
    }

    /// Slot at a zero-based position; `Empty` outside the grid.
    pub fn slot(&self, row: usize, col: usize) -> GridSlot {
        if row < self.n_row && col < self.n_col {
            self.slots[row * self.n_col + col]
        } else {
            GridSlot::Empty
        }
    }

    /// Row-major iterator over the rows of slots.
    ///
    /// Always yields `n_row` rows, even when they have no columns.
    pub fn rows(&self) -> impl Iterator<Item = &[GridSlot]> + '_ {
        (0..self.n_row).map(move |row| {
            let start = row * self.n_col;
            &self.slots[start..start + self.n_col]
        })
    }

    /// Inconsistencies recorded while placing cells. Gaps are not included.
    pub fn defects(&self) -> &[GridDefect] {
        &self.defects
    }

    /// Positions no cell covers.
    pub fn gaps(&self) -> Vec<GridDefect> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == GridSlot::Empty)
            .map(|(pos, _)| GridDefect::Gap {
                row: pos / self.n_col,
                col: pos % self.n_col,
            })
            .collect()
    }

    /// Check that the cells tile the grid with no overlap and no gap.
    pub fn validate(&self) -> Result<()> {
        let mut problems: Vec<GridDefect> = self.defects.clone();
        problems.extend(self.gaps());
        if problems.is_empty() {
            return Ok(());
        }

        let mut reason = problems
            .iter()
            .take(3)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        if problems.len() > 3 {
            let _ = write!(reason, " (and {} more)", problems.len() - 3);
        }
        Err(Error::malformed_table(reason))
    }

    /// Flat view: one string per grid position.
    ///
    /// Anchor positions hold `render(cell)`; covered and empty positions
    /// hold an empty string.
    pub fn flat_rows<F>(&self, mut render: F) -> Vec<Vec<String>>
    where
        F: FnMut(&TableCell) -> String,
    {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|slot| match *slot {
                        GridSlot::Anchor(idx) => render(&self.table.cells[idx]),
                        GridSlot::Covered(_) | GridSlot::Empty => String::new(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Span view: for each row, anchors and uncovered positions left to right.
    pub fn span_rows(&self) -> Vec<Vec<SpanCell<'a>>> {
        let table: &'a Table = self.table;
        let cells = &table.cells;
        self.rows()
            .map(|row| {
                row.iter()
                    .filter_map(|slot| match *slot {
                        GridSlot::Anchor(idx) => Some(SpanCell::Cell(&cells[idx])),
                        GridSlot::Empty => Some(SpanCell::Blank),
                        GridSlot::Covered(_) => None,
                    })
                    .collect()
            })
            .collect()
    }
}

/// Number of slots (plus one per row) needed to render `n_row x n_col`.
fn grid_cost(n_row: usize, n_col: usize) -> Option<usize> {
    n_row.checked_mul(n_col)?.checked_add(n_row)
}

/// Dimensions to materialize for `table`.
///
/// The declared size when affordable, otherwise the extent reached by the
/// cells' spans, otherwise the extent reached by their anchors alone.
fn fit_extent(table: &Table) -> (usize, usize) {
    let declared = (table.n_row as usize, table.n_col as usize);
    let affordable =
        |(r, c): (usize, usize)| grid_cost(r, c).is_some_and(|n| n <= MAX_GRID_SLOTS);
    if affordable(declared) {
        return declared;
    }

    let reach = |with_spans: bool| {
        table
            .cells
            .iter()
            .filter(|cell| cell.row >= 1 && cell.col >= 1)
            .filter(|cell| cell.row as usize <= declared.0 && cell.col as usize <= declared.1)
            .fold((0usize, 0usize), |(rows, cols), cell| {
                let (row_span, col_span) = if with_spans {
                    (cell.row_span.max(1) as usize, cell.col_span.max(1) as usize)
                } else {
                    (1, 1)
                };
                let row_end = (cell.row as usize - 1).saturating_add(row_span).min(declared.0);
                let col_end = (cell.col as usize - 1).saturating_add(col_span).min(declared.1);
                (rows.max(row_end), cols.max(col_end))
            })
    };

    [reach(true), reach(false)]
        .into_iter()
        .find(|&extent| affordable(extent))
        .unwrap_or((0, 0))
}

fn allocate(n_row: usize, n_col: usize) -> Option<Vec<GridSlot>> {
    let len = n_row.checked_mul(n_col)?;
    let mut slots = Vec::new();
    slots.try_reserve_exact(len).ok()?;
    slots.resize(len, GridSlot::Empty);
    Some(slots)
}
