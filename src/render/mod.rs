//! Rendering module for converting documents to various output formats.
//!
//! Each format has element renderers (`paragraph_to_*`, `table_to_*`) and a
//! document renderer that concatenates elements in reading order. Tables are
//! always expanded through [`TableGrid`] so that every format agrees on
//! where merged-cell text lands.

pub mod csv;
pub mod escape;
pub mod grid;
pub mod html;
pub mod json;
pub mod markdown;
mod options;
pub mod text;

pub use self::csv::{paragraph_to_csv, table_to_csv, to_csv, to_csv_records, write_csv};
pub use escape::{escape_html, escape_markdown};
pub use grid::{GridDefect, GridSlot, SpanCell, TableGrid, MAX_GRID_SLOTS};
pub use html::{paragraph_to_html, table_to_html, to_html};
pub use json::{paragraph_to_json, table_to_json, to_json, JsonFormat};
pub use markdown::{paragraph_to_md, table_to_md, to_markdown};
pub use options::RenderOptions;
pub use text::normalize;
