//! Document-level types.

use super::{BoundingBox, Figure, Paragraph, Table, WordPrediction};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An assembled document built from finalized detection results.
///
/// Field order matches the JSON layout: paragraphs, tables, figures, words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Text paragraphs
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Tables
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Figures
    #[serde(default)]
    pub figures: Vec<Figure>,

    /// Word-level predictions
    #[serde(default)]
    pub words: Vec<WordPrediction>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Add a figure to the document.
    pub fn add_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Add a word prediction to the document.
    pub fn add_word(&mut self, word: WordPrediction) {
        self.words.push(word);
    }

    /// Check if the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
            && self.tables.is_empty()
            && self.figures.is_empty()
            && self.words.is_empty()
    }

    /// Paragraphs and tables merged into reading order.
    ///
    /// Sorted by `order` with a stable sort; ties keep their position in the
    /// merged sequence, where all paragraphs precede all tables.
    pub fn ordered_elements(&self) -> Vec<Element<'_>> {
        let mut elements: Vec<Element<'_>> = self
            .paragraphs
            .iter()
            .map(Element::Paragraph)
            .chain(self.tables.iter().map(Element::Table))
            .collect();
        elements.sort_by_key(Element::order);
        elements
    }

    /// Summary counts used for reporting.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            paragraphs: self.paragraphs.len(),
            tables: self.tables.len(),
            cells: self.tables.iter().map(|t| t.cells.len()).sum(),
            merged_cells: self
                .tables
                .iter()
                .flat_map(|t| &t.cells)
                .filter(|c| c.is_merged())
                .count(),
            figures: self.figures.len(),
            words: self.words.len(),
            empty_paragraphs: self.paragraphs.iter().filter(|p| p.is_empty()).count(),
            inverted_boxes: self.boxes().filter(|b| !b.is_normalized()).count(),
        }
    }

    /// Boxes of every paragraph, table, cell and figure.
    fn boxes(&self) -> impl Iterator<Item = &BoundingBox> + '_ {
        self.paragraphs
            .iter()
            .map(|p| &p.bbox)
            .chain(self.tables.iter().map(|t| &t.bbox))
            .chain(self.tables.iter().flat_map(|t| &t.cells).map(|c| &c.bbox))
            .chain(self.figures.iter().map(|f| &f.bbox))
    }
}

/// A renderable element in reading order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element<'a> {
    /// A paragraph
    Paragraph(&'a Paragraph),

    /// A table
    Table(&'a Table),
}

impl Element<'_> {
    /// Reading-order key.
    pub fn order(&self) -> u32 {
        match self {
            Element::Paragraph(p) => p.order,
            Element::Table(t) => t.order,
        }
    }
}

/// Element counts for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub paragraphs: usize,
    pub tables: usize,
    pub cells: usize,
    pub merged_cells: usize,
    pub figures: usize,
    pub words: usize,
    /// Paragraphs with only whitespace
    pub empty_paragraphs: usize,
    /// Boxes whose corners are swapped
    pub inverted_boxes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, TableCell};

    fn para(text: &str, order: u32) -> Paragraph {
        Paragraph::new(BoundingBox::default(), text, order)
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.ordered_elements().is_empty());
    }

    #[test]
    fn test_ordered_elements_interleaves_kinds() {
        let mut doc = Document::new();
        doc.add_paragraph(para("second", 2));
        doc.add_paragraph(para("first", 0));
        doc.add_table(Table::new(BoundingBox::default(), 1, 1, 1));

        let orders: Vec<u32> = doc.ordered_elements().iter().map(Element::order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert!(matches!(doc.ordered_elements()[1], Element::Table(_)));
    }

    #[test]
    fn test_ordered_elements_is_stable_on_ties() {
        let mut doc = Document::new();
        doc.add_paragraph(para("a", 5));
        doc.add_paragraph(para("b", 5));
        doc.add_table(Table::new(BoundingBox::default(), 1, 1, 5));

        let elements = doc.ordered_elements();
        assert!(matches!(elements[0], Element::Paragraph(p) if p.contents == "a"));
        assert!(matches!(elements[1], Element::Paragraph(p) if p.contents == "b"));
        assert!(matches!(elements[2], Element::Table(_)));
    }

    #[test]
    fn test_stats() {
        let mut doc = Document::new();
        doc.add_paragraph(para("p", 0));
        doc.add_table(
            Table::new(BoundingBox::default(), 2, 2, 1)
                .with_cell(TableCell::new(1, 1, "a").rowspan(2))
                .with_cell(TableCell::new(1, 2, "b"))
                .with_cell(TableCell::new(2, 2, "c")),
        );

        let stats = doc.stats();
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.tables, 1);
        assert_eq!(stats.cells, 3);
        assert_eq!(stats.merged_cells, 1);
        assert_eq!(stats.empty_paragraphs, 0);
        assert_eq!(stats.inverted_boxes, 0);
    }

    #[test]
    fn test_stats_flags_blank_text_and_swapped_corners() {
        let mut doc = Document::new();
        doc.add_paragraph(para(" \n", 0));
        doc.add_paragraph(Paragraph::new(BoundingBox([10.0, 0.0, 0.0, 10.0]), "text", 1));
        doc.add_table(
            Table::new(BoundingBox::default(), 1, 1, 2)
                .with_cell(TableCell::new(1, 1, "a").with_box(BoundingBox([0.0, 9.0, 5.0, 1.0]))),
        );

        let stats = doc.stats();
        assert_eq!(stats.empty_paragraphs, 1);
        assert_eq!(stats.inverted_boxes, 2);
    }

    #[test]
    fn test_from_json_defaults_missing_lists() {
        let doc = Document::from_json(r#"{"paragraphs": []}"#).unwrap();
        assert!(doc.is_empty());
    }
}
