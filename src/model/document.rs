//! Document and paragraph model structures.

use super::Table;
use serde::{Deserialize, Serialize};

/// A paragraph of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// The paragraph text (possibly empty or whitespace-only).
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if this paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A parsed Word document.
///
/// Paragraphs and tables are kept in two separate ordered sequences.
/// Flattening emits all paragraphs first, then all tables, matching the
/// order the structured path has always produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Body-level paragraphs, in document order.
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Top-level tables, in document order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.paragraphs.push(para);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Flatten the document into a single text blob.
    ///
    /// Non-empty trimmed paragraph texts come first, then each table row as
    /// its non-empty trimmed cell texts joined by `" | "`. Blocks are joined
    /// pairwise by a blank-line separator.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        for para in &self.paragraphs {
            let text = para.text.trim();
            if !text.is_empty() {
                parts.push(text.to_string());
            }
        }

        for table in &self.tables {
            for row in &table.rows {
                let cells: Vec<&str> = row
                    .cells
                    .iter()
                    .map(|c| c.text.trim())
                    .filter(|t| !t.is_empty())
                    .collect();
                if !cells.is_empty() {
                    parts.push(cells.join(" | "));
                }
            }
        }

        parts.join("\n\n")
    }
}
