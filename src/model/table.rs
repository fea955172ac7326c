//! Table model structures.

use serde::{Deserialize, Serialize};

/// A cell in a table.
///
/// The cell text is the concatenation of the cell's paragraphs, joined by
/// newlines at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell text content.
    pub text: String,
}

impl Cell {
    /// Create a cell with text content.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if this cell has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Cells in this row.
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in this table.
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to this table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_creation() {
        let cell = Cell::with_text("Hello");
        assert_eq!(cell.text, "Hello");
        assert!(!cell.is_empty());
        assert!(Cell::with_text("  ").is_empty());
    }

    #[test]
    fn test_row_creation() {
        let mut row = Row::new();
        row.add_cell(Cell::with_text("A"));
        row.add_cell(Cell::with_text("B"));
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_table_creation() {
        let mut table = Table::new();
        assert!(table.is_empty());

        let mut row = Row::new();
        row.add_cell(Cell::with_text("foo"));
        table.add_row(row);

        assert_eq!(table.row_count(), 1);
        assert!(!table.is_empty());
    }
}
