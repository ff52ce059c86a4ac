//! Sheet matrices — the rectangular, possibly jagged cell grid.

use crate::cell::Cell;

/// A decoded worksheet: rows of cells addressed by zero-based row and column
/// index. Rows may be jagged; positions outside a row read as empty. Never
/// mutated once decoded.
pub type SheetMatrix = Vec<Vec<Cell>>;

/// Canonical value of `row[col]`, empty string when the position is outside
/// the row.
pub fn value_at(row: &[Cell], col: usize) -> String {
    row.get(col).map(Cell::canon).unwrap_or_default()
}

/// True if every cell of the row canonicalizes to the empty string.
pub fn row_is_blank(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}
