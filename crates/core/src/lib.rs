//! `metermatch-core` — shared cell and column types.
//!
//! Pure types crate: no file I/O, no matching logic.

pub mod cell;
pub mod column;
pub mod grid;

pub use cell::Cell;
pub use column::{index_to_letter, letter_to_index, ColumnLetterError};
pub use grid::SheetMatrix;
