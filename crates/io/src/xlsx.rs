// Excel decode (xlsx, xls, xlsb, ods) into cell matrices.
//
// One-way conversion: every cell is normalized into the core Cell union at
// this boundary, so downstream logic never sees calamine types.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use metermatch_core::{Cell, SheetMatrix};

use crate::error::ParseError;

/// Which worksheet of a workbook to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSelector<'a> {
    /// The first worksheet.
    First,
    /// The second worksheet, or the first if the workbook has only one.
    SecondOrFirst,
    /// A worksheet by exact name.
    Named(&'a str),
}

/// Decode one worksheet of the workbook at `path` into a cell matrix.
pub fn read_sheet(path: &Path, selector: SheetSelector<'_>) -> Result<SheetMatrix, ParseError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ParseError::Decode(format!("failed to open {}: {e}", path.display())))?;
    decode(&mut workbook, selector)
}

/// Decode one worksheet from in-memory workbook bytes.
pub fn read_sheet_from_bytes(
    bytes: &[u8],
    selector: SheetSelector<'_>,
) -> Result<SheetMatrix, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ParseError::Decode(format!("failed to open workbook: {e}")))?;
    decode(&mut workbook, selector)
}

fn decode<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    selector: SheetSelector<'_>,
) -> Result<SheetMatrix, ParseError> {
    let names: Vec<String> = workbook.sheet_names().to_vec();
    if names.is_empty() {
        return Err(ParseError::Decode("workbook contains no sheets".into()));
    }

    let name = match selector {
        SheetSelector::First => names[0].clone(),
        SheetSelector::SecondOrFirst => names.get(1).unwrap_or(&names[0]).clone(),
        SheetSelector::Named(n) => names
            .iter()
            .find(|s| s.as_str() == n)
            .cloned()
            .ok_or_else(|| ParseError::Decode(format!("no sheet named '{n}'")))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ParseError::Decode(format!("failed to read sheet '{name}': {e}")))?;

    Ok(range_to_matrix(&range))
}

/// Materialize a calamine range as a matrix with physical addressing.
///
/// Calamine ranges start at the first occupied cell; leading rows and
/// columns are padded back with empties so row/column indices stay
/// physical.
fn range_to_matrix(range: &Range<Data>) -> SheetMatrix {
    let (start_row, start_col) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Vec::new(),
    };

    let mut matrix: SheetMatrix = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells: Vec<Cell> = Vec::with_capacity(start_col + row.len());
        cells.resize(start_col, Cell::Empty);
        cells.extend(row.iter().map(normalize));
        matrix.push(cells);
    }
    matrix
}

fn normalize(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Cell-level errors are data here, not failures
        Data::Error(e) => Cell::Text(format!("#{:?}", e)),
        // Date serials stay numeric; ISO strings stay textual. The matcher
        // treats every cell as a string either way.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
