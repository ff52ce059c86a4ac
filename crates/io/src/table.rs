// Sheet table parsing — deduplicated headers plus header-keyed row objects.

use std::collections::HashMap;
use std::path::Path;

use metermatch_core::{grid, Cell, SheetMatrix};
use serde::Serialize;

use crate::error::ParseError;
use crate::xlsx::{self, SheetSelector};

/// One parsed worksheet: deduplicated headers plus one string map per
/// surviving data row. Every row carries exactly the header key set;
/// missing cells are empty strings, never absent.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// Physical row where the data region starts: one title/banner row plus the
/// header row above it.
const DATA_START_ROW: usize = 2;

/// Parse a decoded sheet matrix into headers and row objects.
///
/// The header is physical row 1 when that row has any non-blank cell,
/// otherwise row 0 (sheets without a banner row). Data rows start at
/// physical row 2; rows whose cells are all blank are dropped, the rest
/// keep their original order.
pub fn parse_table(sheet: &SheetMatrix) -> Result<ParsedTable, ParseError> {
    if sheet.is_empty() {
        return Err(ParseError::EmptySheet);
    }

    let header_source = match sheet.get(1) {
        Some(row) if !grid::row_is_blank(row) => row.as_slice(),
        _ => sheet[0].as_slice(),
    };
    let headers = dedup_headers(header_source);

    let mut rows = Vec::new();
    for raw in sheet.iter().skip(DATA_START_ROW) {
        let mut record = HashMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            record.insert(header.clone(), grid::value_at(raw, idx));
        }
        if record.values().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(record);
    }

    Ok(ParsedTable { headers, rows })
}

/// Decode the first worksheet of the workbook at `path` and parse it.
pub fn parse_workbook(path: &Path) -> Result<ParsedTable, ParseError> {
    let sheet = xlsx::read_sheet(path, SheetSelector::First)?;
    parse_table(&sheet)
}

/// Decode and parse from in-memory workbook bytes.
pub fn parse_workbook_bytes(bytes: &[u8]) -> Result<ParsedTable, ParseError> {
    let sheet = xlsx::read_sheet_from_bytes(bytes, SheetSelector::First)?;
    parse_table(&sheet)
}

/// Deduplicate header cells left to right.
///
/// The first occurrence of a non-empty header keeps its text; the Nth
/// repeat is renamed `<text>_N`. Empty headers stay empty and never
/// collide, so every column gets a name even on sheets with blank or
/// repeated headers.
pub fn dedup_headers(cells: &[Cell]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(cells.len());

    for cell in cells {
        let text = cell.canon();
        if text.is_empty() {
            headers.push(text);
            continue;
        }
        let count = seen.entry(text.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            headers.push(text);
        } else {
            headers.push(format!("{text}_{count}"));
        }
    }
    headers
}
