// CSV/TSV decode into cell matrices.
//
// Text files are the "sheet-equivalent" tabular input: one file, one sheet.

use std::io::Read;
use std::path::Path;

use metermatch_core::{Cell, SheetMatrix};

use crate::error::ParseError;

/// Decode the file at `path`, sniffing the delimiter from its first lines.
pub fn import(path: &Path) -> Result<SheetMatrix, ParseError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter)
}

/// Decode with an explicit delimiter.
pub fn import_with_delimiter(path: &Path, delimiter: u8) -> Result<SheetMatrix, ParseError> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, delimiter)
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read a file and convert to UTF-8 if needed (handles Windows-1252 exports).
pub fn read_file_as_utf8(path: &Path) -> Result<String, ParseError> {
    let mut file = std::fs::File::open(path).map_err(|e| ParseError::Io(e.to_string()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ParseError::Io(e.to_string()))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            // Windows-1252 is the common encoding for Excel-exported CSVs
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn import_from_string(content: &str, delimiter: u8) -> Result<SheetMatrix, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut matrix = SheetMatrix::new();
    for result in reader.records() {
        let record = result.map_err(|e| ParseError::Decode(e.to_string()))?;
        matrix.push(record.iter().map(Cell::from).collect());
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_semicolons() {
        assert_eq!(sniff_delimiter("a;b;c\nd;e;f\n"), b';');
        assert_eq!(sniff_delimiter("a,b\nc,d\n"), b',');
        assert_eq!(sniff_delimiter("a\tb\tc\n"), b'\t');
    }

    #[test]
    fn jagged_rows_survive() {
        let matrix = import_from_string("a,b,c\nd\n,e\n", b',').unwrap();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0].len(), 3);
        assert_eq!(matrix[1].len(), 1);
        assert_eq!(matrix[2][0], Cell::Empty);
        assert_eq!(matrix[2][1].canon(), "e");
    }

    #[test]
    fn empty_fields_become_empty_cells() {
        let matrix = import_from_string("M1,\n,100-200\n", b',').unwrap();
        assert_eq!(matrix[0][0].canon(), "M1");
        assert_eq!(matrix[0][1], Cell::Empty);
        assert_eq!(matrix[1][1].canon(), "100-200");
    }
}
