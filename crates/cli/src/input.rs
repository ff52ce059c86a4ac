//! Input dispatch — route a path to the right decoder by extension.

use std::path::Path;

use metermatch_core::SheetMatrix;
use metermatch_io::xlsx::SheetSelector;
use metermatch_io::{csv, xlsx, ParseError};

/// Decode `path` into a cell matrix.
///
/// `.csv` and `.txt` go through the CSV reader with delimiter sniffing,
/// `.tsv` is tab-separated; everything else opens as a spreadsheet
/// workbook. A text file only ever has one "sheet", so the selector is
/// meaningful for workbooks only.
pub fn read_matrix(path: &Path, selector: SheetSelector<'_>) -> Result<SheetMatrix, ParseError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt") => {
            csv::import(path)
        }
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => csv::import_with_delimiter(path, b'\t'),
        _ => xlsx::read_sheet(path, selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_paths_use_the_text_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meters.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "M1;100-200").unwrap();
        writeln!(file, "M2;300").unwrap();
        drop(file);

        let matrix = read_matrix(&path, SheetSelector::First).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0][1].canon(), "100-200");
    }

    #[test]
    fn unknown_extensions_fall_through_to_the_workbook_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meters.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();

        assert!(matches!(
            read_matrix(&path, SheetSelector::First),
            Err(ParseError::Decode(_))
        ));
    }
}
