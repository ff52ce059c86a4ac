use std::collections::HashMap;

use metermatch_core::{grid, SheetMatrix};

use crate::model::MatchRecord;

/// Column the meter keys are read from. The configured
/// `first_sheet_column` letter is accepted for compatibility, but
/// extraction always reads column A.
const KEY_COLUMN: usize = 0;

/// Extract the meter key list from the first sheet.
///
/// Rows are scanned from `start_row` (0-based) downward. Blank cells are
/// skipped; duplicate keys are preserved as separate entries in row order
/// and will be matched independently.
pub fn extract_keys(sheet: &SheetMatrix, start_row: usize) -> Vec<String> {
    sheet
        .iter()
        .skip(start_row)
        .map(|row| grid::value_at(row, KEY_COLUMN))
        .filter(|key| !key.is_empty())
        .collect()
}

/// Build the meter → code lookup from the second sheet.
///
/// A row contributes an entry only when both cells are non-blank after
/// canonicalization. A meter seen in several qualifying rows keeps the
/// later row's code (last-write-wins).
pub fn build_lookup(
    sheet: &SheetMatrix,
    start_row: usize,
    meter_col: usize,
    code_col: usize,
) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for row in sheet.iter().skip(start_row) {
        let meter = grid::value_at(row, meter_col);
        let code = grid::value_at(row, code_col);
        if meter.is_empty() || code.is_empty() {
            continue;
        }
        lookup.insert(meter, code);
    }
    lookup
}

/// Match each key against the lookup, preserving key order.
pub fn match_keys(keys: &[String], lookup: &HashMap<String, String>) -> Vec<MatchRecord> {
    keys.iter()
        .map(|key| match lookup.get(key) {
            Some(code) => MatchRecord::found(key.clone(), code),
            None => MatchRecord::not_found(key.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchStatus;
    use metermatch_core::Cell;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from(*s)).collect()
    }

    #[test]
    fn extract_skips_blanks_and_keeps_duplicates_in_order() {
        let sheet = vec![
            row(&["M1"]),
            row(&["  "]),
            Vec::new(),
            row(&["M2", "ignored"]),
            row(&["M1"]),
        ];
        assert_eq!(extract_keys(&sheet, 0), vec!["M1", "M2", "M1"]);
    }

    #[test]
    fn extract_honors_the_start_row() {
        let sheet = vec![row(&["header"]), row(&["M1"]), row(&["M2"])];
        assert_eq!(extract_keys(&sheet, 1), vec!["M1", "M2"]);
    }

    #[test]
    fn extract_always_reads_column_a() {
        // keys in column B are invisible to extraction
        let sheet = vec![row(&["", "M1"]), row(&["M2", "M3"])];
        assert_eq!(extract_keys(&sheet, 0), vec!["M2"]);
    }

    #[test]
    fn extract_canonicalizes_numeric_keys() {
        let sheet = vec![vec![Cell::Number(1001.0)], vec![Cell::Number(2.5)]];
        assert_eq!(extract_keys(&sheet, 0), vec!["1001", "2.5"]);
    }

    #[test]
    fn lookup_requires_both_cells() {
        let sheet = vec![
            row(&["M1", "100-200"]),
            row(&["M2", ""]),
            row(&["", "300-400"]),
            row(&["M3", "500"]),
        ];
        let lookup = build_lookup(&sheet, 0, 0, 1);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup["M1"], "100-200");
        assert_eq!(lookup["M3"], "500");
    }

    #[test]
    fn lookup_last_write_wins() {
        let sheet = vec![row(&["M1", "A-1"]), row(&["M1", "B-2"])];
        let lookup = build_lookup(&sheet, 0, 0, 1);
        assert_eq!(lookup["M1"], "B-2");
    }

    #[test]
    fn lookup_reads_the_configured_columns() {
        let sheet = vec![row(&["x", "M1", "y", "100-200"])];
        let lookup = build_lookup(&sheet, 0, 1, 3);
        assert_eq!(lookup["M1"], "100-200");
    }

    #[test]
    fn match_keys_emits_one_record_per_key_in_order() {
        let lookup =
            HashMap::from([("M1".to_string(), "100-200-300".to_string())]);
        let keys = vec!["M1".to_string(), "M2".to_string(), "M1".to_string()];
        let records = match_keys(&keys, &lookup);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].meter, "M1");
        assert_eq!(records[0].status, MatchStatus::Found);
        assert_eq!(records[0].segments, ["100", "200", "300", "", ""]);
        assert_eq!(records[1].status, MatchStatus::NotFound);
        // duplicate key matched independently
        assert_eq!(records[2], records[0]);
    }
}
