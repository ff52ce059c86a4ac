use metermatch_core::{letter_to_index, SheetMatrix};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::matcher::{build_lookup, extract_keys, match_keys};
use crate::model::{MatchMeta, MatchReport, MatchStatus, MatchSummary};

/// Run one match pass per config: validate addressing, extract the key
/// list from the first sheet, build the lookup from the second, match in
/// key order and summarize.
///
/// Pure and synchronous; the caller owns reading the sheets and writing
/// the result file.
pub fn run(
    config: &MatchConfig,
    first_sheet: &SheetMatrix,
    second_sheet: &SheetMatrix,
) -> Result<MatchReport, MatchError> {
    config.validate()?;

    let meter_col = letter_to_index(&config.second_sheet_meter_column)?;
    let code_col = letter_to_index(&config.second_sheet_code_column)?;

    let keys = extract_keys(first_sheet, config.first_sheet_start_row - 1);
    let lookup = build_lookup(
        second_sheet,
        config.second_sheet_start_row - 1,
        meter_col,
        code_col,
    );
    let records = match_keys(&keys, &lookup);

    let matched = records
        .iter()
        .filter(|r| r.status == MatchStatus::Found)
        .count();
    let summary = MatchSummary {
        matched,
        not_matched: records.len() - matched,
        total: records.len(),
    };

    Ok(MatchReport {
        meta: MatchMeta {
            result_file: config.result_file.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use metermatch_core::Cell;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from(*s)).collect()
    }

    #[test]
    fn run_matches_and_counts() {
        let first = vec![row(&["M1"]), row(&["M2"])];
        let second = vec![row(&["M1", "100-200-300"])];

        let report = run(&MatchConfig::default(), &first, &second).unwrap();

        assert_eq!(report.summary, MatchSummary { matched: 1, not_matched: 1, total: 2 });
        assert_eq!(report.records[0].meter, "M1");
        assert_eq!(report.records[0].segments, ["100", "200", "300", "", ""]);
        assert_eq!(report.records[0].full_code, "100-200-300");
        assert_eq!(report.records[0].status, MatchStatus::Found);
        assert_eq!(report.records[1].meter, "M2");
        assert_eq!(report.records[1].status, MatchStatus::NotFound);
    }

    #[test]
    fn run_rejects_invalid_config_before_scanning() {
        let config = MatchConfig {
            second_sheet_code_column: "B2".into(),
            ..MatchConfig::default()
        };
        let err = run(&config, &Vec::new(), &Vec::new()).unwrap_err();
        assert!(matches!(err, MatchError::InvalidColumnLetter(_)));
    }

    #[test]
    fn run_honors_start_rows() {
        let first = vec![row(&["skip me"]), row(&["M1"])];
        let second = vec![row(&["header", "header"]), row(&["M1", "9-8"])];
        let config = MatchConfig {
            first_sheet_start_row: 2,
            second_sheet_start_row: 2,
            ..MatchConfig::default()
        };

        let report = run(&config, &first, &second).unwrap();
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.records[0].full_code, "9-8");
    }

    #[test]
    fn configured_first_column_is_not_honored() {
        // Keys live in column B, config points there — extraction still
        // reads column A, so nothing qualifies.
        let first = vec![row(&["", "M1"]), row(&["", "M2"])];
        let second = vec![row(&["M1", "1-2"])];
        let config = MatchConfig {
            first_sheet_column: "B".into(),
            ..MatchConfig::default()
        };

        let report = run(&config, &first, &second).unwrap();
        assert_eq!(report.summary.total, 0);
        assert!(report.records.is_empty());
    }

    #[test]
    fn empty_inputs_produce_an_empty_report() {
        let report = run(&MatchConfig::default(), &Vec::new(), &Vec::new()).unwrap();
        assert_eq!(report.summary, MatchSummary::default());
        assert!(report.records.is_empty());
    }
}
