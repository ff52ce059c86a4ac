// Match report serialization — result spreadsheet and plain-text summary.
//
// These are consumers of the engine's output; the engine itself never
// touches the filesystem.

use std::path::Path;

use metermatch_recon::model::{MatchReport, MatchStatus};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::ParseError;

/// Column labels of the result file, in output order. Shared with the JSON
/// wire keys of `MatchRecord`.
pub const RESULT_COLUMNS: [&str; 8] = [
    "meter identifier",
    "segment 1",
    "segment 2",
    "segment 3",
    "segment 4",
    "segment 5",
    "full code",
    "status",
];

fn xlsx_err(e: XlsxError) -> ParseError {
    ParseError::Io(e.to_string())
}

/// Write the match report to an xlsx result file: bold header row with the
/// fixed column labels, then one row per record in report order.
pub fn write_result_file(report: &MatchReport, path: &Path) -> Result<(), ParseError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Match Result").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    for (col, label) in RESULT_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *label, &header_format)
            .map_err(xlsx_err)?;
    }

    for (idx, record) in report.records.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, &record.meter).map_err(xlsx_err)?;
        for (s, segment) in record.segments.iter().enumerate() {
            worksheet
                .write_string(row, (s + 1) as u16, segment)
                .map_err(xlsx_err)?;
        }
        worksheet.write_string(row, 6, &record.full_code).map_err(xlsx_err)?;
        worksheet
            .write_string(row, 7, record.status.as_str())
            .map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

/// Render a plain-text summary of the report: the counts, then one line per
/// unresolved meter.
pub fn text_report(report: &MatchReport) -> String {
    let s = &report.summary;
    let mut lines = Vec::new();
    lines.push("Meter code match report".to_string());
    lines.push(format!("run at: {}", report.meta.run_at));
    lines.push(String::new());
    lines.push(format!("total:       {}", s.total));
    lines.push(format!("matched:     {}", s.matched));
    lines.push(format!("not matched: {}", s.not_matched));

    let unresolved: Vec<_> = report
        .records
        .iter()
        .filter(|r| r.status == MatchStatus::NotFound)
        .collect();
    if !unresolved.is_empty() {
        lines.push(String::new());
        lines.push("unresolved meters:".to_string());
        for record in unresolved {
            lines.push(format!("  {}", record.meter));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use metermatch_recon::model::{MatchMeta, MatchRecord, MatchSummary};

    fn sample_report() -> MatchReport {
        MatchReport {
            meta: MatchMeta {
                result_file: "out.xlsx".into(),
                engine_version: "0.0.0".into(),
                run_at: "2026-08-06T00:00:00+00:00".into(),
            },
            summary: MatchSummary { matched: 1, not_matched: 1, total: 2 },
            records: vec![
                MatchRecord::found("M1".into(), "100-200-300"),
                MatchRecord::not_found("M2".into()),
            ],
        }
    }

    #[test]
    fn text_report_lists_counts_and_unresolved_meters() {
        let text = text_report(&sample_report());
        assert!(text.contains("total:       2"));
        assert!(text.contains("matched:     1"));
        assert!(text.contains("not matched: 1"));
        assert!(text.contains("unresolved meters:"));
        assert!(text.contains("  M2"));
        assert!(!text.contains("  M1\n"));
    }

    #[test]
    fn text_report_omits_unresolved_section_when_all_match() {
        let mut report = sample_report();
        report.records.pop();
        report.summary = MatchSummary { matched: 1, not_matched: 0, total: 1 };
        let text = text_report(&report);
        assert!(!text.contains("unresolved"));
    }

    #[test]
    fn result_file_round_trips_through_the_sheet_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.xlsx");
        write_result_file(&sample_report(), &path).unwrap();

        let matrix = crate::xlsx::read_sheet(&path, crate::xlsx::SheetSelector::First).unwrap();
        let labels: Vec<String> = matrix[0].iter().map(|c| c.canon()).collect();
        assert_eq!(labels, RESULT_COLUMNS.map(String::from).to_vec());

        use metermatch_core::grid::value_at;
        assert_eq!(value_at(&matrix[1], 0), "M1");
        assert_eq!(value_at(&matrix[1], 1), "100");
        assert_eq!(value_at(&matrix[1], 3), "300");
        assert_eq!(value_at(&matrix[1], 6), "100-200-300");
        assert_eq!(value_at(&matrix[1], 7), "FOUND");

        assert_eq!(value_at(&matrix[2], 0), "M2");
        assert_eq!(value_at(&matrix[2], 1), "");
        assert_eq!(value_at(&matrix[2], 7), "NOT_FOUND");
    }
}
