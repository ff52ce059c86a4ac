use serde::Deserialize;

use metermatch_core::letter_to_index;

use crate::error::MatchError;

/// Addressing parameters for the two input sheets plus the result-file name.
///
/// Every field is optional in the TOML surface; explicit fields override
/// the documented defaults individually.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Sheet to read meter keys from. `None` = first sheet in the workbook.
    pub first_sheet_name: Option<String>,
    /// Declared key column. Accepted and validated, but key extraction is
    /// fixed to column A (see `matcher::extract_keys`).
    pub first_sheet_column: String,
    /// 1-based first data row of the key sheet.
    pub first_sheet_start_row: usize,
    /// Sheet to build the lookup from. `None` = second sheet, or the first
    /// if the workbook has only one.
    pub second_sheet_name: Option<String>,
    /// Lookup key column.
    pub second_sheet_meter_column: String,
    /// Lookup value column.
    pub second_sheet_code_column: String,
    /// 1-based first data row of the lookup sheet.
    pub second_sheet_start_row: usize,
    /// Output file name for the result serializer.
    pub result_file: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_sheet_name: None,
            first_sheet_column: "A".to_string(),
            first_sheet_start_row: 1,
            second_sheet_name: None,
            second_sheet_meter_column: "A".to_string(),
            second_sheet_code_column: "B".to_string(),
            second_sheet_start_row: 1,
            result_file: "meter-match-result.xlsx".to_string(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml(input: &str) -> Result<Self, MatchError> {
        let config: MatchConfig =
            toml::from_str(input).map_err(|e| MatchError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every configured column letter and start row before any row
    /// scanning begins.
    pub fn validate(&self) -> Result<(), MatchError> {
        letter_to_index(&self.first_sheet_column)?;
        letter_to_index(&self.second_sheet_meter_column)?;
        letter_to_index(&self.second_sheet_code_column)?;

        if self.first_sheet_start_row == 0 {
            return Err(MatchError::InvalidStartRow("first_sheet_start_row"));
        }
        if self.second_sheet_start_row == 0 {
            return Err(MatchError::InvalidStartRow("second_sheet_start_row"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
