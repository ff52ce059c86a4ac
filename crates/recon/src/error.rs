use std::fmt;

use metermatch_core::ColumnLetterError;

#[derive(Debug)]
pub enum MatchError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// A configured column letter is malformed (empty or non-alphabetic).
    InvalidColumnLetter(String),
    /// A configured start row is 0 (data rows are addressed 1-based).
    InvalidStartRow(&'static str),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidColumnLetter(letters) => {
                write!(f, "invalid column letter: {letters:?}")
            }
            Self::InvalidStartRow(field) => {
                write!(f, "{field}: start rows are 1-based, got 0")
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<ColumnLetterError> for MatchError {
    fn from(err: ColumnLetterError) -> Self {
        Self::InvalidColumnLetter(err.0)
    }
}
