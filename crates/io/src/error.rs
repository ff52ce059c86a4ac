use std::fmt;

/// Errors surfaced while decoding or serializing tabular inputs.
///
/// Malformed or missing individual cells are never errors; they normalize
/// to the empty string at the decode boundary.
#[derive(Debug)]
pub enum ParseError {
    /// The target worksheet has no rows at all.
    EmptySheet,
    /// The container cannot be decoded as a spreadsheet, or the requested
    /// sheet does not exist.
    Decode(String),
    /// File read or write failure.
    Io(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySheet => write!(f, "sheet has no rows"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}
