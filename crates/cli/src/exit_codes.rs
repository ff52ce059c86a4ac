//! CLI Exit Code Registry
//!
//! Single source of truth for `mmatch` exit codes — scripts rely on them.
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! | 0    | Success, every meter resolved                   |
//! | 1    | Run completed but some meters were not matched  |
//! | 2    | CLI usage error (bad args)                      |
//! | 3    | Input file could not be decoded or parsed       |
//! | 4    | Match config failed to parse or validate        |

/// Success - command completed and every meter was resolved.
pub const EXIT_SUCCESS: u8 = 0;

/// The match ran but at least one meter was NOT_FOUND.
/// Like `diff(1)`, exit 1 means "inputs differ."
pub const EXIT_UNRESOLVED: u8 = 1;

/// Usage error - bad arguments, missing required options.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// Input file could not be decoded or parsed.
pub const EXIT_INPUT: u8 = 3;

/// Match config failed to parse or validate.
pub const EXIT_CONFIG: u8 = 4;
