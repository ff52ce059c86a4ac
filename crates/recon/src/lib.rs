//! `metermatch-recon` — meter code matching engine.
//!
//! Pure engine crate: receives decoded cell matrices, returns an ordered
//! match report. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;

pub use config::MatchConfig;
pub use engine::run;
pub use error::MatchError;
pub use model::{MatchRecord, MatchReport, MatchStatus, MatchSummary};
