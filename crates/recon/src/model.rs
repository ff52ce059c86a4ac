use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Whether a meter identifier was resolved against the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Found,
    NotFound,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "FOUND",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MatchStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One reconciled output row.
///
/// The serialized keys are a wire contract shared with the result-file
/// columns: "meter identifier", "segment 1" … "segment 5", "full code",
/// "status" — hence the hand-written `Serialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub meter: String,
    pub segments: [String; 5],
    pub full_code: String,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// Record for a key resolved to `code`: the code is split on `-` into
    /// up to five segments; shorter codes pad with empty strings, extra
    /// trailing segments are dropped.
    pub fn found(meter: String, code: &str) -> Self {
        let mut segments: [String; 5] = Default::default();
        for (slot, part) in segments.iter_mut().zip(code.split('-')) {
            *slot = part.to_string();
        }
        Self {
            meter,
            segments,
            full_code: code.to_string(),
            status: MatchStatus::Found,
        }
    }

    /// Record for a key absent from the lookup.
    pub fn not_found(meter: String) -> Self {
        Self {
            meter,
            segments: Default::default(),
            full_code: String::new(),
            status: MatchStatus::NotFound,
        }
    }
}

impl Serialize for MatchRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchRecord", 8)?;
        state.serialize_field("meter identifier", &self.meter)?;
        state.serialize_field("segment 1", &self.segments[0])?;
        state.serialize_field("segment 2", &self.segments[1])?;
        state.serialize_field("segment 3", &self.segments[2])?;
        state.serialize_field("segment 4", &self.segments[3])?;
        state.serialize_field("segment 5", &self.segments[4])?;
        state.serialize_field("full code", &self.full_code)?;
        state.serialize_field("status", &self.status)?;
        state.end()
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

/// Counts over one match run. `matched + not_matched == total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub matched: usize,
    pub not_matched: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchMeta {
    pub result_file: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub meta: MatchMeta,
    pub summary: MatchSummary,
    pub records: Vec<MatchRecord>,
}
