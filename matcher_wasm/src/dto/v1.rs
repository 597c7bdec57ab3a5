use serde::Serialize;
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// A successful match: the score and the UTF-16 offset of every matched char.
#[derive(Serialize, TS, Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub score: f64,
    pub positions: Vec<u32>,
    /// Contiguous runs of `positions`, ready for highlighting.
    pub spans: Vec<Span>,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    /// Set when the supplied table JSON was rejected and the default table was used.
    pub table_invalid: bool,
}
