//! Fuzzy match scoring for completion candidates.
//!
//! Pipeline per candidate: classify word chars → DP over all alignments → best score and
//! matched positions. Positions are char indices into the word; highlight spans are UTF-8 byte
//! offsets using `[start, end)`. UTF-16 conversion for editors happens in `matcher_wasm`.

pub mod chars;
mod fuzzy;
mod span;
mod table;
mod tests;

pub use chars::{CharClass, chars_eq_ignore_case, classify, is_boundary};
pub use fuzzy::{FuzzyMatch, Matcher, match_score, match_score_with_positions, query_chars};
pub use span::Span;
pub use table::{DEFAULT_SCORE_TABLE, InvalidScoreTable, ScoreTable, Weight};
