//! IDE helpers for completion ranking.
//!
//! Coordinates are zero-based lines and UTF-16 characters, matching LSP.
//! Match scoring lives in `matcher`; this crate adds structural word distance and ranking.

mod brackets;
mod buffer;
mod completion;
mod position;
mod providers;
mod proximity;
mod selection;

pub use brackets::BracketSelectionRanges;
pub use buffer::{BufferWordRanges, TextBuffer};
pub use completion::{
    CompletionConfig, CompletionContext, CompletionItem, CompletionKind, CompletionSession,
    DEFAULT_PREFERRED_LIMIT, RankedCandidate, preferred_indices, rank_candidates,
};
pub use position::{DocumentId, Position, Range};
pub use providers::{ProviderError, SelectionRangeProvider, WordRangeProvider, WordRanges};
pub use proximity::{DEFAULT_WORD_RANGE_TIMEOUT, WordDistance};
pub use selection::SelectionRange;

#[cfg(test)]
mod tests;
