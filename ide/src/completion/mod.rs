//! Candidate ranking for the completion popup.
//! Match quality comes from `matcher`; word distance breaks ties between equal scores.

use std::time::Duration;

use matcher::ScoreTable;
use serde::Deserialize;

use crate::position::{DocumentId, Position};
use crate::proximity::DEFAULT_WORD_RANGE_TIMEOUT;

mod ranking;
mod session;

pub use ranking::{RankedCandidate, preferred_indices, rank_candidates};
pub use session::CompletionSession;

/// Default for `CompletionConfig.preferred_limit`.
pub const DEFAULT_PREFERRED_LIMIT: usize = 5;

/// Configuration knobs for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Max length of `preferred_indices` (0 disables it).
    pub preferred_limit: usize,
    /// Max number of ranked candidates kept (0 keeps all).
    pub max_items: usize,
    /// Use word distance as a tie-breaker.
    pub locality_bonus: bool,
    /// Budget for the word index request, in milliseconds.
    pub word_range_timeout_ms: u64,
    pub score_table: ScoreTable,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            preferred_limit: DEFAULT_PREFERRED_LIMIT,
            max_items: 0,
            locality_bonus: true,
            word_range_timeout_ms: DEFAULT_WORD_RANGE_TIMEOUT.as_millis() as u64,
            score_table: ScoreTable::default(),
        }
    }
}

impl CompletionConfig {
    pub fn word_range_timeout(&self) -> Duration {
        Duration::from_millis(self.word_range_timeout_ms)
    }
}

/// Where completion was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub document: DocumentId,
    pub position: Position,
    /// Text typed so far for the word under the cursor.
    pub input: String,
}

impl CompletionContext {
    pub fn new(document: DocumentId, position: Position, input: impl Into<String>) -> Self {
        Self {
            document,
            position,
            input: input.into(),
        }
    }
}

/// One completion candidate for an editor UI.
///
/// Use [`CompletionItem::new`] to construct with sensible defaults, then chain
/// builder methods (`.with_filter_text()`, `.with_detail()`, etc.) to customise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub word: String,
    pub kind: CompletionKind,
    /// Text matched against the query instead of `word`.
    pub filter_text: Option<String>,
    pub sort_text: Option<String>,
    pub detail: Option<String>,
    pub deprecated: bool,
}

impl CompletionItem {
    pub fn new(word: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            word: word.into(),
            kind,
            filter_text: None,
            sort_text: None,
            detail: None,
            deprecated: false,
        }
    }

    pub fn with_filter_text(mut self, text: impl Into<String>) -> Self {
        self.filter_text = Some(text.into());
        self
    }

    pub fn with_sort_text(mut self, text: impl Into<String>) -> Self {
        self.sort_text = Some(text.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// The word scored against the query and looked up for distance.
    pub fn display_word(&self) -> &str {
        self.filter_text.as_deref().unwrap_or(&self.word)
    }

    fn sort_key(&self) -> &str {
        self.sort_text.as_deref().unwrap_or(&self.word)
    }
}

/// High-level bucket for UI grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Text,
    Keyword,
    Variable,
    Function,
    Method,
    Field,
    Property,
    Class,
    Module,
    Snippet,
}
