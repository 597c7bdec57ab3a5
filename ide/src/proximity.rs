//! Word distance: a structural tie-breaker for completion ranking.
//!
//! For a candidate word, finds its occurrences near the cursor and measures how many selection
//! ranges (innermost first) must be walked outward before one contains an occurrence.
//! `0` means "same innermost scope as the cursor", or "no signal".
//!
//! Construction asks two providers and degrades to [`WordDistance::none`] on any failure,
//! timeout, or cancellation. Once built, a session is an immutable snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::completion::CompletionContext;
use crate::position::{Position, Range};
use crate::providers::{SelectionRangeProvider, WordRangeProvider, WordRanges};
use crate::selection::SelectionRange;

/// Default budget for the word index request.
pub const DEFAULT_WORD_RANGE_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Default)]
pub struct WordDistance {
    session: Option<Arc<Session>>,
}

#[derive(Debug)]
struct Session {
    line: u32,
    /// Start of the token being typed, or the cursor column if it sat between tokens.
    token_start: u32,
    /// Other tokens on the cursor line; moving onto one ends the session.
    line_tokens: Vec<Range>,
    /// Selection ranges around the cursor, innermost first.
    scopes: Vec<Range>,
    /// Occurrences with the cursor's own token removed.
    words: WordRanges,
}

impl WordDistance {
    /// The degraded instance: every distance is `0`.
    pub fn none() -> Self {
        Self { session: None }
    }

    pub fn is_none(&self) -> bool {
        self.session.is_none()
    }

    /// Builds a distance session for the cursor in `ctx`.
    ///
    /// Never fails: disabled, unsupported, empty, failed, timed-out, or cancelled requests all
    /// resolve to [`WordDistance::none`].
    pub async fn create<S, W>(
        enabled: bool,
        ctx: &CompletionContext,
        selection: &S,
        words: &W,
        token: &CancellationToken,
        timeout: Duration,
    ) -> Self
    where
        S: SelectionRangeProvider,
        W: WordRangeProvider,
    {
        if !enabled {
            return Self::none();
        }

        let ranges = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("word distance: cancelled before selection ranges");
                return Self::none();
            }
            res = selection.selection_ranges(&ctx.document, ctx.position) => res,
        };
        let root = match ranges {
            Ok(Some(mut ranges)) if !ranges.is_empty() => ranges.swap_remove(0),
            Ok(_) => {
                debug!("word distance: no selection ranges");
                return Self::none();
            }
            Err(err) => {
                debug!(%err, "word distance: selection ranges failed");
                return Self::none();
            }
        };

        let outer = root.outermost().range;
        if outer.is_empty() {
            debug!("word distance: outermost selection range is empty");
            return Self::none();
        }

        let index = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("word distance: cancelled before word ranges");
                return Self::none();
            }
            res = tokio::time::timeout(timeout, words.word_ranges(&ctx.document, outer)) => res,
        };
        let index = match index {
            Ok(Ok(Some(index))) => index,
            Ok(Ok(None)) => {
                debug!("word distance: no word ranges");
                return Self::none();
            }
            Ok(Err(err)) => {
                debug!(%err, "word distance: word ranges failed");
                return Self::none();
            }
            Err(_) => {
                debug!(?timeout, "word distance: word ranges timed out");
                return Self::none();
            }
        };

        Self::from_parts(ctx.position, &root, index)
    }

    /// Builds a session from already-fetched provider answers.
    pub fn from_parts(position: Position, selection: &SelectionRange, mut words: WordRanges) -> Self {
        let scopes = selection.to_chain();
        let mut token_start = position.character;

        // The word being typed is not evidence of anything.
        words.retain(|_, ranges| {
            ranges.retain(|range| {
                if !range.has_cursor(position) {
                    return true;
                }
                if range.start.line == position.line {
                    token_start = token_start.min(range.start.character);
                }
                false
            });
            ranges.sort_by(|a, b| a.start.cmp(&b.start));
            !ranges.is_empty()
        });

        let line_tokens = words
            .values()
            .flatten()
            .filter(|range| range.start.line == position.line)
            .copied()
            .collect();

        Self {
            session: Some(Arc::new(Session {
                line: position.line,
                token_start,
                line_tokens,
                scopes,
                words,
            })),
        }
    }

    /// Largest distance this session can report.
    pub fn max_distance(&self) -> u32 {
        self.session
            .as_ref()
            .map_or(0, |session| scope_count(&session.scopes))
    }

    /// Scope distance from the cursor to the nearest occurrence of `word`.
    ///
    /// Returns `0` when the session is degraded, the cursor has left the token it was built
    /// for, or the word has no occurrence besides the one being typed. Typing or deleting
    /// within the token keeps the session valid.
    pub fn distance(&self, position: &Position, word: &str) -> u32 {
        let Some(session) = self.session.as_deref() else {
            return 0;
        };
        if !session.covers(position) {
            return 0;
        }
        let Some(occurrences) = session.words.get(word) else {
            return 0;
        };

        occurrences
            .iter()
            .map(|occurrence| session.levels_to(occurrence))
            .min()
            .unwrap_or(0)
    }
}

impl Session {
    fn covers(&self, position: &Position) -> bool {
        position.line == self.line
            && position.character >= self.token_start
            && !self.line_tokens.iter().any(|token| token.has_cursor(*position))
    }

    fn levels_to(&self, occurrence: &Range) -> u32 {
        self.scopes
            .iter()
            .position(|scope| scope.contains_range(occurrence))
            .map_or(scope_count(&self.scopes), |idx| {
                u32::try_from(idx).unwrap_or(u32::MAX)
            })
    }
}

fn scope_count(scopes: &[Range]) -> u32 {
    u32::try_from(scopes.len()).unwrap_or(u32::MAX)
}
