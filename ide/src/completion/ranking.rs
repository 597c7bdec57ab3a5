//! Sorts and filters candidates by a query.
//! Highlight positions are char indices into each item's display word.

use std::cmp::Ordering;

use matcher::{Matcher, query_chars};
use tracing::trace;

use crate::completion::{CompletionConfig, CompletionItem};
use crate::position::Position;
use crate::proximity::WordDistance;

/// A candidate that survived filtering, with its ranking signals.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub item: CompletionItem,
    /// Match score; `0.0` only for an empty query.
    pub score: f64,
    pub distance: u32,
    /// Matched char indices into `item.display_word()`.
    pub positions: Vec<usize>,
}

#[derive(Debug)]
struct RankedItem {
    original_idx: usize,
    candidate: RankedCandidate,
}

fn cmp_ranked_items(a: &RankedItem, b: &RankedItem) -> Ordering {
    b.candidate
        .score
        .total_cmp(&a.candidate.score)
        .then_with(|| a.candidate.distance.cmp(&b.candidate.distance))
        .then_with(|| a.candidate.item.sort_key().cmp(b.candidate.item.sort_key()))
        .then_with(|| a.original_idx.cmp(&b.original_idx))
}

/// Scores every item against `query` and returns matches best first.
///
/// Non-matching items are dropped. An empty query keeps every item unscored, ordered by
/// distance and sort text.
pub fn rank_candidates(
    query: &str,
    items: Vec<CompletionItem>,
    matcher: &Matcher,
    distance: &WordDistance,
    cursor: &Position,
    config: &CompletionConfig,
) -> Vec<RankedCandidate> {
    let query = query_chars(query);
    let total = items.len();

    let mut ranked: Vec<RankedItem> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let word = item.display_word();
            let (score, positions) = if query.is_empty() {
                (0.0, Vec::new())
            } else {
                let found = matcher.score_with_positions(word, &query)?;
                (found.score, found.positions)
            };
            let distance = if config.locality_bonus {
                distance.distance(cursor, word)
            } else {
                0
            };

            Some(RankedItem {
                original_idx: idx,
                candidate: RankedCandidate {
                    item,
                    score,
                    distance,
                    positions,
                },
            })
        })
        .collect();

    ranked.sort_by(cmp_ranked_items);
    if config.max_items > 0 {
        ranked.truncate(config.max_items);
    }
    trace!(total, kept = ranked.len(), "ranked completion candidates");

    ranked.into_iter().map(|r| r.candidate).collect()
}

/// Picks indices of the first non-deprecated candidates, up to `preferred_limit`.
pub fn preferred_indices(ranked: &[RankedCandidate], preferred_limit: usize) -> Vec<usize> {
    if preferred_limit == 0 {
        return Vec::new();
    }

    ranked
        .iter()
        .enumerate()
        .filter(|(_, candidate)| !candidate.item.deprecated)
        .map(|(idx, _)| idx)
        .take(preferred_limit)
        .collect()
}
