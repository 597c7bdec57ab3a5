//! Subsequence scoring.
//!
//! `query` matches `word` if every query char appears in `word` in order (case-insensitive).
//! Many alignments may exist; the score is the best total over all of them.
//!
//! Search is a DP over `(query index, word index)`: `row[i]` holds the best score of an
//! alignment of `query[..=k]` whose last char lands on `word[i]`. A cell is reached either from
//! `word[i - 1]` (contiguous) or from the best cell at or before `word[i - 2]` (gap), so each row
//! costs one pass with a running prefix maximum.

use crate::chars::{chars_eq_ignore_case, is_boundary};
use crate::span::Span;
use crate::table::{InvalidScoreTable, ScoreTable};

/// A successful match: the best score and the word char index of every query char.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub score: f64,
    /// Ascending char indices into the word, one per query char.
    pub positions: Vec<usize>,
}

impl FuzzyMatch {
    /// Merges matched chars into byte spans of `word` for highlighting.
    ///
    /// `word` must be the string the match was computed against.
    pub fn highlight_spans(&self, word: &str) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        let mut positions = self.positions.iter().copied().peekable();

        for (char_idx, (byte_idx, ch)) in word.char_indices().enumerate() {
            let Some(&next) = positions.peek() else {
                break;
            };
            if next != char_idx {
                continue;
            }
            positions.next();

            let start = u32::try_from(byte_idx).unwrap_or(u32::MAX);
            let end = u32::try_from(byte_idx + ch.len_utf8()).unwrap_or(u32::MAX);
            match spans.last_mut() {
                Some(last) if last.end == start => last.end = end,
                _ => spans.push(Span { start, end }),
            }
        }

        spans
    }
}

/// Scores words against queries with a fixed [`ScoreTable`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matcher {
    table: ScoreTable,
}

impl Matcher {
    /// Fails if `table` could score a match at zero; see [`ScoreTable::validate`].
    pub fn new(table: ScoreTable) -> Result<Self, InvalidScoreTable> {
        table.validate()?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Best score of `query` against `word`, or `0.0` if there is no match.
    pub fn score(&self, word: &str, query: &[char]) -> f64 {
        let word: Vec<char> = word.chars().collect();
        self.score_chars(&word, query)
    }

    pub fn score_chars(&self, word: &[char], query: &[char]) -> f64 {
        Search::new(&self.table, word, query, false)
            .and_then(Search::run)
            .map_or(0.0, |m| m.score)
    }

    /// Like [`Matcher::score`], but also returns the winning alignment.
    ///
    /// Returns `None` exactly when [`Matcher::score`] returns `0.0`.
    pub fn score_with_positions(&self, word: &str, query: &[char]) -> Option<FuzzyMatch> {
        let word: Vec<char> = word.chars().collect();
        self.score_chars_with_positions(&word, query)
    }

    pub fn score_chars_with_positions(&self, word: &[char], query: &[char]) -> Option<FuzzyMatch> {
        Search::new(&self.table, word, query, true).and_then(Search::run)
    }
}

/// Scores `query` against `word` with the default table. `0.0` means no match.
pub fn match_score(word: &str, query: &[char]) -> f64 {
    Matcher::default().score(word, query)
}

/// Scores `query` against `word` with the default table and returns matched char indices.
pub fn match_score_with_positions(word: &str, query: &[char]) -> Option<FuzzyMatch> {
    Matcher::default().score_with_positions(word, query)
}

/// Converts user input into the query form taken by the scorers.
pub fn query_chars(input: &str) -> Vec<char> {
    input.chars().collect()
}

/// Where a word char sits, independent of the query.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Start,
    /// Sub-word boundary; the payload counts earlier boundaries after the start.
    Boundary(u32),
    Interior,
}

struct Search<'a> {
    table: &'a ScoreTable,
    word: &'a [char],
    query: &'a [char],
    slots: Vec<Slot>,
    /// `from[k][i]`: predecessor word index of cell `(k, i)`; only filled when tracking.
    from: Option<Vec<Vec<usize>>>,
}

impl<'a> Search<'a> {
    fn new(
        table: &'a ScoreTable,
        word: &'a [char],
        query: &'a [char],
        track: bool,
    ) -> Option<Self> {
        if query.is_empty() || query.len() > word.len() {
            return None;
        }

        let mut slots = Vec::with_capacity(word.len());
        let mut depth = 0u32;
        for idx in 0..word.len() {
            let slot = if idx == 0 {
                Slot::Start
            } else if is_boundary(word, idx) {
                depth = depth.saturating_add(1);
                Slot::Boundary(depth - 1)
            } else {
                Slot::Interior
            };
            slots.push(slot);
        }

        let from = track.then(|| vec![vec![usize::MAX; word.len()]; query.len()]);

        Some(Self {
            table,
            word,
            query,
            slots,
            from,
        })
    }

    fn run(mut self) -> Option<FuzzyMatch> {
        let n = self.word.len();
        let m = self.query.len();

        let mut prev: Vec<Option<f64>> = vec![None; n];
        let mut curr: Vec<Option<f64>> = vec![None; n];

        // First query char: no predecessor.
        let first = self.query[0];
        for (idx, cell) in prev.iter_mut().enumerate() {
            let ch = self.word[idx];
            if !chars_eq_ignore_case(ch, first) {
                continue;
            }
            let exact = ch == first;
            *cell = Some(match self.slots[idx] {
                Slot::Start => self.table.start.pick(exact),
                Slot::Boundary(depth) => self.table.boundary_at(depth, exact),
                Slot::Interior => self.table.interior.pick(exact),
            });
        }

        for k in 1..m {
            let qc = self.query[k];
            curr.iter_mut().for_each(|cell| *cell = None);

            // Best `prev` cell at index <= i - 2, earliest on ties.
            let mut gap_best: Option<(f64, usize)> = None;

            // Leave room for the remaining query chars after `i`.
            let last = n - (m - 1 - k);
            for idx in k..last {
                if idx >= 2
                    && let Some(score) = prev[idx - 2]
                    && gap_best.is_none_or(|(best, _)| score > best)
                {
                    gap_best = Some((score, idx - 2));
                }

                let ch = self.word[idx];
                if !chars_eq_ignore_case(ch, qc) {
                    continue;
                }
                let exact = ch == qc;

                let mut best: Option<(f64, usize)> = None;
                if let Some(score) = prev[idx - 1] {
                    best = Some((score + self.contiguous_bonus(idx, exact), idx - 1));
                }
                if let Some((score, from)) = gap_best {
                    let total = score + self.gap_bonus(idx, exact);
                    if best.is_none_or(|(b, _)| total > b) {
                        best = Some((total, from));
                    }
                }

                if let Some((score, from)) = best {
                    curr[idx] = Some(score);
                    if let Some(table) = self.from.as_mut() {
                        table[k][idx] = from;
                    }
                }
            }

            std::mem::swap(&mut prev, &mut curr);
        }

        let (score, end) = prev
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|score| (score, idx)))
            .fold(None, |acc: Option<(f64, usize)>, (score, idx)| match acc {
                Some((best, _)) if best >= score => acc,
                _ => Some((score, idx)),
            })?;

        let positions = match &self.from {
            Some(from) => {
                let mut positions = vec![0usize; m];
                let mut idx = end;
                for k in (0..m).rev() {
                    positions[k] = idx;
                    if k > 0 {
                        idx = from[k][idx];
                    }
                }
                positions
            }
            None => Vec::new(),
        };

        Some(FuzzyMatch { score, positions })
    }

    fn contiguous_bonus(&self, idx: usize, exact: bool) -> f64 {
        let interior = self.table.interior.pick(exact);
        match self.slots[idx] {
            Slot::Boundary(depth) => self.table.boundary_at(depth, exact).max(interior),
            Slot::Start | Slot::Interior => interior,
        }
    }

    fn gap_bonus(&self, idx: usize, exact: bool) -> f64 {
        match self.slots[idx] {
            Slot::Boundary(depth) => self.table.boundary_at(depth, exact),
            Slot::Start | Slot::Interior => self.table.scattered.pick(exact),
        }
    }
}
