//! Scoring weights.
//!
//! Every matched query character earns exactly one bonus, picked by where it lands in the word.
//! Each bonus has an exact-case and a case-folded value; the folded value is always lower.

use serde::Deserialize;
use thiserror::Error;

/// Exact-case / case-folded pair of weights.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Weight {
    pub exact: f64,
    pub folded: f64,
}

impl Weight {
    pub const fn new(exact: f64, folded: f64) -> Self {
        Self { exact, folded }
    }

    pub fn pick(self, exact: bool) -> f64 {
        if exact { self.exact } else { self.folded }
    }
}

/// Weights used by [`crate::Matcher`].
///
/// Defaults:
///
/// | landing position                              | exact | folded |
/// |-----------------------------------------------|-------|--------|
/// | first char of the word                        | 5     | 2.5    |
/// | first sub-word boundary after the start       | 2     | 1      |
/// | directly after the previous match, or the first match landing mid-word | 1 | 0.5 |
/// | anywhere else                                 | 0.1   | 0.05   |
///
/// Boundary bonuses shrink by `boundary_decay` for every earlier boundary in the word and never
/// drop below `boundary_floor`. When a match is both contiguous and on a boundary, the larger
/// bonus counts.
///
/// Every weight must be positive and finite, and `boundary_decay` must lie in `(0, 1]`, so that
/// any alignment scores above zero. Deserialization and [`crate::Matcher::new`] enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "TableFields")]
pub struct ScoreTable {
    pub start: Weight,
    pub boundary: Weight,
    pub boundary_decay: f64,
    pub boundary_floor: Weight,
    pub interior: Weight,
    pub scattered: Weight,
}

pub const DEFAULT_SCORE_TABLE: ScoreTable = ScoreTable {
    start: Weight::new(5.0, 2.5),
    boundary: Weight::new(2.0, 1.0),
    boundary_decay: 0.5,
    boundary_floor: Weight::new(0.25, 0.125),
    interior: Weight::new(1.0, 0.5),
    scattered: Weight::new(0.1, 0.05),
};

impl Default for ScoreTable {
    fn default() -> Self {
        DEFAULT_SCORE_TABLE
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidScoreTable {
    #[error("weight `{0}` must be positive and finite")]
    Weight(&'static str),
    #[error("`boundary_decay` must be in (0, 1], got {0}")]
    Decay(f64),
}

impl ScoreTable {
    pub fn validate(&self) -> Result<(), InvalidScoreTable> {
        let weights = [
            ("start", self.start),
            ("boundary", self.boundary),
            ("boundary_floor", self.boundary_floor),
            ("interior", self.interior),
            ("scattered", self.scattered),
        ];
        for (name, weight) in weights {
            if !(is_positive(weight.exact) && is_positive(weight.folded)) {
                return Err(InvalidScoreTable::Weight(name));
            }
        }
        if !(self.boundary_decay > 0.0 && self.boundary_decay <= 1.0) {
            return Err(InvalidScoreTable::Decay(self.boundary_decay));
        }
        Ok(())
    }

    /// Bonus for the `depth`-th boundary after the start of the word (0-based).
    pub(crate) fn boundary_at(&self, depth: u32, exact: bool) -> f64 {
        let depth = i32::try_from(depth).unwrap_or(i32::MAX);
        let decayed = self.boundary.pick(exact) * self.boundary_decay.powi(depth);
        decayed.max(self.boundary_floor.pick(exact))
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Unchecked wire form of [`ScoreTable`]; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct TableFields {
    start: Weight,
    boundary: Weight,
    boundary_decay: f64,
    boundary_floor: Weight,
    interior: Weight,
    scattered: Weight,
}

impl Default for TableFields {
    fn default() -> Self {
        let ScoreTable {
            start,
            boundary,
            boundary_decay,
            boundary_floor,
            interior,
            scattered,
        } = DEFAULT_SCORE_TABLE;
        Self {
            start,
            boundary,
            boundary_decay,
            boundary_floor,
            interior,
            scattered,
        }
    }
}

impl TryFrom<TableFields> for ScoreTable {
    type Error = InvalidScoreTable;

    fn try_from(fields: TableFields) -> Result<Self, Self::Error> {
        let table = ScoreTable {
            start: fields.start,
            boundary: fields.boundary,
            boundary_decay: fields.boundary_decay,
            boundary_floor: fields.boundary_floor,
            interior: fields.interior,
            scattered: fields.scattered,
        };
        table.validate()?;
        Ok(table)
    }
}
