//! WebAssembly bindings for the fuzzy matcher.
//!
//! Scores are plain numbers; every offset crossing this boundary is a UTF-16 code unit.

pub mod dto;
pub mod offsets;

use matcher::{FuzzyMatch, Matcher, ScoreTable, query_chars};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dto::v1::{MatchResult, ScoreResult, Span};
use crate::offsets::{byte_offset_to_utf16_offset, char_indices_to_utf16};

#[wasm_bindgen(js_name = matchScore)]
pub fn match_score(word: &str, query: &str) -> f64 {
    matcher::match_score(word, &query_chars(query))
}

/// Returns a `MatchResult`, or `undefined` when `query` does not match.
#[wasm_bindgen(js_name = matchScoreWithPositions)]
pub fn match_score_with_positions(word: &str, query: &str) -> JsValue {
    match match_result(word, query) {
        Some(result) => to_js(&result),
        None => JsValue::UNDEFINED,
    }
}

/// Returns the `Span[]` to highlight; empty when `query` does not match.
#[wasm_bindgen(js_name = highlightSpans)]
pub fn highlight_spans(word: &str, query: &str) -> JsValue {
    let spans = match_result(word, query)
        .map(|result| result.spans)
        .unwrap_or_default();
    to_js(&spans)
}

/// Scores with a caller-supplied table. Missing fields take their defaults; unparsable JSON or
/// a table with non-positive weights falls back to the default table and sets `table_invalid`.
#[wasm_bindgen(js_name = matchScoreWithTable)]
pub fn match_score_with_table(word: &str, query: &str, table_json: Option<String>) -> JsValue {
    to_js(&score_with_table(word, query, table_json.as_deref()))
}

pub fn match_result(word: &str, query: &str) -> Option<MatchResult> {
    let found = matcher::match_score_with_positions(word, &query_chars(query))?;
    Some(match_view(word, &found))
}

pub fn score_with_table(word: &str, query: &str, table_json: Option<&str>) -> ScoreResult {
    let (matcher, table_invalid) = match table_json.map(str::trim) {
        None | Some("") => (Matcher::default(), false),
        Some(json) => {
            let parsed = serde_json::from_str::<ScoreTable>(json)
                .ok()
                .and_then(|table| Matcher::new(table).ok());
            match parsed {
                Some(matcher) => (matcher, false),
                None => (Matcher::default(), true),
            }
        }
    };

    ScoreResult {
        score: matcher.score(word, &query_chars(query)),
        table_invalid,
    }
}

fn match_view(word: &str, found: &FuzzyMatch) -> MatchResult {
    let spans = found
        .highlight_spans(word)
        .into_iter()
        .map(|span| Span {
            start: byte_offset_to_utf16_offset(word, span.start as usize),
            end: byte_offset_to_utf16_offset(word, span.end as usize),
        })
        .collect();

    MatchResult {
        score: found.score,
        positions: char_indices_to_utf16(word, &found.positions),
        spans,
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
