//! One completion session: built when the popup opens, reused for every keystroke until the
//! cursor leaves the line.

use matcher::Matcher;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::completion::{
    CompletionConfig, CompletionContext, CompletionItem, RankedCandidate, preferred_indices,
    rank_candidates,
};
use crate::position::Position;
use crate::providers::{SelectionRangeProvider, WordRangeProvider};
use crate::proximity::WordDistance;

#[derive(Debug, Clone)]
pub struct CompletionSession {
    ctx: CompletionContext,
    config: CompletionConfig,
    matcher: Matcher,
    distance: WordDistance,
}

impl CompletionSession {
    /// Starts a session, fetching word distance data if `config.locality_bonus` is set.
    pub async fn start<S, W>(
        ctx: CompletionContext,
        config: CompletionConfig,
        selection: &S,
        words: &W,
        token: &CancellationToken,
    ) -> Self
    where
        S: SelectionRangeProvider,
        W: WordRangeProvider,
    {
        let distance = WordDistance::create(
            config.locality_bonus,
            &ctx,
            selection,
            words,
            token,
            config.word_range_timeout(),
        )
        .await;
        debug!(
            document = ctx.document.as_str(),
            line = ctx.position.line,
            degraded = distance.is_none(),
            "completion session started"
        );
        Self::with_distance(ctx, config, distance)
    }

    pub fn with_distance(
        ctx: CompletionContext,
        config: CompletionConfig,
        distance: WordDistance,
    ) -> Self {
        let matcher = Matcher::new(config.score_table).unwrap_or_else(|err| {
            warn!(%err, "invalid score table, using defaults");
            Matcher::default()
        });
        Self {
            matcher,
            ctx,
            config,
            distance,
        }
    }

    pub fn context(&self) -> &CompletionContext {
        &self.ctx
    }

    pub fn distance(&self) -> &WordDistance {
        &self.distance
    }

    /// Ranks `items` for what has been typed at `cursor`.
    pub fn rank(
        &self,
        query: &str,
        cursor: &Position,
        items: Vec<CompletionItem>,
    ) -> Vec<RankedCandidate> {
        rank_candidates(
            query,
            items,
            &self.matcher,
            &self.distance,
            cursor,
            &self.config,
        )
    }

    /// Preferred selection indices into a result of [`CompletionSession::rank`].
    pub fn preferred_indices(&self, ranked: &[RankedCandidate]) -> Vec<usize> {
        preferred_indices(ranked, self.config.preferred_limit)
    }
}
