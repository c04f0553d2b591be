//! Search Engine Integration
//!
//! Ties together per-field LCS scoring and the bonus policy to rank a
//! collection of candidates against a query.

use super::lcs::score;
use super::ranking::{BonusKeying, FieldScores, ScoreBreakdown, ScoringWeights};
use crate::candidate::Searchable;
use serde::Serialize;
use tracing::{debug, trace};

/// A candidate with its field scores and total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankResult<T> {
    /// The scored record
    pub candidate: T,
    /// Similarity of each field to the query
    pub field_scores: FieldScores,
    /// Field scores plus bonuses
    pub total_score: f64,
}

/// Results ordered by descending total score
pub type RankedList<T> = Vec<RankResult<T>>;

/// Ranking engine holding the bonus policy.
///
/// Holds no per-query state, so one engine can serve any number of
/// concurrent `rank` calls.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    weights: ScoringWeights,
    keying: BonusKeying,
}

impl RankingEngine {
    /// Create an engine with default weights and legacy bonus keying
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            keying: BonusKeying::default(),
        }
    }

    /// Select which field each perfect bonus is keyed on
    pub fn keying(mut self, keying: BonusKeying) -> Self {
        self.keying = keying;
        self
    }

    /// Weights the bonus policy is scored with
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Field the perfect description and group name bonuses are keyed on
    pub fn bonus_keying(&self) -> BonusKeying {
        self.keying
    }

    /// Rank candidates against a query.
    ///
    /// Keeps only results scoring strictly above `min_score` and returns them
    /// sorted by descending total; equal totals keep their input order.
    pub fn rank<T, I>(&self, query: &str, candidates: I, min_score: f64) -> RankedList<T>
    where
        T: Searchable,
        I: IntoIterator<Item = T>,
    {
        let query = query.to_lowercase();

        let scored: Vec<RankResult<T>> = candidates
            .into_iter()
            .map(|candidate| self.score_folded(&query, candidate))
            .collect();
        let scored_count = scored.len();

        let ranked = Self::process_ranks(scored, min_score);

        debug!(
            "Ranked query '{}': {} candidates, {} above min score {}",
            query,
            scored_count,
            ranked.len(),
            min_score
        );

        ranked
    }

    /// Score a single candidate without filtering
    pub fn score_candidate<T: Searchable>(&self, query: &str, candidate: T) -> RankResult<T> {
        self.score_folded(&query.to_lowercase(), candidate)
    }

    /// Drop results at or below `min_score` and sort the rest, descending.
    ///
    /// `sort_by` is stable, so ties stay in input order.
    pub fn process_ranks<T>(mut results: Vec<RankResult<T>>, min_score: f64) -> RankedList<T> {
        results.retain(|result| result.total_score > min_score);
        results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        results
    }

    fn score_folded<T: Searchable>(&self, query: &str, candidate: T) -> RankResult<T> {
        let field = |text: Option<&str>| score(&text.unwrap_or_default().to_lowercase(), query);

        let field_scores = FieldScores {
            title: field(candidate.title()),
            description: field(candidate.description()),
            group_name: field(Some(candidate.group_name())),
            item_name: field(Some(candidate.item_name())),
        };

        let breakdown = ScoreBreakdown::calculate(&field_scores, &self.weights, self.keying);

        trace!(
            "{}: title={:.3} description={:.3} group={:.3} item={:.3} total={:.3}",
            candidate.path(),
            field_scores.title.score,
            field_scores.description.score,
            field_scores.group_name.score,
            field_scores.item_name.score,
            breakdown.total_score
        );

        RankResult {
            candidate,
            field_scores,
            total_score: breakdown.total_score,
        }
    }
}
