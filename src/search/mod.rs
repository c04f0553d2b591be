//! LCS-based fuzzy search and ranking
//!
//! `lcs` scores one text against a query, `ranking` folds four field scores
//! into a total, and `engine` ranks whole candidate collections.

pub mod engine;
pub mod lcs;
pub mod ranking;


pub use engine::{RankResult, RankedList, RankingEngine};
pub use lcs::{lcs_length, score, FieldScore};
pub use ranking::{BonusKeying, FieldBonus, FieldScores, ScoreBreakdown, ScoringWeights};
