//! Ranking & Scoring System
//!
//! Combines the four per-field similarity scores of a candidate into one
//! total using threshold bonuses with configurable weights.

use super::lcs::FieldScore;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which field a "perfect match" bonus is keyed on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BonusKeying {
    /// Perfect description and group name bonuses fire on a perfect title.
    /// Keeps rankings identical to the settings panel this engine replaces.
    #[default]
    LegacyTitleKeyedBonus,
    /// Every perfect bonus fires on its own field
    PerFieldKeyedBonus,
}

/// Threshold bonus for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBonus {
    /// Score must be strictly above this for `bonus` to apply
    pub threshold: f64,
    /// Added when the score passes `threshold`
    pub bonus: f64,
    /// Added on a perfect (== 1) score
    pub perfect_bonus: f64,
}

impl FieldBonus {
    const fn new(threshold: f64, bonus: f64, perfect_bonus: f64) -> Self {
        Self {
            threshold,
            bonus,
            perfect_bonus,
        }
    }

    fn threshold_bonus(&self, field: &FieldScore) -> f64 {
        if field.score > self.threshold {
            self.bonus
        } else {
            0.0
        }
    }

    fn perfect_bonus(&self, key: &FieldScore) -> f64 {
        if key.is_perfect() {
            self.perfect_bonus
        } else {
            0.0
        }
    }
}

/// Scoring weights for the four searchable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub title: FieldBonus,
    pub description: FieldBonus,
    pub group_name: FieldBonus,
    pub item_name: FieldBonus,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title: FieldBonus::new(0.8, 0.2, 0.1),
            description: FieldBonus::new(0.5, 0.1, 0.1),
            group_name: FieldBonus::new(0.8, 0.2, 0.1),
            item_name: FieldBonus::new(0.8, 0.2, 0.1),
        }
    }
}

impl ScoringWeights {
    /// Every threshold and bonus, for validation
    pub(crate) fn values(&self) -> [f64; 12] {
        let mut out = [0.0; 12];
        for (i, field) in [&self.title, &self.description, &self.group_name, &self.item_name]
            .into_iter()
            .enumerate()
        {
            out[i * 3] = field.threshold;
            out[i * 3 + 1] = field.bonus;
            out[i * 3 + 2] = field.perfect_bonus;
        }
        out
    }
}

/// Per-field scores of one candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldScores {
    pub title: FieldScore,
    pub description: FieldScore,
    pub group_name: FieldScore,
    pub item_name: FieldScore,
}

/// Sum of the field scores and every applicable bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Sum of the four raw field scores
    pub base_score: f64,
    /// Sum of all threshold and perfect bonuses
    pub bonus_score: f64,
    /// `base_score + bonus_score`
    pub total_score: f64,
}

impl ScoreBreakdown {
    /// Calculate the total from four field scores
    pub fn calculate(scores: &FieldScores, weights: &ScoringWeights, keying: BonusKeying) -> Self {
        let title = &scores.title;
        let (description_key, group_name_key) = match keying {
            BonusKeying::LegacyTitleKeyedBonus => (title, title),
            BonusKeying::PerFieldKeyedBonus => (&scores.description, &scores.group_name),
        };

        let base_score = title.score
            + scores.description.score
            + scores.group_name.score
            + scores.item_name.score;

        let bonus_score = weights.title.threshold_bonus(title)
            + weights.title.perfect_bonus(title)
            + weights.description.threshold_bonus(&scores.description)
            + weights.description.perfect_bonus(description_key)
            + weights.group_name.threshold_bonus(&scores.group_name)
            + weights.group_name.perfect_bonus(group_name_key)
            + weights.item_name.threshold_bonus(&scores.item_name)
            + weights.item_name.perfect_bonus(&scores.item_name);

        Self {
            base_score,
            bonus_score,
            total_score: base_score + bonus_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(score: f64) -> FieldScore {
        FieldScore {
            score,
            ..FieldScore::default()
        }
    }

    fn scores(title: f64, description: f64, group_name: f64, item_name: f64) -> FieldScores {
        FieldScores {
            title: field(title),
            description: field(description),
            group_name: field(group_name),
            item_name: field(item_name),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.title.threshold, 0.8);
        assert_eq!(weights.title.bonus, 0.2);
        assert_eq!(weights.description.threshold, 0.5);
        assert_eq!(weights.description.bonus, 0.1);
        assert_eq!(weights.item_name.perfect_bonus, 0.1);
    }

    #[test]
    fn test_no_bonus_below_thresholds() {
        let b = ScoreBreakdown::calculate(
            &scores(0.8, 0.5, 0.8, 0.8),
            &ScoringWeights::default(),
            BonusKeying::default(),
        );
        assert_eq!(b.bonus_score, 0.0);
        assert!(approx(b.total_score, 2.9));
    }

    #[test]
    fn test_perfect_title_triggers_legacy_bonuses() {
        // title == 1: title 0.2 + perfect title 0.1 + perfect description 0.1
        // + perfect group name 0.1, with description and group name at zero
        let b = ScoreBreakdown::calculate(
            &scores(1.0, 0.0, 0.0, 0.0),
            &ScoringWeights::default(),
            BonusKeying::LegacyTitleKeyedBonus,
        );
        assert!(approx(b.bonus_score, 0.5));
        assert!(approx(b.total_score, 1.5));
    }

    #[test]
    fn test_perfect_title_per_field_keying() {
        let b = ScoreBreakdown::calculate(
            &scores(1.0, 0.0, 0.0, 0.0),
            &ScoringWeights::default(),
            BonusKeying::PerFieldKeyedBonus,
        );
        assert!(approx(b.bonus_score, 0.3));
    }

    #[test]
    fn test_perfect_description_only_counts_per_field() {
        let s = scores(0.0, 1.0, 0.0, 0.0);
        let weights = ScoringWeights::default();

        let legacy = ScoreBreakdown::calculate(&s, &weights, BonusKeying::LegacyTitleKeyedBonus);
        assert!(approx(legacy.bonus_score, 0.1));

        let per_field = ScoreBreakdown::calculate(&s, &weights, BonusKeying::PerFieldKeyedBonus);
        assert!(approx(per_field.bonus_score, 0.2));
    }

    #[test]
    fn test_item_name_perfect_keyed_on_itself() {
        let b = ScoreBreakdown::calculate(
            &scores(0.0, 0.0, 0.0, 1.0),
            &ScoringWeights::default(),
            BonusKeying::LegacyTitleKeyedBonus,
        );
        assert!(approx(b.bonus_score, 0.3));
        assert!(approx(b.total_score, 1.3));
    }

    #[test]
    fn test_all_perfect_total() {
        let b = ScoreBreakdown::calculate(
            &scores(1.0, 1.0, 1.0, 1.0),
            &ScoringWeights::default(),
            BonusKeying::LegacyTitleKeyedBonus,
        );
        // 4 + (0.2 + 0.1) + (0.1 + 0.1) + (0.2 + 0.1) + (0.2 + 0.1)
        assert!(approx(b.total_score, 5.1));
    }

    #[test]
    fn test_keying_serializes_kebab_case() {
        let json = serde_json::to_string(&BonusKeying::LegacyTitleKeyedBonus).unwrap();
        assert_eq!(json, "\"legacy-title-keyed-bonus\"");
        let parsed: BonusKeying = serde_json::from_str("\"per-field-keyed-bonus\"").unwrap();
        assert_eq!(parsed, BonusKeying::PerFieldKeyedBonus);
    }
}
