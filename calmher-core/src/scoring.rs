//! Burnout assessment scoring.
//!
//! Each answer is a 1-5 rating. Reverse-scored questions count as `6 - value`.
//! The total is scaled against a 60 point maximum (twelve questions).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sum of all answers at the maximum rating.
const MAX_TOTAL: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Emotional,
    Cognitive,
    Physical,
    Support,
}

/// One answered assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: i64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

impl Answer {
    /// The value after reverse scoring.
    pub fn scored_value(&self) -> i64 {
        if self.reverse.unwrap_or(false) {
            6i64.saturating_sub(self.value)
        } else {
            self.value
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// 67 and above is high, 34 and above is medium.
    pub fn from_score(score: u8) -> Self {
        if score >= 67 {
            Severity::High
        } else if score >= 34 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// 0-100
    pub score: u8,
    pub severity: Severity,
    pub category_totals: BTreeMap<Category, i64>,
}

pub fn calculate_burnout_score(answers: &[Answer]) -> ScoreReport {
    // Answer values are unchecked and may be extreme
    let mut total: i64 = 0;
    let mut category_totals: BTreeMap<Category, i64> = BTreeMap::new();

    for answer in answers {
        let value = answer.scored_value();
        total = total.saturating_add(value);
        let category_total = category_totals.entry(answer.category).or_insert(0);
        *category_total = category_total.saturating_add(value);
    }

    let score = (total as f64 / MAX_TOTAL * 100.0).round().clamp(0.0, 100.0) as u8;

    ScoreReport {
        score,
        severity: Severity::from_score(score),
        category_totals,
    }
}
