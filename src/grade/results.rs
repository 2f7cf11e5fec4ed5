#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::constants::FAILED_MAX_SCORE;

#[derive(Tabled, Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// The outcome of one rubric check
pub struct CheckResult {
    #[tabled(rename = "Check")]
    /// * `name`: rubric category label
    pub name:       String,
    #[tabled(rename = "Passed")]
    /// * `passed`: verdict for the category
    pub passed:     bool,
    #[tabled(rename = "Points")]
    /// * `points`: points awarded, never above `max_points`
    pub points:     f64,
    #[tabled(rename = "Max")]
    /// * `max_points`: ceiling for the category
    pub max_points: f64,
    #[tabled(rename = "Message")]
    /// * `message`: what was found, missing, or only partially right
    pub message:    String,
}

impl CheckResult {
    /// A failed check worth `points` of `max_points`.
    pub fn fail(
        name: impl Into<String>,
        message: impl Into<String>,
        points: f64,
        max_points: f64,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            points,
            max_points,
            message: message.into(),
        }
    }

    /// A passed check worth `points` of `max_points`.
    pub fn pass(
        name: impl Into<String>,
        message: impl Into<String>,
        points: f64,
        max_points: f64,
    ) -> Self {
        Self {
            passed: true,
            ..Self::fail(name, message, points, max_points)
        }
    }

    /// Whether every available point was awarded.
    pub fn is_full_marks(&self) -> bool {
        self.points >= self.max_points
    }
}

impl Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}/{} pts\n  {}",
            if self.passed { '✓' } else { '✗' },
            self.name,
            self.points,
            self.max_points,
            self.message
        )
    }
}

/// Everything learned from grading one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// `false` only when the file could not be parsed.
    pub success:    bool,
    /// Path of the graded file; absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath:   Option<String>,
    /// Why parsing failed; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:      Option<String>,
    /// Points awarded across all checks, to one decimal.
    pub score:      f64,
    /// Points available across all checks, to one decimal.
    pub max_score:  f64,
    /// `100 * score / max_score` to one decimal; absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Individual check outcomes in rubric order.
    pub checks:     Vec<CheckResult>,
}

impl Report {
    /// Totals `checks` into a successful report for `filepath`.
    pub fn from_checks(filepath: impl Into<String>, checks: Vec<CheckResult>) -> Self {
        let (points, max_points) = checks
            .iter()
            .fold((0f64, 0f64), |acc, c| (acc.0 + c.points, acc.1 + c.max_points));

        Self {
            success: true,
            filepath: Some(filepath.into()),
            error: None,
            score: round1(points),
            max_score: round1(max_points),
            percentage: Some(percentage(points, max_points)),
            checks,
        }
    }

    /// A report for a file that could not be parsed.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            filepath: None,
            error: Some(error.into()),
            score: 0.0,
            max_score: FAILED_MAX_SCORE,
            percentage: None,
            checks: Vec::new(),
        }
    }

    /// Percentage as a number, `0` for failed reports.
    pub fn percentage_value(&self) -> f64 {
        self.percentage.unwrap_or_default()
    }

    /// Whether the report parsed and reached `threshold` percent.
    pub fn passes(&self, threshold: f64) -> bool {
        self.success && self.percentage_value() >= threshold
    }

    /// Looks up a check by its label.
    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// `100 * points / max_points` rounded to one decimal, `0` when nothing was
/// available.
pub fn percentage(points: f64, max_points: f64) -> f64 {
    if max_points > 0.0 {
        round1(100.0 * points / max_points)
    } else {
        0.0
    }
}

/// Rounds to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
