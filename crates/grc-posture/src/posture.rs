//! Security posture scoring
//!
//! A posture score is the raw sum of points for passing checks. The check
//! set is designed so the weights total 100; the sum is deliberately not
//! capped here, overflow handling is the caller's concern. An empty check
//! list scores 0, which is indistinguishable from "all checks failed" in
//! this scheme.

use crate::classify::{classify, GRADE_BANDS};
use grc_common::{GrcError, GrcResult};
use serde::{Deserialize, Serialize};

/// A single weighted pass/fail check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedCheck {
    pub label: String,
    pub passed: bool,
    pub points: f64,
}

impl WeightedCheck {
    pub fn new(label: &str, passed: bool, points: f64) -> Self {
        Self {
            label: label.to_string(),
            passed,
            points,
        }
    }
}

/// Posture score with its letter grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureScore {
    pub score: f64,
    pub grade: String,
}

/// Score a list of weighted checks.
///
/// A malformed check (negative or non-finite points) fails the whole
/// call; skipping it would silently understate the denominator and
/// produce a misleading score.
pub fn posture_score(checks: &[WeightedCheck]) -> GrcResult<PostureScore> {
    for check in checks {
        if !check.points.is_finite() || check.points < 0.0 {
            return Err(GrcError::InvalidArgument(format!(
                "check '{}' has invalid points {}",
                check.label, check.points
            )));
        }
    }

    let score: f64 = checks
        .iter()
        .filter(|c| c.passed)
        .map(|c| c.points)
        .sum();

    tracing::debug!(score, checks = checks.len(), "computed posture score");

    Ok(PostureScore {
        score,
        grade: classify(score, GRADE_BANDS).to_string(),
    })
}
