//! Risk Register
//!
//! Risks are scored likelihood x impact on a 1-5 scale each, giving an
//! inherent score in 1-25. The score is always derived from the two
//! factors; it is never stored on its own, so a risk cannot drift out of
//! lockstep with its factors.

use crate::classify::{classify, RISK_SEVERITY_BANDS};
use crate::grouping::{group_and_count, GroupCount};
use grc_common::{GrcResult, Impact, Likelihood};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Compute a risk score from raw factors.
///
/// Inputs outside [1,5] are a contract violation and fail with
/// `InvalidArgument`; clamping here would mask caller bugs.
pub fn risk_score(likelihood: u8, impact: u8) -> GrcResult<u8> {
    let l = Likelihood::new(likelihood)?;
    let i = Impact::new(impact)?;
    Ok(l.value() * i.value())
}

/// Severity label for a 1-25 risk score
pub fn risk_severity(score: u8) -> &'static str {
    classify(f64::from(score), RISK_SEVERITY_BANDS)
}

/// Risk register entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub id: Uuid,
    pub title: String,
    pub category: RiskCategory,
    pub likelihood: Likelihood,
    pub impact: Impact,
    pub status: RiskStatus,
    /// Source tag of the finding this risk was synthesized from, if any
    pub origin_source: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Risk {
    /// Create a new risk, validating both factors
    pub fn new(
        title: &str,
        category: RiskCategory,
        likelihood: u8,
        impact: u8,
    ) -> GrcResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            category,
            likelihood: Likelihood::new(likelihood)?,
            impact: Impact::new(impact)?,
            status: RiskStatus::Identified,
            origin_source: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        })
    }

    /// Inherent score, recomputed from the factors (1-25)
    pub fn score(&self) -> u8 {
        self.likelihood.value() * self.impact.value()
    }

    /// Severity label for the current score
    pub fn severity(&self) -> &'static str {
        risk_severity(self.score())
    }

    /// Re-score the risk with new factors
    pub fn reassess(&mut self, likelihood: u8, impact: u8) -> GrcResult<()> {
        self.likelihood = Likelihood::new(likelihood)?;
        self.impact = Impact::new(impact)?;
        self.status = RiskStatus::Assessed;
        self.updated_at = chrono::Utc::now();
        Ok(())
    }
}

/// Risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Strategic,
    Operational,
    Financial,
    Compliance,
    Security,
    Privacy,
    Legal,
    Reputational,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strategic => "Strategic",
            Self::Operational => "Operational",
            Self::Financial => "Financial",
            Self::Compliance => "Compliance",
            Self::Security => "Security",
            Self::Privacy => "Privacy",
            Self::Legal => "Legal",
            Self::Reputational => "Reputational",
        };
        write!(f, "{name}")
    }
}

/// Risk lifecycle status. Transitions are user-driven and unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Identified,
    Assessed,
    Mitigated,
    Accepted,
    Closed,
}

/// Risk register
pub struct RiskRegister {
    risks: Arc<RwLock<HashMap<Uuid, Risk>>>,
}

impl RiskRegister {
    pub fn new() -> Self {
        Self {
            risks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add risk
    pub fn add(&self, risk: Risk) -> Uuid {
        let id = risk.id;
        tracing::debug!(risk = %risk.title, score = risk.score(), "registering risk");
        self.risks.write().insert(id, risk);
        id
    }

    /// Get risk
    pub fn get(&self, id: Uuid) -> Option<Risk> {
        self.risks.read().get(&id).cloned()
    }

    /// Get all risks
    pub fn all(&self) -> Vec<Risk> {
        self.risks.read().values().cloned().collect()
    }

    /// Get risks by category
    pub fn by_category(&self, category: RiskCategory) -> Vec<Risk> {
        self.risks
            .read()
            .values()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }

    /// Get risks at High severity or above (score >= 12)
    pub fn high_risks(&self) -> Vec<Risk> {
        self.risks
            .read()
            .values()
            .filter(|r| r.score() >= 12)
            .cloned()
            .collect()
    }

    /// Update risk in place
    pub fn update(&self, id: Uuid, f: impl FnOnce(&mut Risk)) {
        if let Some(risk) = self.risks.write().get_mut(&id) {
            f(risk);
            risk.updated_at = chrono::Utc::now();
        }
    }

    /// Remove risk
    pub fn remove(&self, id: Uuid) -> Option<Risk> {
        self.risks.write().remove(&id)
    }

    /// Severity bucket summary over the whole register
    pub fn summary(&self) -> RiskSummary {
        summarize(&self.all())
    }

    /// Per-category breakdown with mitigated and high-severity counts
    pub fn by_category_summary(&self) -> Vec<GroupCount> {
        let risks = self.all();
        group_and_count(
            &risks,
            |r| r.category.to_string(),
            &[
                ("mitigated", &|r: &Risk| r.status == RiskStatus::Mitigated),
                ("high_or_above", &|r: &Risk| r.score() >= 12),
            ],
        )
    }
}

impl Default for RiskRegister {
    fn default() -> Self {
        Self::new()
    }
}

/// Bucket a snapshot of risks by severity band
pub fn summarize(risks: &[Risk]) -> RiskSummary {
    let mut summary = RiskSummary {
        total: risks.len(),
        ..Default::default()
    };
    for risk in risks {
        match risk.severity() {
            "Critical" => summary.critical += 1,
            "High" => summary.high += 1,
            "Medium" => summary.medium += 1,
            _ => summary.low += 1,
        }
    }
    summary
}

/// Risk summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}
