//! Posture Reporting

use crate::controls::{ComplianceSummary, DomainCompliance};
use crate::findings::FindingSummary;
use crate::policies::AdoptionSummary;
use crate::posture::{posture_score, PostureScore, WeightedCheck};
use crate::risk::RiskSummary;
use crate::PostureEngine;
use grc_common::GrcResult;
use serde::{Deserialize, Serialize};

/// Report generator
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generate executive summary across every register, plus the posture
    /// score for the supplied check results.
    pub fn executive_summary(
        engine: &PostureEngine,
        checks: &[WeightedCheck],
    ) -> GrcResult<ExecutiveSummary> {
        let compliance = engine.compliance_score(None);
        let domains = engine.compliance_by_domain();
        let posture = posture_score(checks)?;

        tracing::info!(
            compliance = compliance.score,
            posture = posture.score,
            grade = %posture.grade,
            "generated executive summary"
        );

        Ok(ExecutiveSummary {
            compliance,
            domains,
            risks: engine.risk_summary(),
            findings: engine.finding_summary(),
            adoption: engine.policy_adoption(),
            posture,
            generated_at: chrono::Utc::now(),
        })
    }

    /// Generate a gap list: every domain scoring below the given floor.
    pub fn domain_gaps(engine: &PostureEngine, floor: u8) -> Vec<DomainGap> {
        engine
            .compliance_by_domain()
            .into_iter()
            .filter(|d| d.score < floor)
            .map(|d| DomainGap {
                domain: d.domain,
                score: d.score,
                open_controls: d.counts.in_progress + d.counts.not_started,
            })
            .collect()
    }
}

/// Executive summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub compliance: ComplianceSummary,
    pub domains: Vec<DomainCompliance>,
    pub risks: RiskSummary,
    pub findings: FindingSummary,
    pub adoption: AdoptionSummary,
    pub posture: PostureScore,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// A domain below the compliance floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainGap {
    pub domain: String,
    pub score: u8,
    pub open_controls: usize,
}
