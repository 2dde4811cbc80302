//! OpenGRC Posture Engine
//!
//! Scoring and aggregation core for compliance posture: controls, risks,
//! findings, policies, and weighted security checks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     POSTURE ENGINE                           │
//! │                                                              │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐     │
//! │  │ Controls │  │  Risks   │  │ Findings │  │ Policies │     │
//! │  │ Register │  │ Register │  │ Register │  │ Register │     │
//! │  └────┬─────┘  └────┬─────┘  └────┬─────┘  └────┬─────┘     │
//! │       │             │             │             │           │
//! │  ┌────▼─────────────▼─────────────▼─────────────▼──────┐    │
//! │  │                PURE AGGREGATION                     │    │
//! │  │  Compliance % | Risk Buckets | Grouping | Posture   │    │
//! │  └──────────────────────┬──────────────────────────────┘    │
//! │                         │                                   │
//! │                ┌────────▼─────────┐                         │
//! │                │    Reporting     │                         │
//! │                │ (Exec Summary)   │                         │
//! │                └──────────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every aggregation is a pure reduction over a snapshot collection: no
//! I/O, no retained intermediate state. Registers are thread-safe
//! snapshot holders; concurrent callers need no external coordination.

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod classify;
pub mod controls;
pub mod findings;
pub mod grouping;
pub mod policies;
pub mod posture;
pub mod reporting;
pub mod risk;

use std::sync::Arc;
use uuid::Uuid;

pub use classify::{classify, Band, GRADE_BANDS, RISK_SEVERITY_BANDS};
pub use controls::{
    aggregate, aggregate_by_domain, ComplianceCounts, ComplianceSummary, Control,
    ControlRegister, ControlStatus, DomainCompliance,
};
pub use findings::{Finding, FindingRegister, FindingSeverity, FindingStatus, FindingSummary};
pub use grc_common::{GrcError, GrcResult, Impact, Likelihood};
pub use grouping::{group_and_count, GroupCount};
pub use policies::{AdoptionSummary, Policy, PolicyRegister, PolicyStatus};
pub use posture::{posture_score, PostureScore, WeightedCheck};
pub use reporting::{ExecutiveSummary, ReportGenerator};
pub use risk::{risk_score, risk_severity, Risk, RiskCategory, RiskRegister, RiskSummary};

/// Main Posture Engine
pub struct PostureEngine {
    /// Control register
    pub controls: Arc<ControlRegister>,
    /// Risk register
    pub risks: Arc<RiskRegister>,
    /// Finding register
    pub findings: Arc<FindingRegister>,
    /// Policy register
    pub policies: Arc<PolicyRegister>,
}

impl PostureEngine {
    /// Create new posture engine
    pub fn new() -> Self {
        Self {
            controls: Arc::new(ControlRegister::new()),
            risks: Arc::new(RiskRegister::new()),
            findings: Arc::new(FindingRegister::new()),
            policies: Arc::new(PolicyRegister::new()),
        }
    }

    /// Compliance posture over the control register, optionally filtered
    /// to one domain
    pub fn compliance_score(&self, domain: Option<&str>) -> ComplianceSummary {
        self.controls.summary(domain)
    }

    /// Per-domain compliance posture, ordered by domain name
    pub fn compliance_by_domain(&self) -> Vec<DomainCompliance> {
        self.controls.by_domain()
    }

    /// Severity bucket summary over the risk register
    pub fn risk_summary(&self) -> RiskSummary {
        self.risks.summary()
    }

    /// Severity bucket summary over the finding register
    pub fn finding_summary(&self) -> FindingSummary {
        self.findings.summary()
    }

    /// Policy adoption summary
    pub fn policy_adoption(&self) -> AdoptionSummary {
        self.policies.adoption_summary()
    }

    /// Look up a risk, surfacing a miss as an error
    pub fn risk(&self, id: Uuid) -> GrcResult<Risk> {
        self.risks
            .get(id)
            .ok_or_else(|| GrcError::NotFound(format!("risk {id}")))
    }

    /// Synthesize a risk from an unresolved finding: severity maps onto
    /// the impact factor, likelihood starts mid-scale pending assessment.
    pub fn raise_risk_from_finding(&self, finding: &Finding) -> GrcResult<Uuid> {
        let impact = match finding.severity {
            FindingSeverity::Critical => 5,
            FindingSeverity::High => 4,
            FindingSeverity::Medium => 3,
            FindingSeverity::Low => 2,
            FindingSeverity::Informational => 1,
        };
        let mut risk = Risk::new(&finding.title, RiskCategory::Security, 3, impact)?;
        risk.origin_source = Some(finding.source.clone());
        Ok(self.risks.add(risk))
    }

    /// Generate the executive summary report
    pub fn executive_summary(&self, checks: &[WeightedCheck]) -> GrcResult<ExecutiveSummary> {
        ReportGenerator::executive_summary(self, checks)
    }
}

impl Default for PostureEngine {
    fn default() -> Self {
        Self::new()
    }
}
