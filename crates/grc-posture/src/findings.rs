//! Finding Register
//!
//! Findings are detected issues from scans (VAPT, cloud posture, code
//! scanning) or manual reports. The UI suggests an open -> in progress ->
//! resolved flow but nothing enforces it; status is plain user data here.

use crate::grouping::{group_and_count, GroupCount};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingSeverity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}

impl fmt::Display for FindingSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Informational => "Informational",
        };
        write!(f, "{name}")
    }
}

/// Finding status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingStatus {
    Open,
    InProgress,
    Resolved,
    Accepted,
}

/// A detected security issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: Uuid,
    pub title: String,
    pub severity: FindingSeverity,
    pub status: FindingStatus,
    /// Origin system tag, e.g. "vapt", "aws", "github"
    pub source: String,
    pub detected_at: chrono::DateTime<chrono::Utc>,
}

impl Finding {
    pub fn new(title: &str, severity: FindingSeverity, source: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            severity,
            status: FindingStatus::Open,
            source: source.to_string(),
            detected_at: chrono::Utc::now(),
        }
    }
}

/// Counts per severity bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
    /// Findings not yet resolved or accepted
    pub unresolved: usize,
}

/// Bucket a snapshot of findings by severity
pub fn summarize(findings: &[Finding]) -> FindingSummary {
    let mut summary = FindingSummary {
        total: findings.len(),
        ..Default::default()
    };
    for finding in findings {
        match finding.severity {
            FindingSeverity::Critical => summary.critical += 1,
            FindingSeverity::High => summary.high += 1,
            FindingSeverity::Medium => summary.medium += 1,
            FindingSeverity::Low => summary.low += 1,
            FindingSeverity::Informational => summary.informational += 1,
        }
        if matches!(
            finding.status,
            FindingStatus::Open | FindingStatus::InProgress
        ) {
            summary.unresolved += 1;
        }
    }
    summary
}

/// Finding register
pub struct FindingRegister {
    findings: Arc<RwLock<Vec<Finding>>>,
}

impl FindingRegister {
    pub fn new() -> Self {
        Self {
            findings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Record a finding
    pub fn add(&self, finding: Finding) -> Uuid {
        let id = finding.id;
        tracing::debug!(
            finding = %finding.title,
            severity = %finding.severity,
            source = %finding.source,
            "recording finding"
        );
        self.findings.write().push(finding);
        id
    }

    /// All findings
    pub fn all(&self) -> Vec<Finding> {
        self.findings.read().clone()
    }

    /// Findings still open or in progress
    pub fn unresolved(&self) -> Vec<Finding> {
        self.findings
            .read()
            .iter()
            .filter(|f| matches!(f.status, FindingStatus::Open | FindingStatus::InProgress))
            .cloned()
            .collect()
    }

    /// Findings from one origin system
    pub fn by_source(&self, source: &str) -> Vec<Finding> {
        self.findings
            .read()
            .iter()
            .filter(|f| f.source == source)
            .cloned()
            .collect()
    }

    /// Update finding status
    pub fn set_status(&self, id: Uuid, status: FindingStatus) {
        if let Some(finding) = self.findings.write().iter_mut().find(|f| f.id == id) {
            finding.status = status;
        }
    }

    /// Severity bucket summary
    pub fn summary(&self) -> FindingSummary {
        summarize(&self.all())
    }

    /// Per-source breakdown with critical and resolved counts
    pub fn by_source_summary(&self) -> Vec<GroupCount> {
        let findings = self.all();
        group_and_count(
            &findings,
            |f| f.source.clone(),
            &[
                ("critical", &|f: &Finding| {
                    f.severity == FindingSeverity::Critical
                }),
                ("resolved", &|f: &Finding| {
                    f.status == FindingStatus::Resolved
                }),
            ],
        )
    }
}

impl Default for FindingRegister {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_buckets() {
        let register = FindingRegister::new();
        register.add(Finding::new("rce", FindingSeverity::Critical, "vapt"));
        register.add(Finding::new("xss", FindingSeverity::High, "vapt"));
        register.add(Finding::new("open bucket", FindingSeverity::High, "aws"));
        register.add(Finding::new("banner", FindingSeverity::Informational, "vapt"));

        let summary = register.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.informational, 1);
        assert_eq!(summary.unresolved, 4);
    }

    #[test]
    fn test_resolution_updates_unresolved() {
        let register = FindingRegister::new();
        let id = register.add(Finding::new("rce", FindingSeverity::Critical, "vapt"));
        register.set_status(id, FindingStatus::Resolved);

        assert_eq!(register.summary().unresolved, 0);
        assert!(register.unresolved().is_empty());
    }

    #[test]
    fn test_by_source_summary() {
        let register = FindingRegister::new();
        register.add(Finding::new("a", FindingSeverity::Critical, "vapt"));
        register.add(Finding::new("b", FindingSeverity::Low, "aws"));
        register.add(Finding::new("c", FindingSeverity::Medium, "aws"));

        let groups = register.by_source_summary();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "aws");
        assert_eq!(groups[0].total, 2);
        assert_eq!(groups[1].key, "vapt");
        assert_eq!(groups[1].counts["critical"], 1);
    }
}
