//! Controls and compliance aggregation
//!
//! A control is a single compliance requirement an organization must
//! satisfy. Controls partition into exactly four status buckets; controls
//! marked not-applicable are excluded from the scoring denominator so they
//! neither help nor hurt the score. Zero eligible controls scores 100 by
//! convention: nothing to assess is treated as fully compliant.

use grc_common::domain_key;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Control status. Transitions are user-driven and unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlStatus {
    Verified,
    InProgress,
    NotStarted,
    NotApplicable,
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Verified => "Verified",
            Self::InProgress => "In Progress",
            Self::NotStarted => "Not Started",
            Self::NotApplicable => "Not Applicable",
        };
        write!(f, "{name}")
    }
}

/// A compliance requirement instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    /// Unique within an organization
    pub id: String,
    /// Grouping key, e.g. "Access Control"
    pub domain: String,
    /// Finer grouping within the domain
    pub category: String,
    pub status: ControlStatus,
    pub evidence_count: u32,
}

impl Control {
    pub fn new(id: &str, domain: &str, category: &str, status: ControlStatus) -> Self {
        Self {
            id: id.to_string(),
            domain: domain.to_string(),
            category: category.to_string(),
            status,
            evidence_count: 0,
        }
    }
}

/// Status partition counts. Every control falls into exactly one bucket,
/// so the four counts always sum to the input size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCounts {
    pub verified: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub not_applicable: usize,
}

impl ComplianceCounts {
    /// Total controls counted
    pub fn total(&self) -> usize {
        self.verified + self.in_progress + self.not_started + self.not_applicable
    }

    /// Controls in the scoring denominator
    pub fn eligible(&self) -> usize {
        self.total() - self.not_applicable
    }

    /// Compliance percentage, 0-100. Zero eligible controls scores 100.
    pub fn score(&self) -> u8 {
        let eligible = self.eligible();
        if eligible == 0 {
            return 100;
        }
        ((self.verified as f64 / eligible as f64) * 100.0).round() as u8
    }
}

/// Aggregated compliance posture for a set of controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub counts: ComplianceCounts,
    pub score: u8,
}

/// Per-domain compliance posture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCompliance {
    pub domain: String,
    pub counts: ComplianceCounts,
    pub score: u8,
}

fn count(controls: impl Iterator<Item = ControlStatus>) -> ComplianceCounts {
    let mut counts = ComplianceCounts::default();
    for status in controls {
        match status {
            ControlStatus::Verified => counts.verified += 1,
            ControlStatus::InProgress => counts.in_progress += 1,
            ControlStatus::NotStarted => counts.not_started += 1,
            ControlStatus::NotApplicable => counts.not_applicable += 1,
        }
    }
    counts
}

/// Aggregate compliance over a snapshot of controls, optionally filtered
/// to a single domain.
pub fn aggregate(controls: &[Control], domain: Option<&str>) -> ComplianceSummary {
    let counts = match domain {
        Some(d) => count(
            controls
                .iter()
                .filter(|c| domain_key(&c.domain) == domain_key(d))
                .map(|c| c.status),
        ),
        None => count(controls.iter().map(|c| c.status)),
    };
    ComplianceSummary {
        counts,
        score: counts.score(),
    }
}

/// Aggregate compliance independently per domain.
///
/// Controls with an empty domain land in the `"General"` bucket. Output
/// is ordered by domain name, lexicographically ascending.
pub fn aggregate_by_domain(controls: &[Control]) -> Vec<DomainCompliance> {
    let mut buckets: BTreeMap<String, Vec<ControlStatus>> = BTreeMap::new();
    for control in controls {
        buckets
            .entry(domain_key(&control.domain))
            .or_default()
            .push(control.status);
    }

    buckets
        .into_iter()
        .map(|(domain, statuses)| {
            let counts = count(statuses.into_iter());
            DomainCompliance {
                domain,
                counts,
                score: counts.score(),
            }
        })
        .collect()
}

/// Control register
pub struct ControlRegister {
    controls: Arc<RwLock<HashMap<String, Control>>>,
}

impl ControlRegister {
    pub fn new() -> Self {
        Self {
            controls: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace a control
    pub fn add(&self, control: Control) {
        self.controls
            .write()
            .insert(control.id.clone(), control);
    }

    /// Bulk-load controls, e.g. when a framework is assigned
    pub fn load(&self, controls: impl IntoIterator<Item = Control>) {
        let mut guard = self.controls.write();
        let mut loaded = 0usize;
        for control in controls {
            guard.insert(control.id.clone(), control);
            loaded += 1;
        }
        tracing::info!("Loaded {} controls", loaded);
    }

    /// Get control by id
    pub fn get(&self, id: &str) -> Option<Control> {
        self.controls.read().get(id).cloned()
    }

    /// Get all controls
    pub fn all(&self) -> Vec<Control> {
        self.controls.read().values().cloned().collect()
    }

    /// Record a user response against a control. Controls are never
    /// hard-deleted; retirement happens through status.
    pub fn update(&self, id: &str, f: impl FnOnce(&mut Control)) {
        if let Some(control) = self.controls.write().get_mut(id) {
            f(control);
        }
    }

    /// Compliance posture over the register
    pub fn summary(&self, domain: Option<&str>) -> ComplianceSummary {
        aggregate(&self.all(), domain)
    }

    /// Per-domain compliance posture
    pub fn by_domain(&self) -> Vec<DomainCompliance> {
        aggregate_by_domain(&self.all())
    }
}

impl Default for ControlRegister {
    fn default() -> Self {
        Self::new()
    }
}
