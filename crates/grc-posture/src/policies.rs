//! Policy Register
//!
//! Governance documents with an approval lifecycle and acknowledgement
//! tracking. Approval side effects on control status belong to the
//! surrounding application, not this crate.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Draft,
    UnderReview,
    Approved,
    Archived,
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft => "Draft",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Archived => "Archived",
        };
        write!(f, "{name}")
    }
}

/// A governance document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: Uuid,
    pub name: String,
    pub status: PolicyStatus,
    /// Members who have acknowledged the policy
    pub acknowledged_count: u32,
    /// Members expected to acknowledge it
    pub member_count: u32,
}

impl Policy {
    pub fn new(name: &str, member_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: PolicyStatus::Draft,
            acknowledged_count: 0,
            member_count,
        }
    }

    /// Adoption percentage, 0-100. Zero members adopts at 0;
    /// acknowledgements beyond the member total (stale roster) cap at 100.
    pub fn adoption_percent(&self) -> u8 {
        percent(self.acknowledged_count, self.member_count)
    }
}

/// Adoption summary across the register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionSummary {
    pub total_policies: usize,
    pub approved: usize,
    pub acknowledged: u32,
    pub members: u32,
    /// Acknowledgements over total expected, 0-100
    pub adoption_percent: u8,
}

/// Policy register
pub struct PolicyRegister {
    policies: Arc<RwLock<HashMap<Uuid, Policy>>>,
}

impl PolicyRegister {
    pub fn new() -> Self {
        Self {
            policies: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add policy
    pub fn add(&self, policy: Policy) -> Uuid {
        let id = policy.id;
        self.policies.write().insert(id, policy);
        id
    }

    /// Get policy
    pub fn get(&self, id: Uuid) -> Option<Policy> {
        self.policies.read().get(&id).cloned()
    }

    /// All policies
    pub fn all(&self) -> Vec<Policy> {
        self.policies.read().values().cloned().collect()
    }

    /// Approved policies
    pub fn approved(&self) -> Vec<Policy> {
        self.policies
            .read()
            .values()
            .filter(|p| p.status == PolicyStatus::Approved)
            .cloned()
            .collect()
    }

    /// Update policy in place
    pub fn update(&self, id: Uuid, f: impl FnOnce(&mut Policy)) {
        if let Some(policy) = self.policies.write().get_mut(&id) {
            f(policy);
        }
    }

    /// Adoption summary across all policies
    pub fn adoption_summary(&self) -> AdoptionSummary {
        let policies = self.policies.read();
        let mut summary = AdoptionSummary {
            total_policies: policies.len(),
            ..Default::default()
        };
        for policy in policies.values() {
            if policy.status == PolicyStatus::Approved {
                summary.approved += 1;
            }
            summary.acknowledged += policy.acknowledged_count;
            summary.members += policy.member_count;
        }
        summary.adoption_percent = percent(summary.acknowledged, summary.members);
        summary
    }
}

/// Percentage capped to 0-100. Zero denominator yields 0.
fn percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(whole)) * 100.0)
        .round()
        .min(100.0) as u8
}

impl Default for PolicyRegister {
    fn default() -> Self {
        Self::new()
    }
}
