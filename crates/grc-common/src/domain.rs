//! Validated value objects shared across the scoring crates.
//!
//! Risk factors are constructed through validating constructors so that a
//! stored record can never hold an out-of-range value; consumers get the
//! raw integer back through `value()`.

use crate::error::{GrcError, GrcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive bounds for risk factors (likelihood and impact)
pub const FACTOR_MIN: u8 = 1;
/// Upper bound for risk factors
pub const FACTOR_MAX: u8 = 5;

/// Sentinel domain key for controls with no domain assigned
pub const GENERAL_DOMAIN: &str = "General";

/// Likelihood of a risk materializing, 1-5 (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Likelihood(u8);

impl Likelihood {
    /// Create a likelihood with range validation
    pub fn new(value: u8) -> GrcResult<Self> {
        check_factor(value, "likelihood")?;
        Ok(Self(value))
    }

    /// Get inner value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Impact of a risk materializing, 1-5 (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Impact(u8);

impl Impact {
    /// Create an impact with range validation
    pub fn new(value: u8) -> GrcResult<Self> {
        check_factor(value, "impact")?;
        Ok(Self(value))
    }

    /// Get inner value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_factor(value: u8, name: &str) -> GrcResult<()> {
    if !(FACTOR_MIN..=FACTOR_MAX).contains(&value) {
        return Err(GrcError::InvalidArgument(format!(
            "{name} must be in [{FACTOR_MIN},{FACTOR_MAX}], got {value}"
        )));
    }
    Ok(())
}

/// Normalize a raw grouping key: empty or whitespace-only keys collapse to
/// the `"General"` sentinel.
pub fn domain_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        GENERAL_DOMAIN.to_string()
    } else {
        trimmed.to_string()
    }
}
