//! Threshold classification
//!
//! Maps a numeric score onto an ordered band table, scanning from the
//! highest threshold downward. Thresholds are inclusive on the lower
//! bound; a score below every threshold resolves to the lowest tier, so
//! classification is total.

/// A single (threshold, label) band
#[derive(Debug, Clone, Copy)]
pub struct Band {
    /// Minimum score for this band, inclusive
    pub threshold: f64,
    /// Tier label
    pub label: &'static str,
}

/// Risk severity bands over the 1-25 likelihood x impact score
pub const RISK_SEVERITY_BANDS: &[Band] = &[
    Band { threshold: 20.0, label: "Critical" },
    Band { threshold: 12.0, label: "High" },
    Band { threshold: 6.0, label: "Medium" },
    Band { threshold: 0.0, label: "Low" },
];

/// Letter-grade bands over the 0-100 security posture score
pub const GRADE_BANDS: &[Band] = &[
    Band { threshold: 85.0, label: "A" },
    Band { threshold: 70.0, label: "B" },
    Band { threshold: 50.0, label: "C" },
    Band { threshold: 30.0, label: "D" },
    Band { threshold: 0.0, label: "F" },
];

/// Classify a score against a band table.
///
/// Bands must be ordered by descending threshold; the last band doubles
/// as the fallback for scores below every threshold.
pub fn classify(score: f64, bands: &[Band]) -> &'static str {
    for band in bands {
        if score >= band.threshold {
            return band.label;
        }
    }
    bands.last().map(|b| b.label).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_bands() {
        assert_eq!(classify(25.0, RISK_SEVERITY_BANDS), "Critical");
        assert_eq!(classify(20.0, RISK_SEVERITY_BANDS), "Critical");
        assert_eq!(classify(19.0, RISK_SEVERITY_BANDS), "High");
        assert_eq!(classify(12.0, RISK_SEVERITY_BANDS), "High");
        assert_eq!(classify(6.0, RISK_SEVERITY_BANDS), "Medium");
        assert_eq!(classify(5.0, RISK_SEVERITY_BANDS), "Low");
        assert_eq!(classify(1.0, RISK_SEVERITY_BANDS), "Low");
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(classify(100.0, GRADE_BANDS), "A");
        assert_eq!(classify(85.0, GRADE_BANDS), "A");
        assert_eq!(classify(84.9, GRADE_BANDS), "B");
        assert_eq!(classify(70.0, GRADE_BANDS), "B");
        assert_eq!(classify(50.0, GRADE_BANDS), "C");
        assert_eq!(classify(30.0, GRADE_BANDS), "D");
        assert_eq!(classify(29.9, GRADE_BANDS), "F");
        assert_eq!(classify(0.0, GRADE_BANDS), "F");
    }

    #[test]
    fn test_below_all_thresholds_falls_to_lowest_tier() {
        assert_eq!(classify(-10.0, GRADE_BANDS), "F");
        assert_eq!(classify(-1.0, RISK_SEVERITY_BANDS), "Low");
    }
}
