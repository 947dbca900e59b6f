use serde::Serialize;

/// The risk level assigned to a device after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    /// Classify a device risk score against the configured thresholds.
    #[must_use]
    pub fn classify(score: f64, medium_threshold: f64, high_threshold: f64) -> Self {
        if score >= high_threshold {
            Self::High
        } else if score >= medium_threshold {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl core::fmt::Display for Risk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW RISK"),
            Self::Medium => write!(f, "MEDIUM RISK"),
            Self::High => write!(f, "HIGH RISK"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Risk::classify(0.0, 30.0, 60.0), Risk::Low);
        assert_eq!(Risk::classify(29.9, 30.0, 60.0), Risk::Low);
        assert_eq!(Risk::classify(30.0, 30.0, 60.0), Risk::Medium);
        assert_eq!(Risk::classify(60.0, 30.0, 60.0), Risk::High);
        assert_eq!(Risk::classify(100.0, 30.0, 60.0), Risk::High);
    }

    #[test]
    fn test_ordering() {
        assert!(Risk::Low < Risk::Medium);
        assert!(Risk::Medium < Risk::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(Risk::High.to_string(), "HIGH RISK");
    }
}
