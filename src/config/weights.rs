use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rule weights combining the membership degrees and flags into the device risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskWeights {
    /// Weight of the `NotLatestAPI` degree
    pub api: f64,

    /// Weight of the `NotLatestDate` degree
    pub patch: f64,

    /// Penalty applied when no device lock is set
    pub lock_penalty: f64,

    /// Penalty applied when root access is not available
    pub root_penalty: f64,

    /// Contribution of a saturated application risk
    pub applications: f64,
}

impl RiskWeights {
    pub(crate) fn validate(&self) -> Result<()> {
        let named = [
            ("weights.api", self.api),
            ("weights.patch", self.patch),
            ("weights.lock_penalty", self.lock_penalty),
            ("weights.root_penalty", self.root_penalty),
            ("weights.applications", self.applications),
        ];

        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidPolicy(format!("{name} must be a finite non-negative number, got {value}")));
            }
        }

        Ok(())
    }

    /// Largest device risk these weights can produce before clamping.
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.api + self.patch + self.lock_penalty + self.root_penalty + self.applications
    }
}

/// Saturating curve that turns a dangerous-app count into the application risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationRiskPolicy {
    pub per_app_rate: f64,
    pub max_risk: f64,
}

impl ApplicationRiskPolicy {
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.per_app_rate.is_finite() || self.per_app_rate <= 0.0 {
            return Err(Error::InvalidPolicy(format!(
                "applications.per_app_rate must be a finite positive number, got {}",
                self.per_app_rate
            )));
        }

        if !self.max_risk.is_finite() || self.max_risk <= 0.0 {
            return Err(Error::InvalidPolicy(format!(
                "applications.max_risk must be a finite positive number, got {}",
                self.max_risk
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn weights() -> RiskWeights {
        RiskWeights {
            api: 25.0,
            patch: 25.0,
            lock_penalty: 20.0,
            root_penalty: 10.0,
            applications: 20.0,
        }
    }

    #[test]
    fn test_valid_weights() {
        weights().validate().unwrap();
        assert!((weights().max_total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = RiskWeights { patch: -1.0, ..weights() };
        let err = w.validate().unwrap_err();
        assert!(err.to_string().contains("weights.patch"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let w = RiskWeights { api: f64::NAN, ..weights() };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_zero_weight_allowed() {
        let w = RiskWeights { root_penalty: 0.0, ..weights() };
        w.validate().unwrap();
    }

    #[test]
    fn test_application_policy_rejects_zero_rate() {
        let policy = ApplicationRiskPolicy {
            per_app_rate: 0.0,
            max_risk: 100.0,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_application_policy_rejects_infinite_cap() {
        let policy = ApplicationRiskPolicy {
            per_app_rate: 0.2,
            max_risk: f64::INFINITY,
        };
        assert!(policy.validate().is_err());
    }
}
