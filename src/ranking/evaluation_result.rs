use crate::ranking::Risk;
use serde::Serialize;

/// Outcome of evaluating one fact set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Overall device risk in [0, 100]
    pub android_security_risk: f64,

    /// Risk attributable to applications holding dangerous permissions
    pub application_security_risk: f64,

    /// Degree of API obsolescence
    pub not_latest_api: f64,

    /// Degree of security patch staleness
    pub not_latest_date: f64,

    pub lock_set_status: bool,
    pub root_access_status: bool,

    /// API level the device reported
    pub api_level: u32,

    pub risk: Risk,
}

impl EvaluationResult {
    /// Security rating shown to the user: the complement of the device risk.
    #[must_use]
    pub fn rating(&self) -> f64 {
        100.0 - self.android_security_risk
    }

    /// Rating on a ten point scale, truncated to whole rating points first.
    #[must_use]
    pub fn score_out_of_ten(&self) -> f64 {
        self.rating().floor() / 10.0
    }

    /// Whether every signal is fully compliant.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.not_latest_api <= 0.0
            && self.not_latest_date <= 0.0
            && self.lock_set_status
            && self.root_access_status
            && self.application_security_risk <= 0.0
    }
}
