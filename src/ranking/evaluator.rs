//! Orchestrates membership and aggregation for one fact set.

use crate::config::Config;
use crate::facts::FactSet;
use crate::membership::{ReferenceMonth, not_latest_api, not_latest_date};
use crate::ranking::{AggregateInputs, EvaluationResult, Risk, RiskAggregator};
use crate::Result;

/// Evaluates fact sets against a validated policy.
///
/// Holds only the immutable policy, so one evaluator can be shared across threads and
/// reused for any number of devices.
#[derive(Debug, Clone)]
pub struct Evaluator {
    latest_known_api: u32,
    api_gap_saturation: u32,
    patch_age_saturation_months: u32,
    medium_risk_threshold: f64,
    high_risk_threshold: f64,
    aggregator: RiskAggregator,
}

impl Evaluator {
    /// Create an evaluator, validating the policy first.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            latest_known_api: config.latest_known_api,
            api_gap_saturation: config.api_gap_saturation,
            patch_age_saturation_months: config.patch_age_saturation_months,
            medium_risk_threshold: config.medium_risk_threshold,
            high_risk_threshold: config.high_risk_threshold,
            aggregator: RiskAggregator::new(config.weights, config.applications)?,
        })
    }

    /// Evaluate a device as of `reference`.
    ///
    /// Deterministic: the same facts and reference month always produce the same result.
    #[must_use]
    pub fn evaluate(&self, facts: &FactSet, reference: ReferenceMonth) -> EvaluationResult {
        let api_degree = not_latest_api(facts.api_level(), self.latest_known_api, self.api_gap_saturation);
        let date_degree = not_latest_date(facts.patch_date(), reference, self.patch_age_saturation_months);

        let inputs = AggregateInputs::from_membership(
            api_degree,
            date_degree,
            facts.lock_enabled(),
            facts.root_available(),
            facts.dangerous_app_count(),
        );
        let scores = self.aggregator.aggregate(&inputs);

        EvaluationResult {
            android_security_risk: scores.android_security_risk,
            application_security_risk: scores.application_security_risk,
            not_latest_api: api_degree,
            not_latest_date: date_degree,
            lock_set_status: facts.lock_enabled(),
            root_access_status: facts.root_available(),
            api_level: facts.api_level(),
            risk: Risk::classify(scores.android_security_risk, self.medium_risk_threshold, self.high_risk_threshold),
        }
    }
}
