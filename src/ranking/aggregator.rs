//! Weighted combination of membership degrees and compliance flags into risk scores.

use crate::config::{ApplicationRiskPolicy, RiskWeights};
use crate::{Error, Result};

/// Upper bound of the device risk.
pub const MAX_DEVICE_RISK: f64 = 100.0;

/// Inputs to the aggregation rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateInputs {
    not_latest_api: f64,
    not_latest_date: f64,
    lock_enabled: bool,
    root_available: bool,
    dangerous_app_count: u32,
}

impl AggregateInputs {
    /// Check the inputs against their domains.
    ///
    /// Degrees must be finite and non-negative; anything else fails with
    /// [`Error::InvalidFact`] instead of being clamped.
    pub fn new(
        not_latest_api: f64,
        not_latest_date: f64,
        lock_enabled: bool,
        root_available: bool,
        dangerous_app_count: u32,
    ) -> Result<Self> {
        check_degree("not_latest_api", not_latest_api)?;
        check_degree("not_latest_date", not_latest_date)?;

        Ok(Self {
            not_latest_api,
            not_latest_date,
            lock_enabled,
            root_available,
            dangerous_app_count,
        })
    }

    /// Inputs whose degrees come straight from the membership functions, which never produce
    /// negative or non-finite values.
    pub(crate) const fn from_membership(
        not_latest_api: f64,
        not_latest_date: f64,
        lock_enabled: bool,
        root_available: bool,
        dangerous_app_count: u32,
    ) -> Self {
        Self {
            not_latest_api,
            not_latest_date,
            lock_enabled,
            root_available,
            dangerous_app_count,
        }
    }
}

fn check_degree(fact: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_fact(fact, format!("degree {value} must be a finite non-negative number")))
    }
}

/// The two aggregate scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScores {
    pub android_security_risk: f64,
    pub application_security_risk: f64,
}

/// Applies the fixed rule weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAggregator {
    weights: RiskWeights,
    applications: ApplicationRiskPolicy,
}

impl RiskAggregator {
    /// Create an aggregator, rejecting negative or non-finite weights and a non-positive
    /// application curve with [`Error::InvalidPolicy`].
    pub fn new(weights: RiskWeights, applications: ApplicationRiskPolicy) -> Result<Self> {
        weights.validate()?;
        applications.validate()?;

        Ok(Self { weights, applications })
    }

    /// Risk attributable to applications holding dangerous permissions.
    ///
    /// `max_risk * (1 - e^(-rate * count))`: zero without dangerous apps, each additional
    /// app adds less than the previous one, and the result never reaches `max_risk`.
    #[must_use]
    pub fn application_risk(&self, dangerous_app_count: u32) -> f64 {
        let exponent = -self.applications.per_app_rate * f64::from(dangerous_app_count);
        self.applications.max_risk * -exponent.exp_m1()
    }

    #[must_use]
    pub fn aggregate(&self, inputs: &AggregateInputs) -> RiskScores {
        let w = &self.weights;
        let application_security_risk = self.application_risk(inputs.dangerous_app_count);

        let mut total = w.api * inputs.not_latest_api + w.patch * inputs.not_latest_date;
        if !inputs.lock_enabled {
            total += w.lock_penalty;
        }
        if !inputs.root_available {
            total += w.root_penalty;
        }
        total += w.applications * (application_security_risk / self.applications.max_risk);

        RiskScores {
            android_security_risk: total.clamp(0.0, MAX_DEVICE_RISK),
            application_security_risk,
        }
    }
}
