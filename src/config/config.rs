use crate::config::{ApplicationRiskPolicy, RiskWeights};
use crate::{Error, Result};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Log target for configuration loading
const LOG_TARGET: &str = "config";

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "droid-posture.toml";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Newest API level considered current
    pub latest_known_api: u32,

    /// API levels behind the latest at which `NotLatestAPI` saturates
    pub api_gap_saturation: u32,

    /// Patch age in months at which `NotLatestDate` saturates
    pub patch_age_saturation_months: u32,

    /// Device risk at or above which a device is medium risk (0..100)
    pub medium_risk_threshold: f64,

    /// Device risk at or above which a device is high risk (0..100)
    pub high_risk_threshold: f64,

    pub weights: RiskWeights,

    pub applications: ApplicationRiskPolicy,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `droid-posture.toml` is looked up in `dir`; if it does not
    /// exist the embedded defaults are used.
    pub fn load(dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> anyhow::Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default policy");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).with_context(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).with_context(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate().with_context(|| format!("validating configuration file '{final_path}'"))?;

        log::info!(target: LOG_TARGET, "Loaded policy from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> anyhow::Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).with_context(|| format!("writing default configuration to '{output_path}'"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// Rejects values that would break the [0, 100] risk range, the ordering of the risk
    /// thresholds, or the monotonicity of the risk in each signal.
    pub fn validate(&self) -> Result<()> {
        if self.latest_known_api == 0 {
            return Err(Error::InvalidPolicy("latest_known_api must be at least 1".to_string()));
        }

        if self.api_gap_saturation == 0 {
            return Err(Error::InvalidPolicy("api_gap_saturation must be at least 1".to_string()));
        }

        if self.patch_age_saturation_months == 0 {
            return Err(Error::InvalidPolicy("patch_age_saturation_months must be at least 1".to_string()));
        }

        if !(0.0..=100.0).contains(&self.medium_risk_threshold) {
            return Err(Error::InvalidPolicy(format!(
                "medium_risk_threshold must be between 0 and 100, got {}",
                self.medium_risk_threshold
            )));
        }

        if !(0.0..=100.0).contains(&self.high_risk_threshold) {
            return Err(Error::InvalidPolicy(format!(
                "high_risk_threshold must be between 0 and 100, got {}",
                self.high_risk_threshold
            )));
        }

        if self.medium_risk_threshold >= self.high_risk_threshold {
            return Err(Error::InvalidPolicy(format!(
                "medium_risk_threshold ({}) must be less than high_risk_threshold ({})",
                self.medium_risk_threshold, self.high_risk_threshold
            )));
        }

        self.weights.validate()?;
        self.applications.validate()
    }

    /// Non-fatal observations about the policy, e.g. weights that can exceed the risk ceiling.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let max_total = self.weights.max_total();
        if max_total > 100.0 {
            warnings.push(format!(
                "weights sum to {max_total}; device risk will be clamped at 100 and some signals will stop affecting the score"
            ));
        }

        if max_total < self.high_risk_threshold {
            warnings.push(format!(
                "weights sum to {max_total}, below high_risk_threshold ({}); no device can be rated high risk",
                self.high_risk_threshold
            ));
        }

        warnings
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
