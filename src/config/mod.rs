#[expect(clippy::module_inception, reason = "I like it this way")]
mod config;
mod weights;

pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use weights::{ApplicationRiskPolicy, RiskWeights};
