use crate::commands::working_dir;
use crate::config::Config;
use crate::facts::{FactSet, InstalledApp, StaticSignals};
use crate::membership::ReferenceMonth;
use crate::misc::{ColorMode, OutputFormat};
use crate::ranking::{Evaluator, Risk};
use crate::reports;
use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use std::fs;
use std::io::Write;

/// Log target for device evaluation
const LOG_TARGET: &str = "evaluate";

/// Exit code used by `--error-if-high-risk`
const HIGH_RISK_EXIT_CODE: i32 = 2;

#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    /// Android API level reported by the device
    #[arg(long, value_name = "LEVEL", allow_hyphen_values = true)]
    pub api_level: Option<i64>,

    /// Security patch level reported by the device
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub patch_date: Option<String>,

    /// Whether a secure device lock is set
    #[arg(long, value_name = "BOOL")]
    pub lock_enabled: Option<bool>,

    /// Whether root access is available
    #[arg(long, value_name = "BOOL")]
    pub root_available: Option<bool>,

    /// Number of non-system applications holding dangerous permissions
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    pub dangerous_apps: Option<i64>,

    /// JSON list of installed applications used to count dangerous apps
    #[arg(long, value_name = "PATH")]
    pub inventory: Option<Utf8PathBuf>,

    /// Month against which patch staleness is measured [default: current month]
    #[arg(long, value_name = "YYYY-MM")]
    pub reference_month: Option<ReferenceMonth>,

    /// Policy file [default: droid-posture.toml in the current directory, if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Exit with status 2 when the device is rated high risk
    #[arg(long)]
    pub error_if_high_risk: bool,
}

/// Evaluate a device and write the report, returning the process exit code.
pub fn evaluate_device(args: &EvaluateArgs, out: &mut impl Write) -> anyhow::Result<i32> {
    let config = Config::load(&working_dir()?, args.config.as_ref())?;
    for warning in config.warnings() {
        log::warn!(target: LOG_TARGET, "{warning}");
    }

    let signals = StaticSignals {
        api_level: args.api_level,
        patch_date: args.patch_date.clone(),
        lock_enabled: args.lock_enabled,
        root_available: args.root_available,
        dangerous_app_count: args.dangerous_apps,
        inventory: args.inventory.as_ref().map(load_inventory).transpose()?,
    };

    let facts = FactSet::collect(&signals).context("collecting device facts")?;
    let reference = args.reference_month.unwrap_or_else(ReferenceMonth::current);
    log::info!(
        target: LOG_TARGET,
        "Evaluating device with API level {} and security patch {} as of {reference}",
        facts.api_level(),
        facts.patch_date()
    );

    let evaluator = Evaluator::new(&config)?;
    let result = evaluator.evaluate(&facts, reference);
    log::debug!(
        target: LOG_TARGET,
        "NotLatestAPI={:.3} NotLatestDate={:.3} ApplicationSecurityRisk={:.3} AndroidSecurityRisk={:.3}",
        result.not_latest_api,
        result.not_latest_date,
        result.application_security_risk,
        result.android_security_risk
    );

    match args.format {
        OutputFormat::Console => reports::generate_console(&facts, reference, &result, args.color.use_colors(), out),
        OutputFormat::Json => reports::generate_json(&facts, reference, &result, out),
    }
    .context("writing the evaluation report")?;

    if args.error_if_high_risk && result.risk == Risk::High {
        return Ok(HIGH_RISK_EXIT_CODE);
    }

    Ok(0)
}

fn load_inventory(path: &Utf8PathBuf) -> anyhow::Result<Vec<InstalledApp>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading application inventory '{path}'"))?;
    let apps: Vec<InstalledApp> =
        serde_json::from_str(&text).with_context(|| format!("parsing application inventory '{path}'"))?;

    log::debug!(target: LOG_TARGET, "Loaded {} application(s) from '{path}'", apps.len());
    Ok(apps)
}
