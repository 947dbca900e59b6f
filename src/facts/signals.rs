//! The seam between platform-specific signal collection and fact construction.

use crate::facts::{InstalledApp, count_dangerous_apps};
use anyhow::{Context, anyhow};

/// Source of the five device signals.
///
/// Implementations talk to the platform (build properties, keyguard, package manager, a
/// root probe); any failure is reported as an error rather than a default value.
pub trait SignalCollector {
    fn api_level(&self) -> anyhow::Result<i64>;

    /// Security patch level as reported by the platform, formatted `YYYY-MM-DD`.
    fn patch_date(&self) -> anyhow::Result<String>;

    fn lock_enabled(&self) -> anyhow::Result<bool>;

    fn root_available(&self) -> anyhow::Result<bool>;

    /// Number of non-system applications holding at least one dangerous permission.
    fn dangerous_app_count(&self) -> anyhow::Result<i64>;
}

/// Signals supplied up front, e.g. from the command line or a device report.
///
/// A signal left as `None` is treated as unavailable. When an application inventory is
/// present and no explicit count was given, the count is derived from the inventory.
#[derive(Debug, Clone, Default)]
pub struct StaticSignals {
    pub api_level: Option<i64>,
    pub patch_date: Option<String>,
    pub lock_enabled: Option<bool>,
    pub root_available: Option<bool>,
    pub dangerous_app_count: Option<i64>,
    pub inventory: Option<Vec<InstalledApp>>,
}

fn missing(signal: &str) -> anyhow::Error {
    anyhow!("no value was provided for {signal}")
}

impl SignalCollector for StaticSignals {
    fn api_level(&self) -> anyhow::Result<i64> {
        self.api_level.ok_or_else(|| missing("the API level"))
    }

    fn patch_date(&self) -> anyhow::Result<String> {
        self.patch_date.clone().ok_or_else(|| missing("the security patch date"))
    }

    fn lock_enabled(&self) -> anyhow::Result<bool> {
        self.lock_enabled.ok_or_else(|| missing("the device lock status"))
    }

    fn root_available(&self) -> anyhow::Result<bool> {
        self.root_available.ok_or_else(|| missing("the root access status"))
    }

    fn dangerous_app_count(&self) -> anyhow::Result<i64> {
        if let Some(count) = self.dangerous_app_count {
            return Ok(count);
        }

        let apps = self.inventory.as_ref().ok_or_else(|| missing("the dangerous application count"))?;
        i64::try_from(count_dangerous_apps(apps)).context("counting applications in the inventory")
    }
}
