use crate::facts::{PatchDate, SignalCollector};
use crate::{Error, Result};
use serde::Serialize;

/// Raw signal values as handed over by a collector, before domain checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSignals {
    pub api_level: i64,
    pub patch_date: String,
    pub lock_enabled: bool,
    pub root_available: bool,
    pub dangerous_app_count: i64,
}

/// Immutable snapshot of the device signals used as evaluator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactSet {
    api_level: u32,
    patch_date: PatchDate,
    lock_enabled: bool,
    root_available: bool,
    dangerous_app_count: u32,
}

impl FactSet {
    /// Validate raw signals and build a fact set.
    ///
    /// Fails with [`Error::MalformedPatchDate`] when the patch string cannot be parsed and with
    /// [`Error::InvalidFact`] when a value lies outside its domain.
    pub fn new(raw: &RawSignals) -> Result<Self> {
        let api_level = u32::try_from(raw.api_level)
            .ok()
            .filter(|level| *level >= 1)
            .ok_or_else(|| Error::invalid_fact("api_level", format!("{} is not a valid API level", raw.api_level)))?;

        let dangerous_app_count = u32::try_from(raw.dangerous_app_count).map_err(|_err| {
            Error::invalid_fact(
                "dangerous_app_count",
                format!("{} is not a valid application count", raw.dangerous_app_count),
            )
        })?;

        Ok(Self {
            api_level,
            patch_date: raw.patch_date.parse()?,
            lock_enabled: raw.lock_enabled,
            root_available: raw.root_available,
            dangerous_app_count,
        })
    }

    /// Query every signal from the collector and build a fact set.
    ///
    /// A signal the collector cannot provide fails construction with
    /// [`Error::SignalUnavailable`].
    pub fn collect(collector: &impl SignalCollector) -> Result<Self> {
        let unavailable = |signal: &'static str| move |source: anyhow::Error| Error::SignalUnavailable { signal, source };

        let raw = RawSignals {
            api_level: collector.api_level().map_err(unavailable("api_level"))?,
            patch_date: collector.patch_date().map_err(unavailable("patch_date"))?,
            lock_enabled: collector.lock_enabled().map_err(unavailable("lock_enabled"))?,
            root_available: collector.root_available().map_err(unavailable("root_available"))?,
            dangerous_app_count: collector.dangerous_app_count().map_err(unavailable("dangerous_app_count"))?,
        };

        Self::new(&raw)
    }

    #[must_use]
    pub const fn api_level(&self) -> u32 {
        self.api_level
    }

    #[must_use]
    pub const fn patch_date(&self) -> PatchDate {
        self.patch_date
    }

    #[must_use]
    pub const fn lock_enabled(&self) -> bool {
        self.lock_enabled
    }

    #[must_use]
    pub const fn root_available(&self) -> bool {
        self.root_available
    }

    #[must_use]
    pub const fn dangerous_app_count(&self) -> u32 {
        self.dangerous_app_count
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::facts::StaticSignals;

    fn raw() -> RawSignals {
        RawSignals {
            api_level: 33,
            patch_date: "2024-06-01".to_string(),
            lock_enabled: true,
            root_available: false,
            dangerous_app_count: 2,
        }
    }

    #[test]
    fn test_new_valid() {
        let facts = FactSet::new(&raw()).unwrap();
        assert_eq!(facts.api_level(), 33);
        assert_eq!(facts.patch_date(), PatchDate::new(2024, 6).unwrap());
        assert!(facts.lock_enabled());
        assert!(!facts.root_available());
        assert_eq!(facts.dangerous_app_count(), 2);
    }

    #[test]
    fn test_new_rejects_zero_api_level() {
        let err = FactSet::new(&RawSignals { api_level: 0, ..raw() }).unwrap_err();
        assert!(matches!(err, Error::InvalidFact { fact: "api_level", .. }));
    }

    #[test]
    fn test_new_rejects_negative_count() {
        let err = FactSet::new(&RawSignals {
            dangerous_app_count: -1,
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidFact { fact: "dangerous_app_count", .. }));
    }

    #[test]
    fn test_new_rejects_malformed_patch_date() {
        let err = FactSet::new(&RawSignals {
            patch_date: "2024/06/01".to_string(),
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, Error::MalformedPatchDate { .. }));
    }

    #[test]
    fn test_collect_reports_unavailable_signal() {
        let signals = StaticSignals {
            api_level: Some(33),
            patch_date: Some("2024-06-01".to_string()),
            lock_enabled: None,
            root_available: Some(true),
            dangerous_app_count: Some(0),
            inventory: None,
        };
        let err = FactSet::collect(&signals).unwrap_err();
        assert!(matches!(err, Error::SignalUnavailable { signal: "lock_enabled", .. }));
    }

    #[test]
    fn test_collect_complete_signals() {
        let signals = StaticSignals {
            api_level: Some(30),
            patch_date: Some("2021-01-05".to_string()),
            lock_enabled: Some(false),
            root_available: Some(false),
            dangerous_app_count: Some(5),
            inventory: None,
        };
        let facts = FactSet::collect(&signals).unwrap();
        assert_eq!(facts.api_level(), 30);
        assert_eq!(facts.patch_date().year(), 2021);
        assert_eq!(facts.dangerous_app_count(), 5);
    }
}
