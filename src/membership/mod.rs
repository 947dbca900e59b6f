//! Fuzzy membership functions for the continuous device signals.
//!
//! Each function yields a degree of non-compliance: 0 for a compliant signal, growing
//! proportionally with the distance from the reference and saturating at 1.

mod reference_month;

pub use reference_month::ReferenceMonth;

use crate::facts::PatchDate;

/// Degree to which `api_level` belongs to `NotLatestAPI`.
///
/// Zero when the device runs `latest_known_api` or newer; otherwise the gap divided by
/// `saturation_gap`, capped at 1.
#[must_use]
pub fn not_latest_api(api_level: u32, latest_known_api: u32, saturation_gap: u32) -> f64 {
    if api_level >= latest_known_api {
        return 0.0;
    }

    let gap = latest_known_api - api_level;
    degree(f64::from(gap), f64::from(saturation_gap))
}

/// Degree to which `patch` belongs to `NotLatestDate` as of `reference`.
///
/// Zero when the patch month is at or after the reference month; otherwise the number of
/// elapsed months divided by `saturation_months`, capped at 1.
#[must_use]
pub fn not_latest_date(patch: PatchDate, reference: ReferenceMonth, saturation_months: u32) -> f64 {
    let elapsed = reference.month_index() - patch.month_index();
    if elapsed <= 0 {
        return 0.0;
    }

    #[expect(clippy::cast_precision_loss, reason = "month counts are far below 2^52")]
    let elapsed = elapsed as f64;
    degree(elapsed, f64::from(saturation_months))
}

fn degree(distance: f64, saturation: f64) -> f64 {
    if saturation <= 0.0 {
        return 1.0;
    }

    (distance / saturation).min(1.0)
}
