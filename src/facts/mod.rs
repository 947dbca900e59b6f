//! Device facts: the signals collected from a device and their validated snapshot.

mod dangerous_permission;
mod fact_set;
mod installed_app;
mod patch_date;
mod signals;

pub use dangerous_permission::DangerousPermission;
pub use fact_set::{FactSet, RawSignals};
pub use installed_app::{InstalledApp, count_dangerous_apps};
pub use patch_date::PatchDate;
pub(crate) use patch_date::{is_month, is_year};
pub use signals::{SignalCollector, StaticSignals};
