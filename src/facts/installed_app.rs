use crate::facts::DangerousPermission;
use serde::{Deserialize, Serialize};

/// An application reported by the package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstalledApp {
    pub package: String,

    /// Set for applications flagged as part of the system image.
    #[serde(default)]
    pub system: bool,

    /// Granted permissions, by short or manifest name.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl InstalledApp {
    /// Whether this app counts towards the dangerous-app total.
    #[must_use]
    pub fn is_dangerous(&self) -> bool {
        !self.system && DangerousPermission::any_in(self.permissions.iter().map(String::as_str))
    }
}

/// Count the non-system applications holding at least one dangerous permission.
pub fn count_dangerous_apps<'a>(apps: impl IntoIterator<Item = &'a InstalledApp>) -> usize {
    apps.into_iter().filter(|app| app.is_dangerous()).count()
}
