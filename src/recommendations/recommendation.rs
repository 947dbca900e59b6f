use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

/// What part of the device a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Platform,
    SecurityPatch,
    DeviceLock,
    RootAccess,
    Applications,
    Compliant,
}

/// A single remediation step, rendered for the user through [`Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    UpdateAndroidVersion { api_level: u32 },
    UpdateSecurityPatch,
    EnableDeviceLock,
    ObtainRootAccess,
    RestrictDangerousPermissions,
    NoActionRequired,
}

impl Recommendation {
    #[must_use]
    pub const fn category(self) -> RecommendationCategory {
        match self {
            Self::UpdateAndroidVersion { .. } => RecommendationCategory::Platform,
            Self::UpdateSecurityPatch => RecommendationCategory::SecurityPatch,
            Self::EnableDeviceLock => RecommendationCategory::DeviceLock,
            Self::ObtainRootAccess => RecommendationCategory::RootAccess,
            Self::RestrictDangerousPermissions => RecommendationCategory::Applications,
            Self::NoActionRequired => RecommendationCategory::Compliant,
        }
    }
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UpdateAndroidVersion { api_level } => {
                write!(f, "Your API Level is still {api_level}. Please update your Android version")
            }
            Self::UpdateSecurityPatch => {
                write!(f, "Your last security patch date is not recent. Please update Security Patch level")
            }
            Self::EnableDeviceLock => {
                write!(f, "Your device lock is not set. Please set your Device Lock for better security")
            }
            Self::ObtainRootAccess => write!(f, "You do not have root access. Please get Root Access"),
            Self::RestrictDangerousPermissions => write!(
                f,
                "You have applications which are granted dangerous permissions. Please disable dangerous permissions for installed apps"
            ),
            Self::NoActionRequired => write!(f, "No actions required!"),
        }
    }
}
