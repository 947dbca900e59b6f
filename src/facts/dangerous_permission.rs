use strum::EnumString;

/// Runtime permissions that expose sensitive data or capabilities.
///
/// An application holding any one of these counts towards the dangerous-app total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerousPermission {
    ReadCallLog,
    ReadContacts,
    Camera,
    BodySensors,
    SendSms,
    ReadSms,
}

impl DangerousPermission {
    /// Recognize a permission given either its short or its manifest name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix("android.permission.").unwrap_or(name);
        short.parse().ok()
    }

    /// Whether any of the given permission names is dangerous.
    pub fn any_in<'a>(names: impl IntoIterator<Item = &'a str>) -> bool {
        names.into_iter().any(|name| Self::from_name(name).is_some())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_covers_every_permission() {
        let names = ["READ_CALL_LOG", "READ_CONTACTS", "CAMERA", "BODY_SENSORS", "SEND_SMS", "READ_SMS"];
        for name in names {
            let manifest = format!("android.permission.{name}");
            assert!(DangerousPermission::from_name(&manifest).is_some(), "{manifest}");
        }
    }

    #[test]
    fn test_from_name_accepts_both_forms() {
        assert_eq!(DangerousPermission::from_name("SEND_SMS"), Some(DangerousPermission::SendSms));
        assert_eq!(
            DangerousPermission::from_name("android.permission.BODY_SENSORS"),
            Some(DangerousPermission::BodySensors)
        );
    }

    #[test]
    fn test_from_name_rejects_other_permissions() {
        assert_eq!(DangerousPermission::from_name("android.permission.INTERNET"), None);
        assert_eq!(DangerousPermission::from_name("camera"), None);
    }

    #[test]
    fn test_any_in() {
        assert!(DangerousPermission::any_in(["android.permission.INTERNET", "android.permission.READ_SMS"]));
        assert!(!DangerousPermission::any_in(["android.permission.INTERNET"]));
    }
}
