use crate::ranking::EvaluationResult;
use crate::recommendations::Recommendation;
use core::iter::FusedIterator;

type Rule = fn(&EvaluationResult) -> Option<Recommendation>;

/// Checked in this order; the order is part of the output contract.
const RULES: [Rule; 5] = [
    |r| (r.not_latest_api > 0.0).then_some(Recommendation::UpdateAndroidVersion { api_level: r.api_level }),
    |r| (r.not_latest_date > 0.0).then_some(Recommendation::UpdateSecurityPatch),
    |r| (!r.lock_set_status).then_some(Recommendation::EnableDeviceLock),
    |r| (!r.root_access_status).then_some(Recommendation::ObtainRootAccess),
    |r| (r.application_security_risk > 0.0).then_some(Recommendation::RestrictDangerousPermissions),
];

/// Build the recommendations for an evaluation.
///
/// The returned iterator is lazy and finite. Clone it to walk the same sequence again.
#[must_use]
pub const fn build_recommendations(result: &EvaluationResult) -> Recommendations {
    Recommendations {
        result: *result,
        next_rule: 0,
        emitted_any: false,
    }
}

/// Iterator over the recommendations for one evaluation.
#[derive(Debug, Clone)]
pub struct Recommendations {
    result: EvaluationResult,
    next_rule: usize,
    emitted_any: bool,
}

impl Iterator for Recommendations {
    type Item = Recommendation;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rule) = RULES.get(self.next_rule) {
            self.next_rule += 1;
            if let Some(recommendation) = rule(&self.result) {
                self.emitted_any = true;
                return Some(recommendation);
            }
        }

        if self.next_rule == RULES.len() {
            self.next_rule += 1;
            if !self.emitted_any {
                return Some(Recommendation::NoActionRequired);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_rules = RULES.len().saturating_sub(self.next_rule);
        let fallback = usize::from(self.next_rule <= RULES.len() && !self.emitted_any);
        (usize::from(fallback == 1 && remaining_rules == 0), Some(remaining_rules + fallback))
    }
}

impl FusedIterator for Recommendations {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::ranking::Risk;
    use crate::recommendations::RecommendationCategory;

    fn compliant() -> EvaluationResult {
        EvaluationResult {
            android_security_risk: 0.0,
            application_security_risk: 0.0,
            not_latest_api: 0.0,
            not_latest_date: 0.0,
            lock_set_status: true,
            root_access_status: true,
            api_level: 33,
            risk: Risk::Low,
        }
    }

    fn non_compliant() -> EvaluationResult {
        EvaluationResult {
            android_security_risk: 86.4,
            application_security_risk: 63.2,
            not_latest_api: 0.75,
            not_latest_date: 1.0,
            lock_set_status: false,
            root_access_status: false,
            api_level: 30,
            risk: Risk::High,
        }
    }

    #[test]
    fn test_compliant_device_needs_no_action() {
        let recs: Vec<_> = build_recommendations(&compliant()).collect();
        assert_eq!(recs, vec![Recommendation::NoActionRequired]);
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let recs: Vec<_> = build_recommendations(&non_compliant()).collect();
        assert_eq!(
            recs,
            vec![
                Recommendation::UpdateAndroidVersion { api_level: 30 },
                Recommendation::UpdateSecurityPatch,
                Recommendation::EnableDeviceLock,
                Recommendation::ObtainRootAccess,
                Recommendation::RestrictDangerousPermissions,
            ]
        );
    }

    #[test]
    fn test_single_rule() {
        let result = EvaluationResult {
            root_access_status: false,
            ..compliant()
        };
        let recs: Vec<_> = build_recommendations(&result).collect();
        assert_eq!(recs, vec![Recommendation::ObtainRootAccess]);
    }

    #[test]
    fn test_api_text_cites_level() {
        let text = build_recommendations(&non_compliant()).next().unwrap().to_string();
        assert_eq!(text, "Your API Level is still 30. Please update your Android version");
    }

    #[test]
    fn test_categories_follow_order() {
        let categories: Vec<_> = build_recommendations(&non_compliant()).map(Recommendation::category).collect();
        assert_eq!(
            categories,
            vec![
                RecommendationCategory::Platform,
                RecommendationCategory::SecurityPatch,
                RecommendationCategory::DeviceLock,
                RecommendationCategory::RootAccess,
                RecommendationCategory::Applications,
            ]
        );
    }

    #[test]
    fn test_clone_restarts_sequence() {
        let recs = build_recommendations(&non_compliant());
        let first: Vec<_> = recs.clone().collect();
        let second: Vec<_> = recs.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut recs = build_recommendations(&compliant());
        assert_eq!(recs.next(), Some(Recommendation::NoActionRequired));
        assert_eq!(recs.next(), None);
        assert_eq!(recs.next(), None);
    }

    #[test]
    fn test_size_hint_bounds_hold() {
        for result in [compliant(), non_compliant()] {
            let recs = build_recommendations(&result);
            let (lower, upper) = recs.size_hint();
            let actual = recs.count();
            assert!(lower <= actual);
            assert!(upper.is_none_or(|upper| actual <= upper));
        }
    }

    #[test]
    fn test_no_action_text() {
        assert_eq!(Recommendation::NoActionRequired.to_string(), "No actions required!");
    }
}
