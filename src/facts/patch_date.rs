use crate::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use serde::Serialize;

/// Year and month of the device's last security patch.
///
/// Android reports the patch level as `YYYY-MM-DD`; only the year and month take part
/// in the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PatchDate {
    year: i32,
    month: u32,
}

impl PatchDate {
    /// Create a patch date, rejecting months outside `1..=12`.
    pub fn new(year: i32, month: u32) -> crate::Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_fact("patch_month", format!("month {month} is outside 1..=12")));
        }

        Ok(Self { year, month })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Months since year zero, used for month arithmetic.
    #[must_use]
    pub fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

impl FromStr for PatchDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedPatchDate { input: s.to_string() };

        let (year_str, rest) = s.split_once('-').ok_or_else(malformed)?;
        let (month_str, day_str) = rest.split_once('-').ok_or_else(malformed)?;

        if !is_year(year_str) || !is_month(month_str) || !is_numeric(day_str) {
            return Err(malformed());
        }

        let year = year_str.parse::<i32>().map_err(|_err| malformed())?;
        let month = month_str.parse::<u32>().map_err(|_err| malformed())?;

        Self::new(year, month)
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Four ASCII digits.
pub(crate) fn is_year(s: &str) -> bool {
    s.len() == 4 && is_numeric(s)
}

/// Two ASCII digits.
pub(crate) fn is_month(s: &str) -> bool {
    s.len() == 2 && is_numeric(s)
}

impl Display for PatchDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        let date: PatchDate = "2024-06-01".parse().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
    }

    #[test]
    fn test_parse_ignores_day() {
        let a: PatchDate = "2021-01-05".parse().unwrap();
        let b: PatchDate = "2021-01-01".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_wrong_separator() {
        let err = "2024/06/01".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::MalformedPatchDate { .. }));
    }

    #[test]
    fn test_parse_single_hyphen() {
        let err = "2024-06".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::MalformedPatchDate { .. }));
    }

    #[test]
    fn test_parse_requires_day() {
        for input in ["2024-06-", "2024-06-zz", "2024-06-01-99", "2024-06-+1"] {
            let err = input.parse::<PatchDate>().unwrap_err();
            assert!(matches!(err, Error::MalformedPatchDate { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_requires_padded_fields() {
        for input in ["2024-6-01", "24-06-01", "2024-+6-01", "+2024-06-01"] {
            let err = input.parse::<PatchDate>().unwrap_err();
            assert!(matches!(err, Error::MalformedPatchDate { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_non_numeric_year() {
        let err = "abcd-06-01".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::MalformedPatchDate { .. }));
    }

    #[test]
    fn test_parse_non_numeric_month() {
        let err = "2024-xx-01".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::MalformedPatchDate { .. }));
    }

    #[test]
    fn test_parse_empty() {
        let err = "".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::MalformedPatchDate { .. }));
    }

    #[test]
    fn test_parse_month_out_of_range() {
        let err = "2024-13-01".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::InvalidFact { fact: "patch_month", .. }));

        let err = "2024-00-01".parse::<PatchDate>().unwrap_err();
        assert!(matches!(err, Error::InvalidFact { .. }));
    }

    #[test]
    fn test_month_index_orders_dates() {
        let older = PatchDate::new(2023, 12).unwrap();
        let newer = PatchDate::new(2024, 1).unwrap();
        assert_eq!(newer.month_index() - older.month_index(), 1);
        assert!(older < newer);
    }

    #[test]
    fn test_display() {
        let date = PatchDate::new(2024, 6).unwrap();
        assert_eq!(date.to_string(), "2024-06");
    }
}
