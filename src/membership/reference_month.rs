use crate::facts::{is_month, is_year};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, Utc};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use serde::Serialize;

/// The month against which patch staleness is measured.
///
/// Passed into the membership functions explicitly so they never read the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_fact("reference_month", format!("month {month} is outside 1..=12")));
        }

        Ok(Self { year, month })
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in UTC.
    #[must_use]
    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

/// Parses `YYYY-MM`.
impl FromStr for ReferenceMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_fact("reference_month", format!("'{s}' is not of the form YYYY-MM"));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if !is_year(year) || !is_month(month) {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_err| invalid())?;
        let month = month.parse::<u32>().map_err(|_err| invalid())?;

        Self::new(year, month)
    }
}

impl Display for ReferenceMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
