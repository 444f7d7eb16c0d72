// Calendar dates as they arrive in the download summaries
use chrono::{Months, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A `[year, month, day]` triple with a 1-indexed month and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i32, i32)", into = "(i32, i32, i32)")]
pub struct DateTriple {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DateTriple {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Convert to a calendar date under the given policy.
    pub fn to_date(self, policy: DatePolicy) -> Result<NaiveDate, DateError> {
        match policy {
            DatePolicy::Rollover => self.rolled_over(),
            DatePolicy::Strict => self.exact(),
        }
    }

    /// January 1st of `year`, shifted by `month - 1` months and then `day - 1` days.
    fn rolled_over(self) -> Result<NaiveDate, DateError> {
        let out_of_range = || DateError::OutOfRange(self);

        let jan_first = NaiveDate::from_ymd_opt(self.year, 1, 1).ok_or_else(out_of_range)?;

        let month_offset = i64::from(self.month) - 1;
        let months = Months::new(u32::try_from(month_offset.unsigned_abs()).map_err(|_| out_of_range())?);
        let first_of_month = if month_offset >= 0 {
            jan_first.checked_add_months(months)
        } else {
            jan_first.checked_sub_months(months)
        }
        .ok_or_else(out_of_range)?;

        let days = TimeDelta::try_days(i64::from(self.day) - 1).ok_or_else(out_of_range)?;
        first_of_month.checked_add_signed(days).ok_or_else(out_of_range)
    }

    fn exact(self) -> Result<NaiveDate, DateError> {
        let month = u32::try_from(self.month).map_err(|_| DateError::Invalid(self))?;
        let day = u32::try_from(self.day).map_err(|_| DateError::Invalid(self))?;

        match NaiveDate::from_ymd_opt(self.year, month, day) {
            Some(date) => Ok(date),
            None if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() => Err(DateError::OutOfRange(self)),
            None => Err(DateError::Invalid(self)),
        }
    }
}

impl From<(i32, i32, i32)> for DateTriple {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<DateTriple> for (i32, i32, i32) {
    fn from(triple: DateTriple) -> Self {
        (triple.year, triple.month, triple.day)
    }
}

impl fmt::Display for DateTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.year, self.month, self.day)
    }
}

/// How out-of-range month and day components are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Overflowing components carry into the neighbouring month or year.
    #[default]
    Rollover,
    /// Only real calendar dates are accepted.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date {0} is not a calendar date")]
    Invalid(DateTriple),
    #[error("date {0} is outside the supported range")]
    OutOfRange(DateTriple),
}
