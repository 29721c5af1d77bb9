use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::errors::LedgerError;

/// A calendar month (`YYYY-MM`), used to scope balance queries and
/// settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::Validation(format!(
                "month out of range: {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::Validation(format!("invalid month filter `{}`", raw));
        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month)
    }
}

/// Advances `start` by `months` whole months, clamping the day-of-month to
/// the length of the target month. The clamp always works from the original
/// start day, never a previously clamped one, so Jan 31 maps to Feb 28 and
/// then Mar 31 rather than drifting to Mar 28.
pub fn shift_month(start: NaiveDate, months: u32) -> NaiveDate {
    let mut year = start.year();
    let mut month = start.month() as i32 + months as i32;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    let day = start.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(start)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Parses a `YYYY-MM-DD` date, falling back to today's local date.
/// Ingestion-boundary normalization: malformed external dates must never
/// break the store's sort invariant.
pub fn parse_date_or_today(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| Local::now().date_naive())
}
