//! Date archive periods (`2022`, `2022/06`, `2022/06/15`).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The year, month, or day a date archive lists.
///
/// A day always comes with a month. Construction goes through `FromStr`,
/// which rejects impossible dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArchivePeriod {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

impl ArchivePeriod {
    /// Archive year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Archive month, for month and day archives.
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    /// Archive day, for day archives.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Relative archive path without leading or trailing slash, e.g. `2022/06`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = format!("{:04}", self.year);
        if let Some(month) = self.month {
            path.push_str(&format!("/{month:02}"));
        }
        if let Some(day) = self.day {
            path.push_str(&format!("/{day:02}"));
        }
        path
    }
}

impl FromStr for ArchivePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPeriod(s.to_string());
        let parts: Vec<&str> =
            s.trim().trim_matches('/').split(['/', '-']).filter(|p| !p.is_empty()).collect();

        let number = |part: &str| part.parse::<u32>().map_err(|_| invalid());
        let (year, month, day) = match parts.as_slice() {
            [y] => (number(y)?, None, None),
            [y, m] => (number(y)?, Some(number(m)?), None),
            [y, m, d] => (number(y)?, Some(number(m)?), Some(number(d)?)),
            _ => return Err(invalid()),
        };
        let year = i32::try_from(year).map_err(|_| invalid())?;

        // Validate against the calendar; the first of the month stands in
        // for month and year archives.
        NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1)).ok_or_else(invalid)?;

        Ok(Self { year, month, day })
    }
}

impl TryFrom<String> for ArchivePeriod {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArchivePeriod> for String {
    fn from(period: ArchivePeriod) -> Self {
        period.path()
    }
}

impl fmt::Display for ArchivePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
