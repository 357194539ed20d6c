//! Keys under which task lists are stored

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::SHARED_DEFAULTS_KEY;

/// The key of a task list on the task server.
///
/// Day keys are formatted as `{day}-{month0}-{year}`, where `month0` is zero-based (`"5-3-2024"` is April 5th, 2024).
/// They are not zero-padded, and the format does not check the date actually exists.
///
/// The shared default tasks are stored under a reserved key, see [`DateKey::shared_defaults`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateKey(String);

impl DateKey {
    /// Build the key of a day. `month0` is zero-based
    pub fn new(day: u32, month0: u32, year: i32) -> Self {
        Self(format!("{}-{}-{}", day, month0, year))
    }

    pub fn from_date(date: &NaiveDate) -> Self {
        Self::new(date.day(), date.month0(), date.year())
    }

    /// The key of today (in local time)
    pub fn today() -> Self {
        Self::from_date(&chrono::Local::now().date_naive())
    }

    /// The reserved key the shared default tasks are stored under
    pub fn shared_defaults() -> Self {
        Self(SHARED_DEFAULTS_KEY.to_string())
    }

    pub fn is_shared_defaults(&self) -> bool {
        self.0 == SHARED_DEFAULTS_KEY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the date this key stands for, if any
    pub fn to_date(&self) -> Option<NaiveDate> {
        let (day, month0, year) = split_day_key(&self.0)?;
        NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(&date)
    }
}

impl FromStr for DateKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SHARED_DEFAULTS_KEY {
            return Ok(Self::shared_defaults());
        }
        match split_day_key(s) {
            Some((day, month0, year)) => Ok(Self::new(day, month0, year)),
            None => Err(crate::Error::InvalidKey(s.to_string())),
        }
    }
}

fn split_day_key(s: &str) -> Option<(u32, u32, i32)> {
    let mut parts = s.splitn(3, '-');
    let day = parts.next()?.parse().ok()?;
    let month0 = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    Some((day, month0, year))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format() {
        assert_eq!(DateKey::new(5, 3, 2024).as_str(), "5-3-2024");
        assert_eq!(DateKey::new(31, 11, 1999).to_string(), "31-11-1999");

        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(DateKey::from_date(&date).as_str(), "9-0-2024");
    }

    #[test]
    fn parse_keys() {
        let key: DateKey = "5-3-2024".parse().unwrap();
        assert_eq!(key, DateKey::new(5, 3, 2024));
        assert_eq!(key.to_date(), NaiveDate::from_ymd_opt(2024, 4, 5));

        let key: DateKey = "shared_default_tasks".parse().unwrap();
        assert!(key.is_shared_defaults());
        assert_eq!(key.to_date(), None);

        assert!("05/04/2024".parse::<DateKey>().is_err());
        assert!("5-3".parse::<DateKey>().is_err());
    }

    #[test]
    fn keys_are_not_validated_as_dates() {
        let key: DateKey = "31-1-2023".parse().unwrap();
        assert_eq!(key.as_str(), "31-1-2023");
        assert_eq!(key.to_date(), None);

        let key: DateKey = "1-4294967295-2024".parse().unwrap();
        assert_eq!(key.to_date(), None);
    }
}
