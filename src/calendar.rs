//! Month calendars, and the status of their days

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::{DateKey, Task};

static MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Short names of the week days, starting on Sunday
pub static DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];


/// How far the tasks of a day are done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayStatus {
    /// Nothing is known about this day, or it has no task
    Empty,
    /// Every task is done
    Completed,
    /// Some tasks are left to do
    Incomplete,
}

impl DayStatus {
    /// Derive the status of a day from its task list (`None` if it is not known)
    pub fn from_tasks(tasks: Option<&[Task]>) -> Self {
        match tasks {
            None => DayStatus::Empty,
            Some(tasks) if tasks.is_empty() => DayStatus::Empty,
            Some(tasks) if tasks.iter().all(|task| task.done()) => DayStatus::Completed,
            Some(_) => DayStatus::Incomplete,
        }
    }
}

impl Display for DayStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Empty => write!(f, "empty"),
            DayStatus::Completed => write!(f, "completed"),
            DayStatus::Incomplete => write!(f, "incomplete"),
        }
    }
}


/// A month of a given year
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    /// Zero-based
    month0: u32,
}

impl MonthView {
    /// Returns `None` in case `month0` is not in `0..12`, or in case the month is out of the supported date range
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        if month0 >= 12 {
            return None;
        }
        let month = Self { year, month0 };
        month.first_day()?;
        month.last_day()?;
        Some(month)
    }

    /// The month `date` is in
    pub fn containing(date: &NaiveDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    /// The current month (in local time)
    pub fn current() -> Self {
        Self::containing(&chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn month0(&self) -> u32 { self.month0 }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }

    /// The month before this one, if it is in the supported date range
    pub fn previous(&self) -> Option<Self> {
        match self.month0 {
            0 => Self::new(self.year.checked_sub(1)?, 11),
            m => Self::new(self.year, m - 1),
        }
    }

    /// The month after this one, if it is in the supported date range
    pub fn next(&self) -> Option<Self> {
        match self.month0 {
            11 => Self::new(self.year.checked_add(1)?, 0),
            m => Self::new(self.year, m + 1),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        let first_of_next = match self.month0 {
            11 => NaiveDate::from_ymd_opt(self.year.checked_add(1)?, 1, 1),
            m => NaiveDate::from_ymd_opt(self.year, m + 2, 1),
        };
        first_of_next?.pred_opt()
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day()
            .map(|last| last.day())
            .unwrap_or(0)
    }

    /// Weekday of the first day of this month, `0` being Sunday
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// The key of a day of this month (days start at 1)
    pub fn date_key(&self, day: u32) -> DateKey {
        DateKey::new(day, self.month0, self.year)
    }

    /// The keys of every day of this month, in order
    pub fn date_keys(&self) -> Vec<DateKey> {
        (1..=self.days_in_month())
            .map(|day| self.date_key(day))
            .collect()
    }

    /// Whether `date` is the given day of this month
    pub fn is_day(&self, day: u32, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0 && date.day() == day
    }
}

impl Display for MonthView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
