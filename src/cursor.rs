use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The month currently shown on the calendar. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The month before, or `None` when the year would leave `i32`.
    pub fn prev(self) -> Option<Self> {
        if self.month == 0 {
            Some(Self::new(self.year.checked_sub(1)?, 11))
        } else {
            Some(Self::new(self.year, self.month - 1))
        }
    }

    pub fn next(self) -> Option<Self> {
        if self.month >= 11 {
            Some(Self::new(self.year.checked_add(1)?, 0))
        } else {
            Some(Self::new(self.year, self.month + 1))
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }
}
