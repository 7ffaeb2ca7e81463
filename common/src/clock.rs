//! Source of "today" for newly created rubrics.
//!
//! `RubricManager` is generic over `Clock` so tests can pin the date instead
//! of depending on when they run.

use chrono::{NaiveDate, Utc};

/// Date format used for `Rubric::date`, matching `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
