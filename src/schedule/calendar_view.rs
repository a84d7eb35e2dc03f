use chrono::{Duration, NaiveDate};

/// A run of consecutive calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    start: NaiveDate,
    days: u32,
}

impl CalendarView {
    /// Single day starting at `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, days: 1 }
    }

    /// Every day in `[start, end_exclusive)`. Empty when `end_exclusive <= start`.
    pub fn between(start: NaiveDate, end_exclusive: NaiveDate) -> Self {
        let days = (end_exclusive - start).num_days().max(0) as u32;
        Self { start, days }
    }

    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    /// Cover `days` days.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn len(&self) -> usize {
        self.days as usize
    }

    pub fn is_empty(&self) -> bool {
        self.days == 0
    }

    /// Ordered list of dates.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..self.days)
            .map(|offset| self.start + Duration::days(offset as i64))
            .collect()
    }
}
