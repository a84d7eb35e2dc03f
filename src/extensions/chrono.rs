use crate::core::types::DayOfWeek;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub trait WeekdayExt {
    fn to_day_of_week(self) -> DayOfWeek;
}

impl WeekdayExt for Weekday {
    fn to_day_of_week(self) -> DayOfWeek {
        match self {
            Weekday::Mon => DayOfWeek::Mon,
            Weekday::Tue => DayOfWeek::Tue,
            Weekday::Wed => DayOfWeek::Wed,
            Weekday::Thu => DayOfWeek::Thu,
            Weekday::Fri => DayOfWeek::Fri,
            Weekday::Sat => DayOfWeek::Sat,
            Weekday::Sun => DayOfWeek::Sun,
        }
    }
}

pub trait NaiveDateExt {
    /// The following calendar day.
    fn next_day(self) -> NaiveDate;
    /// First day of the month containing `self`.
    fn month_start(self) -> NaiveDate;
    /// First day of the month after the one containing `self`.
    fn next_month_start(self) -> NaiveDate;
}

impl NaiveDateExt for NaiveDate {
    fn next_day(self) -> NaiveDate {
        self + Duration::days(1)
    }

    fn month_start(self) -> NaiveDate {
        self.with_day(1).unwrap_or(self)
    }

    fn next_month_start(self) -> NaiveDate {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self)
    }
}
