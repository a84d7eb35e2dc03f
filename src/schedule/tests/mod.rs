
use crate::core::models::{TermDim, TimeSlotRecord, WeekDim};
use crate::core::types::DateDim;
use chrono::NaiveDate;

pub(super) fn date(y: i32, m: u32, d: u32) -> DateDim {
    DateDim::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub(super) fn slot(day: DateDim, start: u8, end: u8) -> TimeSlotRecord {
    TimeSlotRecord::new(day, 1, start, end)
}

/// Two full weeks (2024-09-02 .. 2024-09-15) and a short third week ending
/// on Wednesday 2024-09-18.
pub(super) fn sample_term() -> TermDim {
    TermDim::new(
        "2024 Autumn",
        vec![
            WeekDim::new(1, date(2024, 9, 2), date(2024, 9, 8)),
            WeekDim::new(2, date(2024, 9, 9), date(2024, 9, 15)),
            WeekDim::new(3, date(2024, 9, 16), date(2024, 9, 18)),
        ],
    )
}
