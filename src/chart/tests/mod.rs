
use crate::core::models::{TermDim, TimeSlotRecord, WeekDim};
use crate::core::types::DateDim;
use chrono::NaiveDate;

pub(super) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(super) fn date(y: i32, m: u32, d: u32) -> DateDim {
    DateDim::new(day(y, m, d))
}

/// Weeks 1..=3 covering 2024-09-02 .. 2024-09-18.
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

pub(super) fn sample_records() -> Vec<TimeSlotRecord> {
    vec![
        TimeSlotRecord::new(date(2024, 9, 3), 1, 1, 2)
            .with_course("Algebra")
            .with_teacher("Ms Lee"),
        TimeSlotRecord::new(date(2024, 9, 3), 1, 5, 8)
            .with_course("Physics")
            .with_site("Lab 2"),
        TimeSlotRecord::new(date(2024, 9, 17), 3, 3, 4).with_course("History"),
    ]
}
