use crate::core::models::TimeSlotRecord;
use crate::schedule::day::DaySchedule;
use crate::schedule::week::WeekSchedule;
use std::collections::HashMap;
use std::hash::Hash;

pub mod calendar_view;
pub mod day;
pub mod month;
pub mod term;
pub mod tooltip;
pub mod week;
#[cfg(test)]
mod tests;

/// Read-only views shared by week, month and term aggregates.
pub trait ScheduleDatasource {
    fn week_schedules(&self) -> &[WeekSchedule];

    /// Every day in calendar order, empty days included.
    fn day_schedules(&self) -> Vec<&DaySchedule> {
        self.week_schedules()
            .iter()
            .flat_map(|ws| ws.days().iter())
            .collect()
    }

    /// Days with at least one occupied slot.
    fn day_schedules_with_lessons(&self) -> Vec<&DaySchedule> {
        self.day_schedules()
            .into_iter()
            .filter(|ds| ds.has_lessons())
            .collect()
    }

    fn total_lesson_spans(&self) -> usize {
        self.day_schedules()
            .iter()
            .map(|ds| ds.lesson_spans_count())
            .sum()
    }

    /// Records that landed on a day grid.
    fn placed_lessons(&self) -> usize {
        self.day_schedules()
            .iter()
            .map(|ds| ds.no_placeholder_lessons().len())
            .sum()
    }

    fn max_lesson_spans(&self) -> usize {
        self.day_schedules()
            .iter()
            .map(|ds| ds.lesson_spans_count())
            .max()
            .unwrap_or(0)
    }
}

/// Buckets records by `key`, keeping input order inside each bucket.
pub(crate) fn group_records<K, F>(records: &[TimeSlotRecord], key: F) -> HashMap<K, Vec<TimeSlotRecord>>
where
    K: Eq + Hash,
    F: Fn(&TimeSlotRecord) -> K,
{
    let mut groups: HashMap<K, Vec<TimeSlotRecord>> = HashMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record.clone());
    }
    groups
}
