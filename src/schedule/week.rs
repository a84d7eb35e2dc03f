use crate::core::models::{TimeSlotRecord, WeekDim};
use crate::core::types::SlotOrder;
use crate::schedule::day::DaySchedule;
use crate::schedule::{ScheduleDatasource, group_records};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule {
    week_dim: WeekDim,
    day_schedules: Vec<DaySchedule>,
}

impl WeekSchedule {
    pub fn new(week_dim: &WeekDim, records: &[TimeSlotRecord]) -> Self {
        Self::with_order(week_dim, records, SlotOrder::default())
    }

    /// One day schedule per day of `week_dim`, days without records included.
    pub fn with_order(week_dim: &WeekDim, records: &[TimeSlotRecord], order: SlotOrder) -> Self {
        let mut by_date = group_records(records, |r| r.date.key());
        let day_schedules = week_dim
            .days()
            .into_iter()
            .map(|day| {
                let of_day = by_date.remove(&day.key()).unwrap_or_default();
                DaySchedule::with_order(day, of_day, order)
            })
            .collect();

        Self {
            week_dim: week_dim.clone(),
            day_schedules,
        }
    }

    pub fn week_dim(&self) -> &WeekDim {
        &self.week_dim
    }

    pub fn weekno(&self) -> u32 {
        self.week_dim.weekno
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.day_schedules
    }
}

impl ScheduleDatasource for WeekSchedule {
    fn week_schedules(&self) -> &[WeekSchedule] {
        std::slice::from_ref(self)
    }
}
