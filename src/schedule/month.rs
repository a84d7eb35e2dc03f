use crate::core::models::{MonthDim, TimeSlotRecord};
use crate::core::types::SlotOrder;
use crate::schedule::week::WeekSchedule;
use crate::schedule::{ScheduleDatasource, group_records};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSchedule {
    month_dim: MonthDim,
    week_schedules: Vec<WeekSchedule>,
}

impl MonthSchedule {
    pub fn new(month_dim: &MonthDim, records: &[TimeSlotRecord]) -> Self {
        Self::with_order(month_dim, records, SlotOrder::default())
    }

    pub fn with_order(month_dim: &MonthDim, records: &[TimeSlotRecord], order: SlotOrder) -> Self {
        let mut by_week = group_records(records, |r| r.weekno);
        let week_schedules = month_dim
            .weeks
            .iter()
            .map(|week| {
                let of_week = by_week.remove(&week.weekno).unwrap_or_default();
                WeekSchedule::with_order(week, &of_week, order)
            })
            .collect();

        Self {
            month_dim: month_dim.clone(),
            week_schedules,
        }
    }

    /// Reuses weeks that were already aggregated (e.g. by a term schedule).
    pub(crate) fn from_weeks(month_dim: MonthDim, week_schedules: Vec<WeekSchedule>) -> Self {
        Self {
            month_dim,
            week_schedules,
        }
    }

    pub fn month_dim(&self) -> &MonthDim {
        &self.month_dim
    }
}

impl ScheduleDatasource for MonthSchedule {
    fn week_schedules(&self) -> &[WeekSchedule] {
        &self.week_schedules
    }
}
