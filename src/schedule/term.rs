use crate::core::models::{TermDim, TimeSlotRecord};
use crate::core::types::SlotOrder;
use crate::errors::Result;
use crate::schedule::month::MonthSchedule;
use crate::schedule::week::WeekSchedule;
use crate::schedule::{ScheduleDatasource, group_records};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSchedule {
    term_dim: TermDim,
    week_schedules: Vec<WeekSchedule>,
}

impl TermSchedule {
    pub fn new(term_dim: &TermDim, records: &[TimeSlotRecord]) -> Self {
        Self::with_order(term_dim, records, SlotOrder::default())
    }

    pub fn with_order(term_dim: &TermDim, records: &[TimeSlotRecord], order: SlotOrder) -> Self {
        let mut by_week = group_records(records, |r| r.weekno);
        let week_schedules = term_dim
            .weeks
            .iter()
            .map(|week| {
                let of_week = by_week.remove(&week.weekno).unwrap_or_default();
                WeekSchedule::with_order(week, &of_week, order)
            })
            .collect();

        Self {
            term_dim: term_dim.clone(),
            week_schedules,
        }
    }

    pub fn term_dim(&self) -> &TermDim {
        &self.term_dim
    }

    /// Month slice of this term built from the weeks already aggregated here.
    pub fn month_schedule(&self, year: i32, month: u32) -> Result<MonthSchedule> {
        let month_dim = self.term_dim.month(year, month)?;
        let weeks = self
            .week_schedules
            .iter()
            .filter(|ws| month_dim.weeks.iter().any(|w| w.weekno == ws.weekno()))
            .cloned()
            .collect();
        Ok(MonthSchedule::from_weeks(month_dim, weeks))
    }
}

impl ScheduleDatasource for TermSchedule {
    fn week_schedules(&self) -> &[WeekSchedule] {
        &self.week_schedules
    }
}
