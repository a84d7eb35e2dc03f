use crate::chart::builder::{CalendarChartBuilder, day_lookup};
use crate::chart::data::ChartData;
use crate::chart::strategy::ChartStrategy;
use crate::chart::target::ChartTarget;
use crate::errors::Result;
use crate::extensions::chrono::NaiveDateExt;
use crate::logging::{LogTarget, Logger};
use crate::schedule::ScheduleDatasource;
use crate::schedule::day::DaySchedule;
use crate::schedule::month::MonthSchedule;
use crate::schedule::term::TermSchedule;
use chrono::NaiveDate;

/// An aggregate that can be drawn as a calendar.
pub trait CalendarSource {
    /// False while the division has nothing to draw (e.g. a term without weeks).
    fn input_data_ready(&self) -> bool;

    /// `(start, end_exclusive)` of the calendar.
    fn calendar_range(&self) -> Option<(NaiveDate, NaiveDate)>;

    fn chart_title(&self) -> Option<String>;

    fn days_with_lessons(&self) -> Vec<&DaySchedule>;
}

impl CalendarSource for TermSchedule {
    fn input_data_ready(&self) -> bool {
        !self.term_dim().weeks.is_empty()
    }

    fn calendar_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let term = self.term_dim();
        let first = term.first_day()?;
        let last = term.last_day()?;
        Some((first.date(), last.date().next_day()))
    }

    fn chart_title(&self) -> Option<String> {
        Some(self.term_dim().name.clone())
    }

    fn days_with_lessons(&self) -> Vec<&DaySchedule> {
        self.day_schedules_with_lessons()
    }
}

impl CalendarSource for MonthSchedule {
    fn input_data_ready(&self) -> bool {
        !self.month_dim().weeks.is_empty()
    }

    fn calendar_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let month = self.month_dim();
        Some((month.first_day(), month.end_exclusive()))
    }

    fn chart_title(&self) -> Option<String> {
        Some(self.month_dim().label())
    }

    fn days_with_lessons(&self) -> Vec<&DaySchedule> {
        self.day_schedules_with_lessons()
    }
}

/// Rebuilds chart data from a source and pushes it into the installed target.
pub struct CalendarChart {
    strategy: Box<dyn ChartStrategy>,
    builder: CalendarChartBuilder,
    show_title: bool,
    target: Option<Box<dyn ChartTarget>>,
    logger: Option<Logger>,
}

impl CalendarChart {
    pub fn new(strategy: Box<dyn ChartStrategy>) -> Self {
        Self {
            strategy,
            builder: CalendarChartBuilder::default(),
            show_title: true,
            target: None,
            logger: None,
        }
    }

    pub fn with_builder(mut self, builder: CalendarChartBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn with_title(mut self, show_title: bool) -> Self {
        self.show_title = show_title;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Disposes the current target, if any, before installing `target`.
    pub fn reset_target(&mut self, target: Box<dyn ChartTarget>) {
        self.dispose_target();
        self.log(format!("Chart target '{}' initialized", target.name()));
        self.target = Some(target);
    }

    pub fn dispose_target(&mut self) {
        if let Some(mut old) = self.target.take() {
            old.dispose();
            self.log(format!("Chart target '{}' disposed", old.name()));
        }
    }

    /// Chart data for `source`, or `None` while the source is not ready.
    pub fn build_data(&self, source: &dyn CalendarSource) -> Option<ChartData> {
        if !source.input_data_ready() {
            return None;
        }
        let (start, end_exclusive) = source.calendar_range()?;
        let days = source.days_with_lessons();
        let lookup = day_lookup(days);
        let title = if self.show_title {
            source.chart_title()
        } else {
            None
        };
        Some(
            self.builder
                .build(self.strategy.as_ref(), title, start, end_exclusive, &lookup),
        )
    }

    /// Returns `Ok(false)` without rendering when the source is not ready or no
    /// target is installed.
    pub fn refresh(&mut self, source: &dyn CalendarSource) -> Result<bool> {
        if self.target.is_none() {
            return Ok(false);
        }
        let Some(data) = self.build_data(source) else {
            self.log("Chart refresh skipped: input not ready".to_string());
            return Ok(false);
        };

        self.log(format!(
            "Rendering {} chart for {}..{} ({} days, scale max {})",
            self.strategy.mode(),
            data.start,
            data.end_exclusive,
            data.len(),
            data.visual.max
        ));

        match self.target.as_mut() {
            Some(target) => {
                target.render(&data)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn log(&self, message: String) {
        if let Some(logger) = &self.logger {
            logger.info(message, LogTarget::FileOnly);
        }
    }
}
