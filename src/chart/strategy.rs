use crate::core::models::ScheduleContext;
use crate::core::types::ChartMode;
use crate::schedule::day::DaySchedule;
use crate::schedule::tooltip::lessons_text;

/// What a calendar chart shows for each day. Aggregation is shared; only the
/// cell content differs between implementations.
pub trait ChartStrategy {
    fn mode(&self) -> ChartMode;

    /// Heatmap intensity for the day.
    fn value(&self, day: &DaySchedule) -> usize {
        day.lesson_spans_count()
    }

    fn label(&self, day: &DaySchedule) -> String {
        day.date_dim().day_of_month().to_string()
    }

    fn annotation(&self, value: usize) -> Option<String> {
        (value > 0).then(|| value.to_string())
    }

    fn tooltip(&self, day: &DaySchedule) -> String;
}

/// Tooltips list each lesson with the names not fixed by the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonDetail {
    pub context: ScheduleContext,
}

impl LessonDetail {
    pub fn new(context: ScheduleContext) -> Self {
        Self { context }
    }
}

impl ChartStrategy for LessonDetail {
    fn mode(&self) -> ChartMode {
        ChartMode::Lessons
    }

    fn tooltip(&self, day: &DaySchedule) -> String {
        lessons_text(day, &self.context)
    }
}

/// Tooltips carry only the day's count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Statistics;

impl ChartStrategy for Statistics {
    fn mode(&self) -> ChartMode {
        ChartMode::Statistics
    }

    fn tooltip(&self, day: &DaySchedule) -> String {
        format!(
            "{}: {} period-pair(s)",
            day.date_dim().formatted(),
            self.value(day)
        )
    }
}

pub fn make_chart_strategy(mode: ChartMode, context: ScheduleContext) -> Box<dyn ChartStrategy> {
    match mode {
        ChartMode::Lessons => Box::new(LessonDetail::new(context)),
        ChartMode::Statistics => Box::new(Statistics),
    }
}
