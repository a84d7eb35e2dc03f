use crate::chart::data::{AnnotationPoint, ChartData, HeatmapCell, LabelPoint, VisualScale};
use crate::chart::layout::ChartLayout;
use crate::chart::strategy::ChartStrategy;
use crate::core::types::{DateDim, ThemeKey};
use crate::schedule::calendar_view::CalendarView;
use crate::schedule::day::DaySchedule;
use crate::theme::{HeatPalette, Theme};
use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::HashMap;

/// Lowest color-scale maximum, so sparse ranges do not render at full intensity.
pub const DEFAULT_COLOR_SCALE_FLOOR: usize = 4;

/// Day schedules keyed by `YYYYMMDD`.
pub type DayLookup<'a> = HashMap<String, &'a DaySchedule>;

pub fn day_lookup<'a, I>(days: I) -> DayLookup<'a>
where
    I: IntoIterator<Item = &'a DaySchedule>,
{
    days.into_iter()
        .map(|ds| (ds.date_dim().key(), ds))
        .collect()
}

#[derive(Debug, Clone)]
pub struct CalendarChartBuilder {
    floor: usize,
    palette: HeatPalette,
    label_color: String,
    count_color: String,
    layout: ChartLayout,
}

impl Default for CalendarChartBuilder {
    fn default() -> Self {
        let theme = Theme::for_key(ThemeKey::default());
        Self {
            floor: DEFAULT_COLOR_SCALE_FLOOR,
            palette: theme.palette,
            label_color: theme.label_color,
            count_color: theme.count_color,
            layout: ChartLayout::default(),
        }
    }
}

impl CalendarChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floor(mut self, floor: usize) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_palette(mut self, palette: HeatPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Takes the heat palette and the label and count colors from `theme`.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.palette = theme.palette.clone();
        self.label_color = theme.label_color.clone();
        self.count_color = theme.count_color.clone();
        self
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builds one cell per day in `[start, end_exclusive)`. Days missing from
    /// `lookup` are rendered as empty days.
    pub fn build(
        &self,
        strategy: &dyn ChartStrategy,
        title: Option<String>,
        start: NaiveDate,
        end_exclusive: NaiveDate,
        lookup: &DayLookup<'_>,
    ) -> ChartData {
        let dates = CalendarView::between(start, end_exclusive).days();

        let mut labels = Vec::with_capacity(dates.len());
        let mut annotations = Vec::with_capacity(dates.len());
        let mut heatmap = Vec::with_capacity(dates.len());
        let mut max_value = 0;

        for date in dates {
            let dim = DateDim::new(date);
            let day: Cow<'_, DaySchedule> = match lookup.get(&dim.key()) {
                Some(found) => Cow::Borrowed(*found),
                None => Cow::Owned(DaySchedule::empty(dim)),
            };

            let value = strategy.value(&day);
            max_value = max_value.max(value);

            labels.push(LabelPoint {
                date,
                text: strategy.label(&day),
            });
            annotations.push(AnnotationPoint {
                date,
                text: strategy.annotation(value),
            });
            heatmap.push(HeatmapCell {
                date,
                value,
                tooltip: strategy.tooltip(&day),
            });
        }

        let geometry = self
            .layout
            .geometry(title.is_some(), start, heatmap.len());

        ChartData {
            title,
            start,
            end_exclusive,
            geometry,
            visual: VisualScale {
                min: 0,
                max: max_value.max(self.floor),
                palette: self.palette.clone(),
                label_color: self.label_color.clone(),
                count_color: self.count_color.clone(),
            },
            labels,
            annotations,
            heatmap,
        }
    }
}
