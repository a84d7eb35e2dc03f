use crate::theme::HeatPalette;
use chrono::NaiveDate;
use serde::Serialize;

/// Day-of-month label drawn in the top of a calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPoint {
    pub date: NaiveDate,
    pub text: String,
}

/// Count drawn in the middle of a cell; `None` when the day is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationPoint {
    pub date: NaiveDate,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub value: usize,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualScale {
    pub min: usize,
    pub max: usize,
    pub palette: HeatPalette,
    pub label_color: String,
    pub count_color: String,
}

impl VisualScale {
    /// Position of `value` on the scale, in `[0, 1]`.
    pub fn ratio(&self, value: usize) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        let v = value.clamp(self.min, self.max);
        (v - self.min) as f32 / (self.max - self.min) as f32
    }
}

/// Pixel geometry of a vertical, Monday-first calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartGeometry {
    pub cell_size: u32,
    pub width: u32,
    pub height: u32,
    pub calendar_top: u32,
    pub rows: u32,
}

/// Everything a charting surface needs to draw one calendar heatmap.
///
/// `labels`, `annotations` and `heatmap` are aligned: entry `i` of each refers
/// to the same day, and days increase by exactly one from `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub title: Option<String>,
    pub start: NaiveDate,
    pub end_exclusive: NaiveDate,
    pub geometry: ChartGeometry,
    pub visual: VisualScale,
    pub labels: Vec<LabelPoint>,
    pub annotations: Vec<AnnotationPoint>,
    pub heatmap: Vec<HeatmapCell>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.heatmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heatmap.is_empty()
    }

    pub fn total_value(&self) -> usize {
        self.heatmap.iter().map(|c| c.value).sum()
    }
}
