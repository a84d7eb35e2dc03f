use crate::chart::data::ChartGeometry;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const TITLE_HEIGHT: u32 = 50;
const COLUMNS: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartLayout {
    pub cell_size: u32,
    pub padding_bottom: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            cell_size: 70,
            padding_bottom: 30,
        }
    }
}

// Sizes saturate; a config file may hold any u32 cell size.
impl ChartLayout {
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn calendar_top(&self, has_title: bool) -> u32 {
        (if has_title { TITLE_HEIGHT } else { 0 }).saturating_add(self.cell_size)
    }

    pub fn width(&self) -> u32 {
        self.cell_size.saturating_mul(COLUMNS)
    }

    /// Week rows needed to show `days` days from `start` in a Monday-first grid.
    pub fn rows(start: NaiveDate, days: usize) -> u32 {
        let offset = start.weekday().num_days_from_monday() as usize;
        if days == 0 {
            return 0;
        }
        (offset + days).div_ceil(7) as u32
    }

    pub fn geometry(&self, has_title: bool, start: NaiveDate, days: usize) -> ChartGeometry {
        let rows = Self::rows(start, days);
        let calendar_top = self.calendar_top(has_title);
        ChartGeometry {
            cell_size: self.cell_size,
            width: self.width(),
            height: calendar_top
                .saturating_add(rows.saturating_mul(self.cell_size))
                .saturating_add(self.padding_bottom),
            calendar_top,
            rows,
        }
    }
}
