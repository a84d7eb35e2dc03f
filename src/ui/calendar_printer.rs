use crate::chart::data::ChartData;
use crate::core::types::DayOfWeek;
use crate::ui::ansi::paint_bg;
use crate::ui::table_printer::{Table, TablePrinter};
use chrono::Datelike;
use std::io::{self, Write};
use strum::IntoEnumIterator;

const EMPTY_RANGE_MESSAGE: &str = "No days in range.";

/// Text rendering of a calendar heatmap: one row per week, Monday first.
#[derive(Debug, Clone)]
pub struct CalendarPrinter {
    printer: TablePrinter,
    color: bool,
}

impl Default for CalendarPrinter {
    fn default() -> Self {
        Self {
            printer: TablePrinter::new(),
            color: true,
        }
    }
}

impl CalendarPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_left_pad(mut self, pad: usize) -> Self {
        self.printer = self.printer.with_left_pad(pad);
        self
    }

    /// `"dd nn"` for every day: day label right-aligned, count (if any) after it.
    fn cell_text(label: &str, annotation: Option<&str>) -> String {
        format!("{:>2} {:<2}", label, annotation.unwrap_or(""))
    }

    /// Week rows of 7 cells. Cells before the first day and after the last one
    /// are blank.
    pub fn week_rows(&self, chart: &ChartData) -> Vec<Vec<String>> {
        if chart.is_empty() {
            return Vec::new();
        }
        let offset = chart.start.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<String> = vec![String::new(); offset];

        let days = chart
            .labels
            .iter()
            .zip(&chart.annotations)
            .zip(&chart.heatmap);
        for ((label, annotation), heat) in days {
            let text = Self::cell_text(&label.text, annotation.text.as_deref());
            let cell = if self.color {
                chart
                    .visual
                    .palette
                    .blend(chart.visual.ratio(heat.value))
                    .map(|rgb| paint_bg(rgb, &text))
                    .unwrap_or(text)
            } else {
                text
            };
            cells.push(cell);
        }

        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(std::iter::repeat_n(String::new(), trailing));
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }

    pub fn render<W: Write + ?Sized>(&self, chart: &ChartData, out: &mut W) -> io::Result<()> {
        let headers: Vec<String> = DayOfWeek::iter().map(|d| d.to_string()).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        let rows = self.week_rows(chart);
        let title = chart.title.as_deref().unwrap_or("Calendar");

        let table = Table::new(title, &header_refs, &rows).empty_message(EMPTY_RANGE_MESSAGE);
        self.printer.render(&table, out)?;

        if !chart.is_empty() {
            self.printer.write_line(
                out,
                &format!(
                    "{} day(s), {} period-pair(s), scale 0-{}",
                    chart.len(),
                    chart.total_value(),
                    chart.visual.max
                ),
            )?;
        }
        Ok(())
    }
}
