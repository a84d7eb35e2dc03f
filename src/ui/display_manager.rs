use crate::config::Config;
use crate::core::models::ScheduleContext;
use crate::schedule::day::DaySchedule;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::{Table, TablePrinter};
use std::io::{self, Write};

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_lessons<W: Write + ?Sized>(
        &self,
        days: &[&DaySchedule],
        context: &ScheduleContext,
        out: &mut W,
    ) -> io::Result<()> {
        let lesson_table = self.data.lesson_table(days, context);
        let table = Table::new("Lessons", &lesson_table.headers, &lesson_table.rows)
            .empty_message("No lessons scheduled.");
        self.printer.render(&table, out)
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows = self.data.config_rows(config);
        let table =
            Table::new("Config", &headers, &rows).empty_message("No config items found.");
        self.printer.render(&table, out)
    }
}
