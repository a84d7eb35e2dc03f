use std::io::Write;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::chart::calendar_chart::{CalendarChart, CalendarSource};
use crate::chart::strategy::make_chart_strategy;
use crate::chart::target::{JsonFileTarget, TerminalTarget};
use crate::config::ConfigKey;
use crate::core::cli::{CliCommand, RenderRequest, USAGE};
use crate::core::context::AppContext;
use crate::core::persist::{load_records, load_term};
use crate::core::types::{SlotOrder, ThemeKey};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::schedule::ScheduleDatasource;
use crate::schedule::term::TermSchedule;
use crate::ui::calendar_printer::CalendarPrinter;
use crate::ui::display_manager::DisplayManager;

/// Executes one parsed command, writing rendered output to `out`.
pub struct App<W> {
    ctx: AppContext,
    out: W,
    dm: DisplayManager,
    logger: Logger,
}

impl<W: Write + Clone + 'static> App<W> {
    pub fn new(ctx: AppContext, out: W) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            out,
            dm: DisplayManager::new(),
            logger,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn run(&mut self, command: &CliCommand) -> Result<()> {
        match command {
            CliCommand::Term(request) => self.render_term(request),
            CliCommand::Month {
                request,
                year,
                month,
            } => self.render_month(request, *year, *month),
            CliCommand::ShowConfig => self.show_config(),
            CliCommand::SetConfig { key, value } => self.set_config(key, value),
            CliCommand::Help => {
                writeln!(self.out, "{USAGE}")?;
                Ok(())
            }
        }
    }

    fn load_schedule(&self, request: &RenderRequest) -> Result<TermSchedule> {
        let records = load_records(&request.records_path)?;
        let term = load_term(&request.term_path)?;
        let order = self.ctx.config.slot_order();
        let schedule = TermSchedule::with_order(&term, &records, order);

        // Counts records outside every term week as well as grid drops.
        let dropped = records.len().saturating_sub(schedule.placed_lessons());
        self.logger.info(
            format!(
                "Loaded {} record(s) for '{}' ({} week(s), {} month(s), order {order})",
                records.len(),
                term.name,
                term.weeks.len(),
                term.months().len()
            ),
            LogTarget::FileOnly,
        );
        if dropped > 0 {
            self.logger.warn(
                format!("{dropped} overlapping or out-of-range record(s) were not placed."),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(schedule)
    }

    fn render_term(&mut self, request: &RenderRequest) -> Result<()> {
        let schedule = self.load_schedule(request)?;
        if !schedule.input_data_ready() {
            self.logger.warn(
                format!("Term '{}' has no weeks; nothing to draw.", schedule.term_dim().name),
                LogTarget::ConsoleAndFile,
            );
            return Ok(());
        }
        self.render(request, &schedule)
    }

    fn render_month(&mut self, request: &RenderRequest, year: i32, month: u32) -> Result<()> {
        let schedule = self.load_schedule(request)?.month_schedule(year, month)?;
        if !schedule.input_data_ready() {
            self.logger.warn(
                format!(
                    "No term weeks fall in {}; nothing to draw.",
                    schedule.month_dim().label()
                ),
                LogTarget::ConsoleAndFile,
            );
            return Ok(());
        }
        self.render(request, &schedule)
    }

    fn render(&mut self, request: &RenderRequest, source: &dyn CalendarSource) -> Result<()> {
        let strategy = make_chart_strategy(request.mode, request.context);
        let mut chart = CalendarChart::new(strategy)
            .with_builder(self.ctx.chart_builder())
            .with_logger(self.logger.clone());

        let printer = CalendarPrinter::new().with_color(!request.no_color);
        chart.reset_target(Box::new(
            TerminalTarget::new(self.out.clone()).with_printer(printer),
        ));
        chart.refresh(source)?;

        if let Some(path) = &request.export_path {
            chart.reset_target(Box::new(JsonFileTarget::new(path.clone())));
            if chart.refresh(source)? {
                self.logger.info(
                    format!("Chart data exported to {}", path.display()),
                    LogTarget::ConsoleAndFile,
                );
            }
        }
        chart.dispose_target();

        if request.list_lessons {
            writeln!(self.out)?;
            self.dm
                .render_lessons(&source.days_with_lessons(), &request.context, &mut self.out)?;
        }
        Ok(())
    }

    fn show_config(&mut self) -> Result<()> {
        self.dm.render_config(&self.ctx.config, &mut self.out)?;
        writeln!(self.out, "Config path: {}", self.ctx.config_path.display())?;
        writeln!(self.out, "Logs path: {}", self.ctx.logs_dir.display())?;
        Ok(())
    }

    fn set_config(&mut self, key: &str, value: &str) -> Result<()> {
        if let Err(err) = self.ctx.config.set(key, value) {
            if let Some(options) = possible_options(key) {
                self.logger
                    .info(format!("Possible values:\n{options}"), LogTarget::ConsoleOnly);
            }
            return Err(err);
        }
        if let Some((key, old, new)) = self.ctx.config.take_last_change() {
            self.logger.info(
                format!("Config {key} changed from '{old}' to '{new}'."),
                LogTarget::ConsoleAndFile,
            );
        }
        if key.trim().eq_ignore_ascii_case(ConfigKey::FileLoggingEnabled.as_ref()) {
            self.logger
                .set_file_logging_enabled(self.ctx.config.file_logging_enabled());
        }
        Ok(())
    }
}

fn possible_options(key: &str) -> Option<String> {
    let options = match ConfigKey::from_str(key.trim()).ok()? {
        ConfigKey::SlotOrder => SlotOrder::iter()
            .map(|o| format!("{}: {}", o, o.help()))
            .collect::<Vec<_>>(),
        ConfigKey::Theme => ThemeKey::iter().map(|t| t.to_string()).collect(),
        ConfigKey::FileLoggingEnabled => vec!["True".into(), "False".into()],
        ConfigKey::ColorScaleFloor | ConfigKey::CellSize => return None,
    };
    Some(options.join("\n"))
}
