use crate::chart::builder::CalendarChartBuilder;
use crate::chart::layout::ChartLayout;
use crate::config::Config;
use crate::errors::Result;
use crate::logging::Logger;
use crate::theme::{self, Theme};
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub theme: &'static Theme,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    /// Loads the config (defaults when the file does not exist yet), points the
    /// logger at `logs_dir` and fixes the process theme.
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_or_default(&config_path)?;

        let logger = Logger::with_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let theme = theme::init(config.theme());

        Ok(Self {
            config,
            logger,
            theme,
            config_path,
            logs_dir,
        })
    }

    /// Chart builder using the configured floor, cell size and theme.
    pub fn chart_builder(&self) -> CalendarChartBuilder {
        CalendarChartBuilder::new()
            .with_floor(self.config.color_scale_floor())
            .with_theme(self.theme)
            .with_layout(ChartLayout::default().with_cell_size(self.config.cell_size()))
    }
}
