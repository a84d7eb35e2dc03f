use crate::core::models::{MonthDim, ScheduleContext};
use crate::core::types::ChartMode;
use crate::errors::{Error, Result, require_parse};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: termcal [--config PATH] [--logs DIR] <command>

Commands:
  term <records> <term> [options]            Calendar for a whole term
  month <records> <term> <YYYY-MM> [options] Calendar for one month of a term
  config                                     Show configuration
  config set <KEY> <VALUE>                   Change a configuration item
  help                                       Show this message

Options:
  --stats             Show period-pair counts instead of lesson details
  --lessons           Also list every lesson in the range
  --export PATH       Write the chart data as JSON
  --context FLAGS     Hide names fixed by the perspective (course,teacher,site,class)
  --no-color          Plain cells without heatmap colors";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl Default for CliPaths {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

/// Inputs and output switches shared by `term` and `month`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub records_path: PathBuf,
    pub term_path: PathBuf,
    pub mode: ChartMode,
    pub export_path: Option<PathBuf>,
    pub context: ScheduleContext,
    pub list_lessons: bool,
    pub no_color: bool,
}

impl RenderRequest {
    pub fn new(records_path: impl Into<PathBuf>, term_path: impl Into<PathBuf>) -> Self {
        Self {
            records_path: records_path.into(),
            term_path: term_path.into(),
            mode: ChartMode::default(),
            export_path: None,
            context: ScheduleContext::default(),
            list_lessons: false,
            no_color: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Term(RenderRequest),
    Month {
        request: RenderRequest,
        year: i32,
        month: u32,
    },
    ShowConfig,
    SetConfig {
        key: String,
        value: String,
    },
    Help,
}

impl CliCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CliCommand::Term(_) => "term",
            CliCommand::Month { .. } => "month",
            CliCommand::ShowConfig => "config",
            CliCommand::SetConfig { .. } => "config set",
            CliCommand::Help => "help",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub paths: CliPaths,
    pub command: CliCommand,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut paths = CliPaths::default();

        let command_name = loop {
            let Some(arg) = args.next() else {
                return Ok(Self {
                    paths,
                    command: CliCommand::Help,
                });
            };
            match arg.as_str() {
                "--config" => paths.config_path = Self::next_path(&mut args, "--config")?,
                "--logs" => paths.logs_dir = Self::next_path(&mut args, "--logs")?,
                flag if flag.starts_with("--") && flag != "--help" => {
                    return Err(Error::parse(format!("Unknown argument: {arg}")));
                }
                _ => break arg,
            }
        };

        let rest: Vec<String> = args.collect();
        let command = match command_name.as_str() {
            "term" => Self::parse_term(&rest)?,
            "month" => Self::parse_month(&rest)?,
            "config" => Self::parse_config(&rest)?,
            "help" | "--help" => CliCommand::Help,
            other => {
                return Err(Error::parse(format!(
                    "Unknown command '{other}'. Run 'termcal help' for usage."
                )));
            }
        };

        Ok(Self { paths, command })
    }

    fn parse_term(rest: &[String]) -> Result<CliCommand> {
        let (positional, request) = Self::parse_render(rest)?;
        match positional.as_slice() {
            [records, term] => Ok(CliCommand::Term(RenderRequest {
                records_path: PathBuf::from(records),
                term_path: PathBuf::from(term),
                ..request
            })),
            _ => Err(Error::parse("Usage: termcal term <records> <term> [options]")),
        }
    }

    fn parse_month(rest: &[String]) -> Result<CliCommand> {
        let (positional, request) = Self::parse_render(rest)?;
        match positional.as_slice() {
            [records, term, label] => {
                let (year, month) = MonthDim::parse_label(label)?;
                Ok(CliCommand::Month {
                    request: RenderRequest {
                        records_path: PathBuf::from(records),
                        term_path: PathBuf::from(term),
                        ..request
                    },
                    year,
                    month,
                })
            }
            _ => Err(Error::parse("Usage: termcal month <records> <term> <YYYY-MM> [options]")),
        }
    }

    fn parse_config(rest: &[String]) -> Result<CliCommand> {
        match rest {
            [] => Ok(CliCommand::ShowConfig),
            [set, key, value] if set == "set" => Ok(CliCommand::SetConfig {
                key: key.clone(),
                value: value.clone(),
            }),
            _ => Err(Error::parse("Usage: termcal config [set <KEY> <VALUE>]")),
        }
    }

    /// Splits render flags from positional arguments; paths are filled in by the caller.
    fn parse_render(rest: &[String]) -> Result<(Vec<String>, RenderRequest)> {
        let mut request = RenderRequest::new("", "");
        let mut positional = Vec::new();
        let mut iter = rest.iter().cloned();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--stats" => request.mode = ChartMode::Statistics,
                "--lessons" => request.list_lessons = true,
                "--no-color" => request.no_color = true,
                "--export" => request.export_path = Some(Self::next_path(&mut iter, "--export")?),
                "--context" => {
                    let flags = require_parse(iter.next(), "Missing value for --context")?;
                    request.context = ScheduleContext::try_from_csv(&flags)?;
                }
                flag if flag.starts_with("--") => {
                    return Err(Error::parse(format!("Unknown argument: {arg}")));
                }
                _ => positional.push(arg),
            }
        }

        Ok((positional, request))
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf>
    where
        I: Iterator<Item = String>,
    {
        require_parse(args.next().map(PathBuf::from), format!("Missing value for {flag}"))
    }
}
