use crate::chart::data::ChartData;
use crate::core::persist::save_chart;
use crate::errors::{Error, Result};
use crate::ui::calendar_printer::CalendarPrinter;
use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

/// Surface a calendar chart draws into.
pub trait ChartTarget {
    fn name(&self) -> &str;

    /// Replaces whatever the target currently shows with `chart`.
    fn render(&mut self, chart: &ChartData) -> Result<()>;

    /// Releases the surface. A disposed target refuses further renders.
    fn dispose(&mut self) {}
}

// =====
// Memory
// =====

#[derive(Debug, Default)]
pub struct MemoryState {
    pub renders: Vec<ChartData>,
    pub disposed: bool,
}

impl MemoryState {
    pub fn last(&self) -> Option<&ChartData> {
        self.renders.last()
    }
}

/// Keeps every render in memory. Clone the handle before installing the target
/// to inspect it afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Rc<RefCell<MemoryState>> {
        Rc::clone(&self.state)
    }
}

impl ChartTarget for MemoryTarget {
    fn name(&self) -> &str {
        "memory"
    }

    fn render(&mut self, chart: &ChartData) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            return Err(Error::render("memory target was disposed"));
        }
        state.renders.push(chart.clone());
        Ok(())
    }

    fn dispose(&mut self) {
        self.state.borrow_mut().disposed = true;
    }
}

// =====
// JSON file
// =====

/// Writes each render as pretty JSON, overwriting the previous one.
#[derive(Debug, Clone)]
pub struct JsonFileTarget {
    path: PathBuf,
    disposed: bool,
}

impl JsonFileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            disposed: false,
        }
    }
}

impl ChartTarget for JsonFileTarget {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&mut self, chart: &ChartData) -> Result<()> {
        if self.disposed {
            return Err(Error::render(format!(
                "json target for {} was disposed",
                self.path.display()
            )));
        }
        save_chart(chart, &self.path)?;
        Ok(())
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}

// =====
// Terminal
// =====

/// Draws the heatmap as a Monday-first grid of day cells.
pub struct TerminalTarget<W: Write> {
    out: Option<W>,
    printer: CalendarPrinter,
}

impl<W: Write> TerminalTarget<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            printer: CalendarPrinter::new(),
        }
    }

    pub fn with_printer(mut self, printer: CalendarPrinter) -> Self {
        self.printer = printer;
        self
    }

    /// Gives the writer back, e.g. to read a captured buffer.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

impl<W: Write> ChartTarget for TerminalTarget<W> {
    fn name(&self) -> &str {
        "terminal"
    }

    fn render(&mut self, chart: &ChartData) -> Result<()> {
        let out = self
            .out
            .as_mut()
            .ok_or_else(|| Error::render("terminal target was disposed"))?;
        self.printer.render(chart, out)?;
        out.flush()?;
        Ok(())
    }

    fn dispose(&mut self) {
        if let Some(mut out) = self.out.take() {
            let _ = out.flush();
        }
    }
}
