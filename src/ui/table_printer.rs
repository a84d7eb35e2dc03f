use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = " | ";

/// A titled table ready for printing.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<String>],
    pub empty_message: Option<&'a str>,
    pub min_width: usize,
}

impl<'a> Table<'a> {
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: &'a [Vec<String>]) -> Self {
        Self {
            title,
            headers,
            rows,
            empty_message: None,
            min_width: 0,
        }
    }

    pub fn empty_message(mut self, msg: &'a str) -> Self {
        self.empty_message = Some(msg);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        let mut c = self.clone();
        c.left_pad = pad;
        c
    }

    pub fn left_pad(&self) -> usize {
        self.left_pad
    }

    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }

    // Rules never run past the terminal edge.
    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        let limit = self.util.terminal_width().saturating_sub(self.left_pad).max(1);
        self.write_line(out, &"-".repeat(width.clamp(1, limit)))
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_separator(out, w)?;
        self.write_line(out, &title.to_uppercase())?;
        self.write_separator(out, w)
    }

    /// Natural width of the table body (columns plus separators).
    pub fn table_width(&self, table: &Table<'_>) -> usize {
        let widths = self.column_widths(table);
        if widths.is_empty() {
            return 0;
        }
        widths.iter().sum::<usize>() + (widths.len() - 1) * COLUMN_SEPARATOR.len()
    }

    pub fn render<W: Write + ?Sized>(&self, table: &Table<'_>, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths(table);
        let total = self
            .table_width(table)
            .max(table.min_width)
            .max(self.util.visible_width(table.title));

        if table.rows.is_empty() {
            if let Some(msg) = table.empty_message {
                let w = total.max(self.util.visible_width(msg));
                self.render_banner(table.title, w, out)?;
                self.write_line(out, msg)?;
                return self.write_separator(out, w);
            }
        }

        self.render_banner(table.title, total, out)?;
        if !table.headers.is_empty() {
            let header = self.join_cells(table.headers.iter().copied(), &widths);
            self.write_line(out, &header)?;
            self.write_separator(out, total)?;
        }
        for row in table.rows {
            let line = self.join_cells(row.iter().map(String::as_str), &widths);
            self.write_line(out, &line)?;
        }
        self.write_separator(out, total)
    }

    fn column_widths(&self, table: &Table<'_>) -> Vec<usize> {
        let mut widths: Vec<usize> = table
            .headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in table.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(self.util.visible_width(cell));
            }
        }
        widths
    }

    fn join_cells<'s, I>(&self, cells: I, widths: &[usize]) -> String
    where
        I: Iterator<Item = &'s str>,
    {
        cells
            .zip(widths)
            .map(|(cell, w)| self.util.pad_visible(cell, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
            .trim_end()
            .to_string()
    }
}
