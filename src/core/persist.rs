use crate::chart::data::ChartData;
use crate::core::models::{TermDim, TimeSlotRecord};
use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<TimeSlotRecord>> {
    read_json(path, "records")
}

/// Reads a term description and checks that every week is well formed.
pub fn load_term(path: &Path) -> Result<TermDim> {
    let term: TermDim = read_json(path, "term")?;
    for week in &term.weeks {
        if week.first_day > week.last_day {
            return Err(Error::Parse(format!(
                "Week {} in '{}' ends ({}) before it starts ({}).",
                week.weekno,
                path.display(),
                week.last_day.formatted(),
                week.first_day.formatted()
            )));
        }
    }
    Ok(term)
}

pub fn save_chart(chart: &ChartData, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(chart)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::Parse(format!(
            "Cannot read {what} file '{}': {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        Error::Parse(format!(
            "Invalid {what} file '{}': {}",
            path.display(),
            e
        ))
    })
}
