use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use termcal::core::context::AppContext;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_termcal"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Three teaching weeks, 2024-09-23 .. 2024-10-09, spanning two months.
pub fn write_term(dir: &Path) -> PathBuf {
    let term = r#"{
  "name": "2024 Autumn",
  "weeks": [
    { "weekno": 1, "first_day": "20240923", "last_day": "20240929" },
    { "weekno": 2, "first_day": "20240930", "last_day": "20241006" },
    { "weekno": 3, "first_day": "20241007", "last_day": "20241009" }
  ]
}"#;
    let path = dir.join("term.json");
    fs::write(&path, term).unwrap();
    path
}

pub fn write_records(dir: &Path) -> PathBuf {
    let records = r#"[
  { "date": "20240924", "day_of_week": 2, "weekno": 1, "period_start": 1, "period_end": 2,
    "course": { "name": "Algebra" }, "teacher": { "id": "t1", "name": "Ms Lee" },
    "class": { "name": "7B" } },
  { "date": "20240924", "day_of_week": 2, "weekno": 1, "period_start": 2, "period_end": 3,
    "course": { "name": "Overlap" } },
  { "date": "20240924", "day_of_week": 2, "weekno": 1, "period_start": 5, "period_end": 8,
    "course": { "name": "Physics" }, "site": { "name": "Lab 2" } },
  { "date": "20241001", "day_of_week": 2, "weekno": 2, "period_start": 3, "period_end": 4,
    "course": { "name": "History" } },
  { "date": "20241008", "day_of_week": 2, "weekno": 3, "period_start": 1, "period_end": 10,
    "course": { "name": "Field trip" } }
]"#;
    let path = dir.join("records.json");
    fs::write(&path, records).unwrap();
    path
}

pub fn write_config(dir: &Path, file_logging: bool) -> PathBuf {
    let cfg = format!(
        r#"{{
  "slot_order": {{ "value": "by-period-start", "description": "order" }},
  "color_scale_floor": {{ "value": 4, "description": "floor" }},
  "cell_size": {{ "value": 70, "description": "cell" }},
  "theme": {{ "value": "deeppurple-amber", "description": "theme" }},
  "file_logging_enabled": {{ "value": "{}", "description": "file logging" }}
}}"#,
        if file_logging { "True" } else { "False" }
    );
    let path = dir.join("config.json");
    fs::write(&path, cfg).unwrap();
    path
}

pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn build_context(dir: &Path) -> AppContext {
    AppContext::new_with_paths(dir.join("config.json"), dir.join("logs"))
        .expect("context should build")
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir.join("logs")).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
