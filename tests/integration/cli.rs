use std::fs;

use crate::common::{
    make_temp_dir, read_log_contents, run, stderr_of, stdout_of, write_config, write_records,
    write_term,
};

#[test]
fn no_arguments_prints_usage() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &[]);
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Usage: termcal"));
}

#[test]
fn term_prints_calendar_and_summary() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_records(&dir);
    write_term(&dir);

    let output = run(&dir, &["term", "records.json", "term.json", "--no-color"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("2024 AUTUMN"));
    assert!(stdout.contains("MON   | TUE   | WED"));
    assert!(stdout.contains("17 day(s), 9 period-pair(s), scale 0-5"));
    assert!(!stdout.contains('\x1B'));
}

#[test]
fn overlapping_records_are_reported_on_stderr() {
    let dir = make_temp_dir("cli");
    write_config(&dir, false);
    write_records(&dir);
    write_term(&dir);

    let output = run(&dir, &["term", "records.json", "term.json"]);
    assert!(output.status.success());
    assert!(
        stderr_of(&output)
            .contains("WARN: 1 overlapping or out-of-range record(s) were not placed.")
    );
    assert!(stdout_of(&output).contains('\x1B'));
    assert!(!dir.join("logs").exists());
}

#[test]
fn records_outside_term_weeks_are_counted_as_not_placed() {
    let dir = make_temp_dir("cli");
    write_config(&dir, false);
    write_term(&dir);
    let records = r#"[
  { "date": "20240924", "day_of_week": 2, "weekno": 1, "period_start": 1, "period_end": 2 },
  { "date": "20241105", "day_of_week": 2, "weekno": 7, "period_start": 1, "period_end": 2 },
  { "date": "20241015", "day_of_week": 2, "weekno": 3, "period_start": 3, "period_end": 4 }
]"#;
    fs::write(dir.join("records.json"), records).unwrap();

    let output = run(&dir, &["term", "records.json", "term.json", "--no-color"]);
    assert!(output.status.success());
    assert!(
        stderr_of(&output)
            .contains("WARN: 2 overlapping or out-of-range record(s) were not placed.")
    );
}

#[test]
fn stats_export_writes_chart_json() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_records(&dir);
    write_term(&dir);

    let output = run(
        &dir,
        &["term", "records.json", "term.json", "--stats", "--export", "out/chart.json"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("Chart data exported to out/chart.json"));

    let chart: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("out/chart.json")).unwrap()).unwrap();
    let heatmap = chart["heatmap"].as_array().unwrap();
    assert_eq!(heatmap.len(), 17);
    assert_eq!(heatmap[1]["date"], "2024-09-24");
    assert_eq!(heatmap[1]["tooltip"], "2024-09-24: 3 period-pair(s)");
    assert_eq!(chart["annotations"][0]["text"], serde_json::Value::Null);
    assert_eq!(chart["visual"]["max"], 5);
    assert_eq!(chart["title"], "2024 Autumn");
}

#[test]
fn month_limits_calendar_to_the_month() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_records(&dir);
    write_term(&dir);

    let output = run(
        &dir,
        &["month", "records.json", "term.json", "2024-10", "--no-color"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("2024-10"));
    assert!(stdout.contains("31 day(s), 6 period-pair(s), scale 0-5"));

    let output = run(
        &dir,
        &["month", "records.json", "term.json", "2024-09", "--no-color"],
    );
    assert!(stdout_of(&output).contains("30 day(s), 3 period-pair(s), scale 0-4"));
}

#[test]
fn month_outside_term_draws_nothing() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_records(&dir);
    write_term(&dir);

    let output = run(&dir, &["month", "records.json", "term.json", "2025-01"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("No term weeks fall in 2025-01; nothing to draw."));
}

#[test]
fn lessons_table_hides_context_columns() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_records(&dir);
    write_term(&dir);

    let output = run(
        &dir,
        &[
            "term", "records.json", "term.json", "--lessons", "--context", "teacher", "--no-color",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("LESSONS"));
    assert!(stdout.contains("Algebra"));
    assert!(stdout.contains("Field trip"));
    assert!(!stdout.contains("Overlap"));
    assert!(!stdout.contains("TEACHER"));
    assert!(!stdout.contains("Ms Lee"));
}

#[test]
fn config_set_persists_and_is_shown() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);

    let output = run(&dir, &["config", "set", "CELL_SIZE", "48"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("Config CELL_SIZE changed from '70' to '48'."));

    let output = run(&dir, &["config"]);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("CELL_SIZE"));
    assert!(stdout.contains("48"));
    assert!(stdout.contains("Config path: config.json"));

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Config CELL_SIZE changed"));
}

#[test]
fn config_defaults_when_file_is_missing() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["config"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("by-period-start"));
    assert!(!dir.join("config.json").exists());
}

#[test]
fn invalid_config_value_lists_options() {
    let dir = make_temp_dir("cli");
    write_config(&dir, false);

    let output = run(&dir, &["config", "set", "THEME", "neon"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Possible values:"));
    assert!(stderr.contains("indigo-pink"));
    assert!(stderr.contains("Invalid theme: 'neon'"));
}

#[test]
fn unknown_command_exits_with_usage_error() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["render"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Unknown command 'render'"));
}

#[test]
fn missing_records_file_fails() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_term(&dir);

    let output = run(&dir, &["term", "nope.json", "term.json"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("'term' failed"));
    assert!(stderr.contains("Cannot read records file 'nope.json'"));

    let log = read_log_contents(&dir).expect("errors are logged to file");
    assert!(log.contains("ERROR"));
}

#[test]
fn custom_logs_dir_is_used() {
    let dir = make_temp_dir("cli");
    write_config(&dir, true);
    write_records(&dir);
    write_term(&dir);

    let output = run(
        &dir,
        &["--logs", "session-logs", "term", "records.json", "term.json"],
    );
    assert!(output.status.success());
    let entries: Vec<_> = fs::read_dir(dir.join("session-logs")).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(!dir.join("logs").exists());
}
