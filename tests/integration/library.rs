use std::fs;

use termcal::app::App;
use termcal::chart::calendar_chart::{CalendarChart, CalendarSource};
use termcal::chart::strategy::make_chart_strategy;
use termcal::chart::target::MemoryTarget;
use termcal::core::cli::{CliCommand, RenderRequest};
use termcal::core::models::ScheduleContext;
use termcal::core::persist::{load_records, load_term};
use termcal::core::types::{ChartMode, SlotOrder};
use termcal::schedule::ScheduleDatasource;
use termcal::schedule::term::TermSchedule;
use termcal::ui::output::SharedBuffer;

use crate::common::{build_context, make_temp_dir, write_config, write_records, write_term};

#[test]
fn app_renders_term_into_writer() {
    let dir = make_temp_dir("library");
    write_config(&dir, false);
    let records = write_records(&dir);
    let term = write_term(&dir);

    let buffer = SharedBuffer::new();
    let mut app = App::new(build_context(&dir), buffer.clone());
    let mut request = RenderRequest::new(records, term);
    request.no_color = true;
    request.list_lessons = true;
    app.run(&CliCommand::Term(request)).unwrap();

    let text = buffer.contents();
    assert!(text.contains("2024 AUTUMN"));
    assert!(text.contains("17 day(s), 9 period-pair(s), scale 0-5"));
    assert!(text.contains("LESSONS"));
    assert!(text.contains("2024-10-08 | TUE | (AM) | 1-10"));
}

#[test]
fn app_set_config_updates_context() {
    let dir = make_temp_dir("library");
    write_config(&dir, false);

    let mut app = App::new(build_context(&dir), SharedBuffer::new());
    app.run(&CliCommand::SetConfig {
        key: "color_scale_floor".into(),
        value: "7".into(),
    })
    .unwrap();

    assert_eq!(app.context().config.color_scale_floor(), 7);
    let saved = fs::read_to_string(dir.join("config.json")).unwrap();
    assert!(saved.contains("\"value\": 7"));
}

#[test]
fn loaded_files_aggregate_into_a_term() {
    let dir = make_temp_dir("library");
    let records = load_records(&write_records(&dir)).unwrap();
    let term = load_term(&write_term(&dir)).unwrap();

    let schedule = TermSchedule::new(&term, &records);
    assert_eq!(schedule.day_schedules().len(), 17);
    assert_eq!(schedule.day_schedules_with_lessons().len(), 3);
    assert_eq!(schedule.total_lesson_spans(), 9);
    assert_eq!(schedule.max_lesson_spans(), 5);

    let months: Vec<String> = term.months().iter().map(|m| m.label()).collect();
    assert_eq!(months, vec!["2024-09", "2024-10"]);
}

#[test]
fn slot_order_changes_which_record_wins() {
    let dir = make_temp_dir("library");
    let term = load_term(&write_term(&dir)).unwrap();
    let path = dir.join("unsorted.json");
    fs::write(
        &path,
        r#"[
  { "date": "20240923", "day_of_week": 1, "weekno": 1, "period_start": 5, "period_end": 6 },
  { "date": "20240923", "day_of_week": 1, "weekno": 1, "period_start": 1, "period_end": 2 }
]"#,
    )
    .unwrap();
    let records = load_records(&path).unwrap();

    let sorted = TermSchedule::with_order(&term, &records, SlotOrder::ByPeriodStart);
    let as_given = TermSchedule::with_order(&term, &records, SlotOrder::AsGiven);
    assert_eq!(sorted.total_lesson_spans(), 2);
    assert_eq!(as_given.total_lesson_spans(), 1);
}

#[test]
fn chart_refresh_uses_month_source() {
    let dir = make_temp_dir("library");
    let records = load_records(&write_records(&dir)).unwrap();
    let term = load_term(&write_term(&dir)).unwrap();
    let month = TermSchedule::new(&term, &records)
        .month_schedule(2024, 10)
        .unwrap();
    assert!(month.input_data_ready());

    let target = MemoryTarget::new();
    let state = target.state();
    let mut chart = CalendarChart::new(make_chart_strategy(
        ChartMode::Lessons,
        ScheduleContext::default(),
    ));
    chart.reset_target(Box::new(target));
    assert!(chart.refresh(&month).unwrap());

    let state = state.borrow();
    let data = state.last().unwrap();
    assert_eq!(data.len(), 31);
    assert_eq!(data.heatmap[7].value, 5);
    assert!(data.heatmap[7].tooltip.starts_with("(AM)1-10\n        Field trip\n"));
    assert_eq!(data.heatmap[0].tooltip, "(AM)3-4\n        History\n");
}
