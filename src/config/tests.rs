use super::{Config, ConfigKey, models::*};
use crate::core::types::{Bool, SlotOrder, ThemeKey};
use crate::errors::Error;
use crate::extensions::enums::valid_csv;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("termcal-config-test-{nanos}-{uniq}.json"))
}

fn sample_config_file(path: &std::path::Path) {
    let json = r#"{
  "slot_order": { "value": "as-given", "description": "order" },
  "color_scale_floor": { "value": 6, "description": "floor" },
  "cell_size": { "value": 48, "description": "cell" },
  "theme": { "value": "indigo-pink", "description": "theme" },
  "file_logging_enabled": { "value": "False", "description": "file logging" }
}"#;
    fs::write(path, json).unwrap();
}

#[test]
fn load_from_reads_config_and_rows() {
    let path = temp_path();
    sample_config_file(&path);
    let cfg = Config::load_from(&path).expect("config should load");

    assert_eq!(cfg.slot_order(), SlotOrder::AsGiven);
    assert_eq!(cfg.color_scale_floor(), 6);
    assert_eq!(cfg.cell_size(), 48);
    assert_eq!(cfg.theme(), ThemeKey::IndigoPink);
    assert!(!cfg.file_logging_enabled());

    let rows = cfg.rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0, "SLOT_ORDER");
    assert_eq!(rows[0].2, "as-given");
    assert!(rows.iter().any(|(k, _, v)| k == "THEME" && v == "indigo-pink"));
}

#[test]
fn load_from_reports_missing_file() {
    let path = temp_path();
    let err = Config::load_from(&path).unwrap_err();
    match err {
        Error::Config(msg) => {
            let expected = format!("Configuration file '{}' not found.", path.display());
            assert_eq!(msg, expected);
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn load_from_reports_invalid_json() {
    let path = temp_path();
    fs::write(&path, "{").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    match err {
        Error::Config(msg) => {
            let prefix = format!("Invalid JSON in '{}':", path.display());
            assert!(msg.starts_with(&prefix));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn missing_items_fall_back_to_defaults() {
    let path = temp_path();
    fs::write(&path, r#"{ "cell_size": { "value": 90, "description": "cell" } }"#).unwrap();
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.cell_size(), 90);
    assert_eq!(cfg.slot_order(), SlotOrder::ByPeriodStart);
    assert_eq!(cfg.color_scale_floor(), 4);
    assert_eq!(cfg.theme(), ThemeKey::DeeppurpleAmber);
    assert!(cfg.file_logging_enabled());
}

#[test]
fn load_or_default_does_not_create_file() {
    let path = temp_path();
    let cfg = Config::load_or_default(&path).unwrap();
    assert_eq!(cfg.cell_size(), 70);
    assert_eq!(cfg.path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn set_key_saves_and_records_change() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();

    cfg.set_key(ConfigKey::ColorScaleFloor, "8").unwrap();
    assert_eq!(cfg.color_scale_floor(), 8);
    assert_eq!(
        cfg.take_last_change(),
        Some(("COLOR_SCALE_FLOOR".into(), "4".into(), "8".into()))
    );
    assert!(cfg.take_last_change().is_none());

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.color_scale_floor(), 8);
}

#[test]
fn set_accepts_case_insensitive_key() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();
    cfg.set("theme", "purple-green").unwrap();
    assert_eq!(cfg.theme(), ThemeKey::PurpleGreen);
}

#[test]
fn set_rejects_unknown_key() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();
    let err = cfg.set("COLOUR", "x").unwrap_err();
    match err {
        Error::Parse(msg) => {
            assert!(msg.contains("Unknown configuration key 'COLOUR'"));
            assert!(msg.contains(&valid_csv::<ConfigKey>()));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn set_by_index_maps_to_key_order() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();
    cfg.set_by_index(2, "55").unwrap();
    assert_eq!(cfg.cell_size(), 55);

    let err = cfg.set_by_index(9, "1").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn set_many_is_all_or_nothing() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();

    let err = cfg
        .set_many([("CELL_SIZE", "80"), ("COLOR_SCALE_FLOOR", "zero")])
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(cfg.cell_size(), 70);
    assert!(!path.exists());

    cfg.set_many([("CELL_SIZE", "80"), ("SLOT_ORDER", "as-given")])
        .unwrap();
    assert_eq!(cfg.cell_size(), 80);
    assert_eq!(cfg.slot_order(), SlotOrder::AsGiven);
    assert!(path.exists());
}

#[test]
fn positive_items_reject_zero() {
    let mut item = ColorScaleFloorConfigItem::default();
    let err = item.set_value("0").unwrap_err();
    match err {
        Error::Parse(msg) => assert!(msg.contains("color scale floor")),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(*item.get_value(), 4);
}

#[test]
fn cell_size_rejects_oversized_values() {
    let path = temp_path();
    let mut cfg = Config::load_or_default(&path).unwrap();
    let err = cfg.set("CELL_SIZE", "4294967295").unwrap_err();
    match err {
        Error::Parse(msg) => assert!(msg.contains("at most 1000")),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(cfg.cell_size(), 70);
    assert!(!path.exists());

    cfg.set("CELL_SIZE", &MAX_CELL_SIZE.to_string()).unwrap();
    assert_eq!(cfg.cell_size(), MAX_CELL_SIZE);
    let _ = fs::remove_file(&path);
}

#[test]
fn file_logging_item_parses_text_bool() {
    let mut item = FileLoggingConfigItem::default();
    item.set_value("false").unwrap();
    assert_eq!(*item.get_value(), Bool(false));
    assert!(item.set_value("maybe").is_err());
}
