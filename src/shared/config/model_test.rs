use std::fs;

use indoc::indoc;
use tempfile::tempdir;

use crate::shared::config::load_settings_from;

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("absent");

    let settings = load_settings_from(path.to_str().unwrap()).expect("defaults load");
    assert_eq!(settings.query.table, "DecayTree");
    assert_eq!(settings.query.columns, ["H1_PX", "H1_PY", "H1_PZ"]);
    assert_eq!(settings.query.bucket_width, 10_000);
    assert_eq!(settings.query.passes, 3);
    assert_eq!(settings.storage.rows_per_block, 65_536);
    assert_eq!(settings.logging.console_level, "warn");
    assert!(settings.logging.log_dir.is_none());
}

#[test]
fn config_file_overrides_selected_keys() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("colscan.toml");
    fs::write(
        &path,
        indoc! {r#"
            [query]
            table = "Events"
            passes = 5

            [logging]
            console_level = "debug"
        "#},
    )
    .unwrap();

    let settings = load_settings_from(path.to_str().unwrap()).expect("file load");
    assert_eq!(settings.query.table, "Events");
    assert_eq!(settings.query.passes, 5);
    assert_eq!(settings.query.bucket_width, 10_000);
    assert_eq!(settings.logging.console_level, "debug");
    assert_eq!(settings.logging.file_level, "info");
}

#[test]
fn zero_bucket_width_is_rejected() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("bad.toml");
    fs::write(&path, "[query]\nbucket_width = 0\n").unwrap();

    let err = load_settings_from(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("bucket_width"));
}
