//! Tests for loading configuration files.

use std::io::Write;
use tasklist::config::Config;
use tasklist::types::DEFAULT_PRIORITY;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn load_reads_all_sections() {
    let file = write_config(
        "tasks:\n  default_priority: -3\nui:\n  color: false\n  clear_screen: false\n",
    );

    let config = Config::load(file.path()).expect("Failed to load config");

    assert_eq!(config.tasks.default_priority, -3);
    assert!(!config.ui.color);
    assert!(!config.ui.clear_screen);
}

#[test]
fn load_empty_file_gives_defaults() {
    let file = write_config("");

    let config = Config::load(file.path()).expect("Failed to load config");

    assert_eq!(config, Config::default());
    assert_eq!(config.tasks.default_priority, DEFAULT_PRIORITY);
    assert!(config.ui.color);
}

#[test]
fn load_missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.yaml");

    let err = Config::load(&path).expect_err("missing file should fail");

    assert!(format!("{err:#}").contains("missing.yaml"));
}

#[test]
fn load_or_default_without_path() {
    let config = Config::load_or_default(None).expect("defaults should load");
    assert_eq!(config, Config::default());
}

#[test]
fn load_rejects_malformed_yaml() {
    let file = write_config("ui: [unterminated\n");
    assert!(Config::load(file.path()).is_err());
}
