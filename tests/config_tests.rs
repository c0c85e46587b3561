//! Integration tests for configuration management

use course_gpa::config::{Backend, Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.storage.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert_eq!(config.backend(), Backend::File);
}

#[test]
fn test_defaults_expand_config_dir() {
    let config = Config::from_defaults();
    let dir = Config::get_coursegpa_dir();

    assert!(!config.storage.data_dir.contains("$COURSE_GPA"));
    assert!(config
        .storage
        .data_dir
        .starts_with(dir.to_string_lossy().as_ref()));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[storage]
backend = "memory"
data_dir = "/tmp/gpa-data"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.backend(), Backend::Memory);
    assert_eq!(config.storage.data_dir, "/tmp/gpa-data");
}

#[test]
fn test_config_from_toml_missing_sections() {
    let config = Config::from_toml("").expect("Failed to parse empty TOML");

    assert!(config.logging.level.is_empty());
    assert!(config.storage.data_dir.is_empty());
    assert_eq!(config.backend(), Backend::File);
}

#[test]
fn test_config_from_toml_rejects_wrong_types() {
    let toml_str = r#"
[logging]
verbose = "sometimes"
"#;
    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_expands_variable() {
    let toml_str = r#"
[logging]
level = "warn"
file = "$COURSE_GPA/logs/run.log"
verbose = false

[storage]
backend = "file"
data_dir = "$COURSE_GPA/data"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let dir = Config::get_coursegpa_dir();

    assert_eq!(
        PathBuf::from(&config.logging.file),
        dir.join("logs").join("run.log")
    );
    assert_eq!(config.courses_path(), dir.join("data").join("courses.toml"));
    assert_eq!(
        config.questions_path(),
        dir.join("data").join("questions.toml")
    );
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "info").expect("Failed to set level");
    assert_eq!(config.get("level"), Some("info".to_string()));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config.set("backend", "memory").expect("Failed to set backend");
    assert_eq!(config.get("backend"), Some("memory".to_string()));

    config
        .set("data-dir", "/srv/gpa")
        .expect("Failed to set data-dir");
    assert_eq!(config.get("data_dir"), Some("/srv/gpa".to_string()));
    assert_eq!(config.get("data-dir"), Some("/srv/gpa".to_string()));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("backend", "postgres").is_err());

    assert_eq!(config, before);
}

#[test]
fn test_config_set_normalizes_level() {
    let mut config = Config::from_defaults();
    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("backend", "memory").expect("Failed to set backend");
    assert_eq!(config.backend(), Backend::Memory);

    config
        .unset("backend", &defaults)
        .expect("Failed to unset backend");
    assert_eq!(config.storage.backend, defaults.storage.backend);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("backend", "memory").expect("Failed to set backend");

    // Written by hand so the user's real config file stays untouched
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.backend(), Backend::Memory);
    assert_eq!(loaded.storage.data_dir, config.storage.data_dir);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        backend: Some("memory".to_string()),
        data_dir: Some("./custom_data".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.backend(), Backend::Memory);
    assert_eq!(config.storage.data_dir, "./custom_data");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.storage, defaults.storage);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[storage]"));
    assert!(display_str.contains("level"));
    assert!(display_str.contains("backend"));
    assert!(display_str.contains("data_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.storage.data_dir, defaults.storage.data_dir);
    assert_eq!(config.storage.backend, defaults.storage.backend);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[storage]
backend = "memory"
data_dir = "/my/data"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.storage.backend, "memory");
    assert_eq!(config.storage.data_dir, "/my/data");
}

#[test]
fn test_get_coursegpa_dir() {
    let dir = Config::get_coursegpa_dir();

    assert!(dir.to_string_lossy().contains("coursegpa"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
