//! Integration tests for configuration management

use markify::config::{Config, ConfigOverrides};
use markify::core::internal::AssignmentDefault;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.grading.assignment_default, "zero");
    assert_eq!(config.grading.program_length, 8);
    assert!(
        config.paths.exports_dir.ends_with("exports"),
        "Default exports_dir should live under the config dir"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
assignment_default = "full"
program_length = 6

[paths]
exports_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.assignment_default(), AssignmentDefault::Full);
    assert_eq!(config.program_length(), 6);
    assert_eq!(config.paths.exports_dir, "./exports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.grading.assignment_default, "");
    assert_eq!(config.grading.program_length, 0);
    assert_eq!(config.assignment_default(), AssignmentDefault::Zero);
    assert_eq!(config.program_length(), 8);
}

#[test]
fn test_config_from_toml_rejects_wrong_types() {
    let toml_str = r#"
[logging]
level = "warn"

[grading]
program_length = "eight"
"#;

    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$MARKIFY/test.log"

[paths]
exports_dir = "$MARKIFY/out"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("markify"));
    assert!(!config.logging.file.contains("$MARKIFY"));
    assert!(config.paths.exports_dir.ends_with("out"));
    assert!(!config.paths.exports_dir.contains("$MARKIFY"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    config
        .set("assignment_default", "full")
        .expect("Failed to set assignment_default");
    assert_eq!(config.get("assignment-default").unwrap(), "full");

    config
        .set("exports_dir", "/srv/markify")
        .expect("Failed to set exports_dir");
    assert_eq!(config.get("exports_dir").unwrap(), "/srv/markify");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("program_length", "10").expect("Failed to set program_length");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("program_length", &defaults)
        .expect("Failed to unset program_length");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.grading.program_length, defaults.grading.program_length);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("assignment_default", "full")
        .expect("Failed to set assignment_default");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.assignment_default(), AssignmentDefault::Full);
    assert_eq!(loaded.paths.exports_dir, config.paths.exports_dir);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        assignment_default: Some("full".to_string()),
        program_length: Some(10),
        exports_dir: Some("./custom_exports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.assignment_default(), AssignmentDefault::Full);
    assert_eq!(config.program_length(), 10);
    assert_eq!(config.paths.exports_dir, "./custom_exports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, before.logging.file);
    assert_eq!(config.grading.program_length, before.grading.program_length);
    assert_eq!(config.paths.exports_dir, before.paths.exports_dir);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("assignment_default = \"zero\""));
    assert!(display_str.contains("program_length = 8"));
    assert!(display_str.contains("exports_dir"));
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

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.grading.assignment_default, "zero");
    assert_eq!(config.grading.program_length, 8);
    assert_eq!(config.paths.exports_dir, defaults.paths.exports_dir);

    assert!(!config.merge_defaults(&defaults), "second merge is a no-op");
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[grading]
assignment_default = "full"
program_length = 10

[paths]
exports_dir = "/my/exports"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.grading.assignment_default, "full");
    assert_eq!(config.grading.program_length, 10);
    assert_eq!(config.paths.exports_dir, "/my/exports");
}

#[test]
fn test_get_markify_dir() {
    let dir = Config::get_markify_dir();

    assert!(dir.to_string_lossy().contains("markify"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
