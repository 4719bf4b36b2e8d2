//! Integration tests for Settings layered loading.
//!
//! Precedence: defaults < global file < explicit file < PATTERNS_* env vars.
//! Env overrides are covered in config_env_test.rs (separate process, so
//! setting variables cannot leak into these tests).

use std::fs;

use tempfile::TempDir;

use patterns::application::{ApplicationError, TreeStyle};
use patterns::config::Settings;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_files_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();
    let missing_global = dir.path().join("absent.toml");

    let settings = Settings::load_from(Some(&missing_global), None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "indent_width = 2\ncallers = 3\n");

    let settings = Settings::load_from(Some(&global), None).expect("load settings");

    assert_eq!(settings.indent_width, 2);
    assert_eq!(settings.callers, 3);
    assert_eq!(settings.banner_width, 80, "unspecified field keeps default");
}

#[test]
fn given_global_and_explicit_file_when_load_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "indent_width = 2\ncallers = 3\n");
    let local = write_config(
        &dir,
        "local.toml",
        "indent_width = 8\ntree_style = \"tree\"\nproviders = [\"yandex\"]\n",
    );

    let settings = Settings::load_from(Some(&global), Some(&local)).expect("load settings");

    assert_eq!(settings.indent_width, 8);
    assert_eq!(settings.callers, 3, "global value survives");
    assert_eq!(settings.tree_style, TreeStyle::Tree);
    assert_eq!(settings.providers, vec!["yandex"]);
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = Settings::load_from(None, Some(&missing));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let bad = write_config(&dir, "bad.toml", "indent_width = \"wide\"\n");

    let err = Settings::load_from(None, Some(&bad)).unwrap_err();

    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn given_unknown_provider_in_file_when_load_then_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_config(&dir, "p.toml", "providers = [\"google\", \"github\"]\n");

    let err = Settings::load_from(None, Some(&file)).unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(_)));
    assert!(err.to_string().contains("github"));
}

#[test]
fn given_oversized_indent_when_load_then_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_config(&dir, "i.toml", "indent_width = 40\n");

    let result = Settings::load_from(None, Some(&file));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
