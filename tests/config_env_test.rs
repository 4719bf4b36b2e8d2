//! Env var overrides for Settings, isolated in their own test binary.

use std::env;
use std::sync::Mutex;

use patterns::application::{ApplicationError, TreeStyle};
use patterns::config::Settings;

/// Tests in this binary mutate process env; hold this while they do.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn load_with_env(vars: &[(&str, &str)]) -> Result<Settings, ApplicationError> {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for (key, val) in vars {
        env::set_var(key, val);
    }

    let settings = Settings::load_from(None, None);

    for (key, _) in vars {
        env::remove_var(key);
    }
    settings
}

#[test]
fn given_env_vars_when_load_then_override_file_values() {
    let settings = load_with_env(&[
        ("PATTERNS_INDENT_WIDTH", "6"),
        ("PATTERNS_PROVIDERS", "yandex,google"),
        ("PATTERNS_TREE_STYLE", "tree"),
    ])
    .expect("load settings");

    assert_eq!(settings.indent_width, 6);
    assert_eq!(settings.providers, vec!["yandex", "google"]);
    assert_eq!(settings.tree_style, TreeStyle::Tree);
    assert_eq!(settings.callers, 10);
}

#[test]
fn given_non_numeric_indent_env_when_load_then_config_error() {
    let result = load_with_env(&[("PATTERNS_INDENT_WIDTH", "wide")]);

    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("PATTERNS_INDENT_WIDTH"), "{message}");
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_negative_callers_env_when_load_then_config_error() {
    let result = load_with_env(&[("PATTERNS_CALLERS", "-3")]);

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_unknown_tree_style_env_when_load_then_config_error() {
    let result = load_with_env(&[("PATTERNS_TREE_STYLE", "fancy")]);

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
