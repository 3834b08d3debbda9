//! Runs every vignette through the public catalog, the way the binary does.

use std::fs;

use tempfile::TempDir;

use design_patterns::logging::init_test_logging;
use design_patterns::{DemoConfig, Pattern, PatternError};

/// Config whose filesystem-facing demos stay inside `dir`.
fn sandboxed(dir: &TempDir) -> DemoConfig {
    let mut config = DemoConfig::default();
    config.command.workdir = dir.path().join("work");
    config.interpreter.root = dir.path().join("search");
    fs::create_dir_all(&config.command.workdir).unwrap();
    fs::create_dir_all(&config.interpreter.root).unwrap();
    config
}

#[test]
fn given_default_inputs_when_running_all_then_every_pattern_produces_output() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = sandboxed(&dir);

    for pattern in Pattern::ALL {
        let lines = pattern.run(&config).unwrap();
        assert!(!lines.is_empty(), "{} printed nothing", pattern);
    }

    // command demo cleans up after itself
    assert_eq!(fs::read_dir(&config.command.workdir).unwrap().count(), 0);
}

#[test]
fn given_composite_when_running_then_lists_preorder() {
    let lines = Pattern::Composite.run(&DemoConfig::default()).unwrap();
    assert_eq!(
        lines,
        vec![
            "/root",
            "/root/tmp",
            "/root/tmp/test_1.txt",
            "/root/tmp/test_2.txt",
            "/root/tmp/test_3.txt",
        ]
    );
}

#[test]
fn given_decorator_text_override_when_running_then_innermost_changes() {
    let config = DemoConfig::from_toml_str("[decorator]\ntext = \"bar\"\n").unwrap();
    let lines = Pattern::Decorator.run(&config).unwrap();
    assert_eq!(lines[0], "<div><center><strong>bar</strong></center></div>");
    assert_eq!(lines[1], "<center><strong>bar</strong></center>");
}

#[test]
fn given_custom_salaries_when_running_observer_then_one_round_per_salary() {
    let config = DemoConfig::from_toml_str(
        r#"
        [observer]
        employee = "Hanako"
        salaries = [1, 2, 3]
        "#,
    )
    .unwrap();
    let lines = Pattern::Observer.run(&config).unwrap();
    let rounds: Vec<&String> = lines.iter().filter(|l| l.starts_with("salary")).collect();
    assert_eq!(rounds, vec!["salary = 1", "salary = 2", "salary = 3"]);
    assert!(lines.iter().any(|l| l.contains("tax bill to Hanako")));
}

#[test]
fn given_matching_files_when_running_interpreter_then_lists_them() {
    let dir = TempDir::new().unwrap();
    let mut config = sandboxed(&dir);
    config.interpreter.file_name = "*.txt".to_string();
    fs::write(config.interpreter.root.join("keep.txt"), "").unwrap();
    fs::write(config.interpreter.root.join("skip.md"), "").unwrap();

    let lines = Pattern::Interpreter.run(&config).unwrap();

    assert!(lines[0].starts_with("1 files matching '*.txt'"));
    assert!(lines[1].ends_with("keep.txt"));
}

#[test]
fn given_bad_permission_when_running_interpreter_then_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = sandboxed(&dir);
    config.interpreter.permission = "z".to_string();

    let err = Pattern::Interpreter.run(&config).unwrap_err();
    assert!(matches!(err, PatternError::InvalidPermission(_)));
}

#[test]
fn given_missing_workdir_when_running_command_then_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut config = sandboxed(&dir);
    config.command.workdir = dir.path().join("absent");

    let err = Pattern::Command.run(&config).unwrap_err();
    assert!(matches!(err, PatternError::FileNotFound(_)));
}

#[test]
fn given_config_file_when_loading_then_overrides_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.toml");
    fs::write(&path, "[report]\nlines = [\"x\", \"y\"]\n").unwrap();

    let config = DemoConfig::load(&path).unwrap();
    let lines = Pattern::TemplateMethod.run(&config).unwrap();

    assert!(lines.contains(&"<p>x</p>".to_string()));
    assert!(lines.contains(&"y".to_string()));
}
