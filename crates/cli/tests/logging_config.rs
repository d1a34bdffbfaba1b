use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("etpl.log");
    let store = root.join("vars.json");
    let template = root.join("t.txt");
    fs::write(&template, "Hi {{who|text}}").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[store]
path = "{}"

[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        store.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("etpl"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["render", "--batch", "--var", "who=Ada"])
        .arg(&template)
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("parsed template"), "log was: {log}");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[store]
path = "{}"

[logging]
level = "not-a-level"
"#,
        root.join("vars.json").display()
    );
    fs::write(&config_path, &config_content).unwrap();

    // Unknown levels fall back to the default instead of failing
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("etpl"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();
}
