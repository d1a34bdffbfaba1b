use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self { dir: tempdir().unwrap() }
    }

    fn template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("data/vars.json")
    }

    fn etpl(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("etpl"));
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config"));
        cmd.arg("--store").arg(self.store());
        cmd
    }
}

fn arg(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn check_ok_reports_variable_count() {
    let env = Env::new();
    let t = env.template("t.txt", "{{a|text}} {{b|email}} {{a|number}}");
    env.etpl()
        .args(["check", arg(&t)])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   etpl check"))
        .stdout(predicate::str::contains("2 variables"));
}

#[test]
fn check_does_not_touch_the_store() {
    let env = Env::new();
    let t = env.template("t.txt", "{{a|text}}");
    env.etpl().args(["check", arg(&t)]).assert().success();
    assert!(!env.store().exists());
}

#[test]
fn check_reports_bracket_mismatch() {
    let env = Env::new();
    let t = env.template("t.txt", "{{a|text}");
    env.etpl()
        .args(["check", arg(&t)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL etpl check"))
        .stdout(predicate::str::contains("Mismatched {{ }} brackets in template"));
}

#[test]
fn check_reports_invalid_type_with_offset() {
    let env = Env::new();
    let t = env.template("t.txt", "Dear {{a|foo}}");
    env.etpl()
        .args(["check", arg(&t)])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Invalid type \"foo\". Valid types: text, number, phone, email, url",
        ))
        .stdout(predicate::str::contains("at offset 5"));
}

#[test]
fn check_missing_file_fails() {
    let env = Env::new();
    env.etpl()
        .args(["check", "does-not-exist.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed to read template"));
}

#[test]
fn vars_lists_table() {
    let env = Env::new();
    let t = env.template("t.txt", "{{ name | text }} {{site|url}}");
    env.etpl()
        .args(["vars", arg(&t)])
        .assert()
        .success()
        .stdout(predicate::str::contains("name"))
        .stdout(predicate::str::contains("site"))
        .stdout(predicate::str::contains("url"));
}

#[test]
fn vars_json_keeps_template_order() {
    let env = Env::new();
    let t = env.template("t.txt", "{{z|phone}} {{a|number}}");
    let out = env.etpl().args(["vars", "--json", arg(&t)]).output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let z = stdout.find("\"z\"").unwrap();
    let a = stdout.find("\"a\"").unwrap();
    assert!(z < a);

    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["z"]["type"], "phone");
    assert_eq!(json["a"]["value"], "");
}

#[test]
fn render_substitutes_var_flags() {
    let env = Env::new();
    let t = env.template("t.txt", "Hello {{name|text}}!");
    env.etpl()
        .args(["render", "--batch", "--var", "name=World", arg(&t)])
        .assert()
        .success()
        .stdout(predicate::eq("Hello World!"));
}

#[test]
fn render_remembers_values_between_runs() {
    let env = Env::new();
    let first = env.template("first.txt", "{{a|text}}");
    env.etpl()
        .args(["render", "--batch", "--var", "a=x", arg(&first)])
        .assert()
        .success();

    let second = env.template("second.txt", "{{a|text}} {{b|number}}");
    env.etpl()
        .args(["render", "--batch", "--json", arg(&second)])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""output": "x ""#));
}

#[test]
fn render_literal_template_is_verbatim() {
    let env = Env::new();
    let t = env.template("t.txt", "plain text only");
    env.etpl()
        .args(["render", "--batch", arg(&t)])
        .assert()
        .success()
        .stdout(predicate::eq("plain text only"));
}

#[test]
fn render_error_json_has_empty_output() {
    let env = Env::new();
    let t = env.template("t.txt", "{{a|foo}}");
    let out = env.etpl().args(["render", "--batch", "--json", arg(&t)]).output().unwrap();
    assert!(!out.status.success());

    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["output"], "");
    assert_eq!(json["error"]["position"], 0);
    assert!(json["error"]["message"].as_str().unwrap().contains("\"foo\""));
}

#[test]
fn render_warns_on_unknown_var_flag() {
    let env = Env::new();
    let t = env.template("t.txt", "{{a|text}}");
    env.etpl()
        .args(["render", "--batch", "--var", "zzz=1", arg(&t)])
        .assert()
        .success()
        .stderr(predicate::str::contains("template has no variable 'zzz'"));
}

#[test]
fn render_rejects_malformed_var_flag() {
    let env = Env::new();
    let t = env.template("t.txt", "{{a|text}}");
    env.etpl()
        .args(["render", "--var", "novalue", arg(&t)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}
