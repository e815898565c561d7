use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_qlang").to_string()
}

fn qlang(dir: &Path, args: &[&str]) -> Output {
    let cfg = dir.join("config.toml");
    fs::write(&cfg, "color = false\n").unwrap();
    Command::new(bin())
        .arg("--config")
        .arg(&cfg)
        .arg("--no-color")
        .args(args)
        .output()
        .expect("run")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn eval_prints_final_queue() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(&qlang(dir.path(), &["eval", "5 x = x *"]));
    assert!(out.contains("  N \"5\"\n"), "unexpected output:\n{out}");
}

#[test]
fn eval_reports_undefined_symbol() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(&qlang(dir.path(), &["eval", "y *"]));
    assert!(out.contains("warn: Symbol undefined: y"), "unexpected output:\n{out}");
    assert!(out.contains("  E \"\""));
}

#[test]
fn eval_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(&qlang(dir.path(), &["eval", "--json", "5 x = x *"]));
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(v["state"], "NONE");
    assert_eq!(v["token"], "");
    assert_eq!(v["queue"], serde_json::json!([{ "kind": "number", "text": "5" }]));
    assert_eq!(v["symbols"]["x"]["text"], "5");
}

#[test]
fn eval_reads_program_file_across_lines() {
    let dir = tempfile::tempdir().unwrap();
    let prog = dir.path().join("prog.q");
    fs::write(&prog, "\"two\nlines\" msg =\nmsg *\n").unwrap();
    let out = stdout_of(&qlang(dir.path(), &["eval", "--file", prog.to_str().unwrap()]));
    assert!(out.contains("  T \"\\\"two\\nlines\\\"\""), "unexpected output:\n{out}");
}

#[test]
fn tokens_lists_one_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(&qlang(dir.path(), &["tokens", "\"a\" 1 x"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["T \"\\\"a\\\"\"", "N \"1\"", "S \"x\""]);
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = Command::new(bin())
        .arg("--config")
        .arg(&missing)
        .args(["eval", "1"])
        .output()
        .expect("run");
    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.toml"), "stderr:\n{stderr}");
}
