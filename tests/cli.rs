use std::io::Write;
use std::process::{Command, Output, Stdio};

fn walktrace(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_walktrace"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn walktrace");
    // The child may exit before reading stdin when argument parsing fails.
    let _ = child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait for walktrace")
}

#[test]
fn silent_by_default() {
    let out = walktrace(&[], "3\n");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn zero_nodes_exits_cleanly() {
    let out = walktrace(&["--emit"], "0");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "\n");
}

#[test]
fn emits_depth_bounded_trace() {
    let out = walktrace(&["--emit", "--max-depth", "5"], "3");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "0 0 0 0 0\n");
}

#[test]
fn emits_json_report() {
    let out = walktrace(&["--emit", "--format", "json", "--max-trace", "2"], "1");
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["node_count"], 1);
    assert_eq!(report["mode"], "literal");
    assert_eq!(report["trace"], serde_json::json!([0, 0]));
    assert_eq!(report["truncated"], true);
}

#[test]
fn garbage_input_still_succeeds() {
    let out = walktrace(&["--emit"], "not-a-number");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "\n");
}

#[test]
fn config_file_is_overridden_by_flags() {
    let dir = std::env::temp_dir().join(format!("walktrace-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.json");
    std::fs::write(&path, r#"{ "emit": true, "bound": { "max_depth": 2 } }"#).unwrap();

    let out = walktrace(&["--config", path.to_str().unwrap()], "4");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "0 0\n");

    let out = walktrace(&["--config", path.to_str().unwrap(), "--max-depth", "3"], "4");
    assert_eq!(String::from_utf8_lossy(&out.stdout), "0 0 0\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_config_file_fails() {
    let out = walktrace(&["--config", "/nonexistent/walktrace.json"], "1");
    assert!(!out.status.success());
}

#[test]
fn unbounded_conflicts_with_explicit_bounds() {
    let out = walktrace(&["--unbounded", "--max-depth", "2"], "1");
    assert!(!out.status.success());
}
