//! End-to-end tests for the `hvigorw-doctor` binary.

#![cfg(unix)]

use std::fs;

use tempfile::TempDir;

/// Project tree with a vendored entry and `sh` standing in for node.
fn ready_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let bin_dir = root.join("node_modules/@ohos/hvigor/bin");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::write(bin_dir.join("hvigor.js"), "// entry\n").unwrap();
    fs::write(
        root.join("node_modules/@ohos/hvigor/package.json"),
        r#"{"name": "@ohos/hvigor", "version": "2.4.2"}"#,
    )
    .unwrap();

    fs::write(root.join("hvigorw.toml"), "[wrapper]\nnode_bin = \"sh\"\n").unwrap();

    dir
}

fn doctor() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("hvigorw-doctor").unwrap()
}

#[test]
fn ready_project_passes() {
    let project = ready_project();

    let output = doctor()
        .args(["check", "--project"])
        .arg(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("hvigor"));
    assert!(stdout.contains("Ready"));
}

#[test]
fn missing_vendored_tool_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("hvigorw.toml"),
        "[wrapper]\nnode_bin = \"sh\"\n",
    )
    .unwrap();

    let output = doctor()
        .args(["check", "--project"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("npm install"));
}

#[test]
fn json_report_is_machine_readable() {
    let project = ready_project();

    let output = doctor()
        .args(["check", "--json", "--project"])
        .arg(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["all_required_met"], serde_json::Value::Bool(true));
    assert_eq!(report["checks"][1]["name"], "hvigor");
    assert_eq!(report["checks"][1]["installed_version"], "2.4.2");
}

#[test]
fn check_is_the_default_subcommand() {
    let project = ready_project();

    doctor()
        .current_dir(project.path())
        .assert()
        .success();
}

#[test]
fn outdated_runtime_version_fails_the_check() {
    use std::os::unix::fs::PermissionsExt;

    let project = ready_project();

    // Fake runtime that reports an ancient version.
    let fake_node = project.path().join("fake-node");
    fs::write(&fake_node, "#!/bin/sh\necho v12.22.0\n").unwrap();
    fs::set_permissions(&fake_node, fs::Permissions::from_mode(0o755)).unwrap();

    fs::write(
        project.path().join("hvigorw.toml"),
        format!(
            "[wrapper]\nnode_bin = \"{}\"\nnode_version = \">=14.19.1\"\n",
            fake_node.display()
        ),
    )
    .unwrap();

    let output = doctor()
        .args(["check", "--project"])
        .arg(project.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("12.22.0"));
    assert!(stdout.contains(">=14.19.1"));
}

#[test]
fn missing_runtime_fails_the_check() {
    let project = ready_project();
    fs::write(
        project.path().join("hvigorw.toml"),
        "[wrapper]\nnode_bin = \"/nonexistent/node\"\n",
    )
    .unwrap();

    let output = doctor()
        .args(["check", "--project"])
        .arg(project.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
