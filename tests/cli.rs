//! End-to-end runs of the `todometer` binary against a temporary data file.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn data(&self) -> std::path::PathBuf {
        self.dir.path().join("todometer.json")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_todometer"))
            .arg("--data")
            .arg(self.data())
            .arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .args(args)
            .env_remove("TODOMETER_LOG")
            .env("RUST_LOG", "off")
            .output()
            .expect("Failed to execute command")
    }

    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_todometer"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("add-list"));
    assert!(stdout.contains("--data"));
}

#[test]
fn test_list_and_task_workflow() {
    let sandbox = Sandbox::new();

    let list_id = sandbox.ok(&["add-list", "Groceries"]);
    assert!(exists(&sandbox.data()));
    let lists = sandbox.ok(&["lists"]);
    assert!(lists.contains(&format!("* {list_id}  Groceries")));

    let task_id = sandbox.ok(&["add", "Milk", "--item", "oat", "--item", "whole"]);
    let tasks = sandbox.ok(&["tasks"]);
    assert!(tasks.starts_with("Groceries (0%)"));
    assert!(tasks.contains(&task_id));

    sandbox.ok(&["done", &task_id]);
    assert!(sandbox.ok(&["tasks"]).starts_with("Groceries (100%)"));

    let details = sandbox.ok(&["show", &task_id]);
    assert!(details.contains("Checklist (0%)"));
    assert!(details.contains("oat"));
}

#[test]
fn test_empty_title_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "  "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("task title must not be empty"));
}

#[test]
fn test_default_list_cannot_be_deleted() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["delete-list"]);
    assert!(!output.status.success());
}

#[test]
fn test_delete_list_falls_back_to_default() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["add-list", "Work"]);
    sandbox.ok(&["add", "Report"]);
    sandbox.ok(&["delete-list"]);

    let tasks = sandbox.ok(&["tasks"]);
    assert!(tasks.starts_with("Default"));
    assert!(!tasks.contains("Report"));
}

#[test]
fn test_unknown_task_reports_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["done", "00000000-0000-0000-0000-000000000000"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The requested item no longer exists"));
}
