use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ganttly").expect("binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn write_plan(&self, content: &str) -> PathBuf {
        let p = self.dir.path().join("_plan.json");
        fs::write(&p, content).expect("write plan file");
        p
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn plan_json(activities: &[(&str, &str, &str, &str)]) -> String {
    let rows: Vec<Value> = activities
        .iter()
        .map(|&(name, start, end, status)| {
            serde_json::json!({"name": name, "start": start, "end": end, "status": status})
        })
        .collect();
    serde_json::json!({
        "title": "Test Project",
        "as_of": "2026-01-22",
        "activities": rows
    })
    .to_string()
}

// ─── built-in plan ─────────────────────────────────────────────────

#[test]
fn test_default_invocation_renders_and_reports() {
    let env = TestEnv::new();
    let v = env.run_ok(&[]);
    assert_eq!(v["data"]["chart"], "gantt_chart.png");
    assert_eq!(v["data"]["stats"]["total_activities"], 12);

    let chart = env.path("gantt_chart.png");
    assert!(chart.exists(), "chart file not written");
    assert!(fs::metadata(&chart).unwrap().len() > 0);
}

#[test]
fn test_builtin_scenario_stats() {
    let env = TestEnv::new();
    let v = env.run_ok(&["summary"]);
    let stats = &v["data"]["stats"];
    assert_eq!(stats["total_activities"], 12);
    assert_eq!(stats["span_days"], 62);
    assert_eq!(stats["completed"]["count"], 11);
    assert_eq!(stats["completed"]["percent"], 91.7);
    assert_eq!(stats["in_progress"]["count"], 1);
    assert_eq!(stats["in_progress"]["percent"], 8.3);
    assert_eq!(stats["pending"]["count"], 0);
    assert_eq!(stats["pending"]["percent"], 0.0);
    assert_eq!(stats["start"], "2025-12-01");
    assert_eq!(stats["end"], "2026-01-31");
}

#[test]
fn test_summary_text_blocks() {
    let env = TestEnv::new();
    env.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("=".repeat(100)))
        .stdout(predicate::str::contains("PROJECT ACTIVITY SUMMARY"))
        .stdout(predicate::str::contains("PROJECT STATISTICS"))
        .stdout(predicate::str::contains("Total Activities: 12"))
        .stdout(predicate::str::contains("Total Duration: 62 days"))
        .stdout(predicate::str::contains("Completed Tasks: 11 (91.7%)"))
        .stdout(predicate::str::contains("Project End (Planned): 2026-01-31"))
        .stdout(predicate::str::contains("Deployment & Monitoring"));
}

#[test]
fn test_summary_is_byte_identical_across_runs() {
    let env = TestEnv::new();
    let first = env.cmd().arg("summary").output().expect("run");
    let second = env.cmd().arg("summary").output().expect("run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_render_custom_output_path() {
    let env = TestEnv::new();
    env.cmd()
        .args(["render", "--output", "timeline.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Gantt chart saved as 'timeline.png'"));
    assert!(env.path("timeline.png").exists());
}

#[test]
fn test_as_of_override() {
    let env = TestEnv::new();
    let v = env.run_ok(&["render", "--as-of", "2026-02-01"]);
    assert_eq!(v["data"]["as_of"], "2026-02-01");
}

// ─── plan files ────────────────────────────────────────────────────

#[test]
fn test_plan_file_preserves_activity_order() {
    let env = TestEnv::new();
    let plan = env.write_plan(&plan_json(&[
        ("Later Task", "2026-01-10", "2026-01-12", "Pending"),
        ("Earlier Task", "2026-01-01", "2026-01-03", "Completed"),
        ("Middle Task", "2026-01-05", "2026-01-08", "In Progress"),
    ]));
    let v = env.run_ok(&["summary", "--plan", plan.to_str().unwrap()]);
    let names: Vec<&str> = v["data"]["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Later Task", "Earlier Task", "Middle Task"]);
}

#[test]
fn test_single_day_activity_has_duration_one() {
    let env = TestEnv::new();
    let plan = env.write_plan(&plan_json(&[(
        "Kickoff",
        "2026-01-05",
        "2026-01-05",
        "Completed",
    )]));
    let v = env.run_ok(&["summary", "--plan", plan.to_str().unwrap()]);
    assert_eq!(v["data"]["activities"][0]["duration_days"], 1);
    assert_eq!(v["data"]["stats"]["span_days"], 1);
}

#[test]
fn test_invalid_date_rejected() {
    let env = TestEnv::new();
    let plan = env.write_plan(&plan_json(&[(
        "Task",
        "2026-13-01",
        "2026-01-05",
        "Completed",
    )]));
    let v = env.run_err(&["summary", "--plan", plan.to_str().unwrap()]);
    assert_eq!(v["error"]["code"], "INVALID_DATE");
}

#[test]
fn test_unknown_status_rejected() {
    let env = TestEnv::new();
    let plan = env.write_plan(&plan_json(&[(
        "Task",
        "2026-01-01",
        "2026-01-05",
        "Blocked",
    )]));
    let v = env.run_err(&["summary", "--plan", plan.to_str().unwrap()]);
    assert_eq!(v["error"]["code"], "INVALID_STATUS");
}

#[test]
fn test_end_before_start_rejected() {
    let env = TestEnv::new();
    let plan = env.write_plan(&plan_json(&[(
        "Task",
        "2026-01-05",
        "2026-01-01",
        "Pending",
    )]));
    let v = env.run_err(&["summary", "--plan", plan.to_str().unwrap()]);
    assert_eq!(v["error"]["code"], "INVALID_RANGE");
}

#[test]
fn test_empty_plan_rejected() {
    let env = TestEnv::new();
    let plan = env.write_plan(&plan_json(&[]));
    let v = env.run_err(&["summary", "--plan", plan.to_str().unwrap()]);
    assert_eq!(v["error"]["code"], "EMPTY_PLAN");
}

#[test]
fn test_missing_plan_file_rejected() {
    let env = TestEnv::new();
    let v = env.run_err(&["summary", "--plan", "no_such_plan.json"]);
    assert_eq!(v["error"]["code"], "PLAN_READ");
}

// ─── failure ordering ──────────────────────────────────────────────

#[test]
fn test_unwritable_output_aborts_before_summary() {
    let env = TestEnv::new();
    env.cmd()
        .args(["render", "--output", "missing_dir/chart.png"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("PROJECT ACTIVITY SUMMARY").not())
        .stderr(predicate::str::contains("Error:"));
}
