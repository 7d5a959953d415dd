use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn liftlog(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("liftlog").expect("binary should build");
    // Point the config lookup at an empty directory so a developer's own
    // ~/.liftlog/config.toml cannot leak into the tests.
    cmd.env("LIFTLOG_PATH", home.path());
    cmd
}

fn fixture() -> &'static str {
    "tests/fixtures/workouts.json"
}

#[test]
fn test_default_invocation_prints_report_and_progression() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout report"))
        .stdout(predicate::str::contains("Personal records"))
        .stdout(predicate::str::contains("Squat progression"))
        .stdout(predicate::str::contains("Bench Press progression"));
}

#[test]
fn test_report_json_output() {
    let home = TempDir::new().unwrap();

    let output = liftlog(&home)
        .args(["--file", fixture(), "--format", "json", "report"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(report["total_sessions"], 2);
    assert_eq!(report["personal_records"]["Squat"], 245.0);
    assert_eq!(report["volume_by_exercise"]["Squat"], 2985.0);
    assert_eq!(report["date_range"]["start"], "2026-02-02");
    assert_eq!(report["date_range"]["end"], "2026-02-04");
}

#[test]
fn test_prs_with_unknown_exercise_fails() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "prs", "--exercise", "Curl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_prs_filter_matches() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "prs", "--exercise", "Squat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("245.0 lbs"));
}

#[test]
fn test_session_summary_by_date() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "session", "2026-02-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout on 2026-02-02"))
        .stdout(predicate::str::contains("1h 2m"));
}

#[test]
fn test_session_summary_unknown_date_fails() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "session", "2026-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no workout recorded"));
}

#[test]
fn test_session_summary_invalid_date_fails() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "session", "02/02/2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid session date"));
}

#[test]
fn test_recent_with_wide_window_lists_sessions() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "recent", "--days", "36500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-02-02"))
        .stdout(predicate::str::contains("2026-02-04"));
}

#[test]
fn test_export_progression_csv() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("progression.csv");

    liftlog(&home)
        .args([
            "--file",
            fixture(),
            "export",
            "--what",
            "progression",
            "--exercise",
            "Squat",
            "--export-format",
            "csv",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("date,max_weight,volume"));
    assert!(content.contains("2026-02-02,245,2985"));
}

#[test]
fn test_export_progression_requires_exercise() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", fixture(), "export", "--what", "progression"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--exercise is required"));
}

#[test]
fn test_missing_data_file_fails() {
    let home = TempDir::new().unwrap();

    liftlog(&home)
        .args(["--file", "does_not_exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load workout log"));
}

#[test]
fn test_malformed_data_file_rejects_whole_load() {
    let home = TempDir::new().unwrap();
    let bad = home.path().join("bad.json");
    std::fs::write(
        &bad,
        r#"{"sessions": [
            {"date": "2026-02-02", "sets": [{"exercise": "Squat", "reps": 5, "weight": 225.0}]},
            {"date": "2026-02-03", "sets": [{"exercise": "Squat", "reps": 5, "weight": -1.0}]}]}"#,
    )
    .unwrap();

    liftlog(&home)
        .args(["--file", bad.to_str().unwrap(), "report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("session #1"));
}

#[test]
fn test_config_data_file_is_used() {
    let home = TempDir::new().unwrap();
    let data = Path::new(fixture()).canonicalize().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        format!("data_file = {:?}\nweight_unit = \"kg\"\n", data),
    )
    .unwrap();

    liftlog(&home)
        .args(["prs", "--exercise", "Squat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("245.0 kg"));
}
