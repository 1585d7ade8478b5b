use predicates::str::contains;
use std::fs;

mod common;
use common::{companion, entries_json, session, temp_path, write_config, write_entries};

fn setup(name: &str) -> String {
    let entries = write_entries(
        name,
        &entries_json(&[
            session("mon", "2025-03-10", "08:00", "17:00", 30),
            session("tue", "2025-03-11", "08:00", "12:00", 0),
        ]),
    );
    write_config(name, &entries, "office_hours: 8\n")
}

#[test]
fn export_week_as_csv() {
    let cfg = setup("export_csv");
    let out = temp_path("export_csv_out", "csv");

    companion()
        .args([
            "--config", &cfg, "--now", "2025-03-11T20:00:00Z", "export", "--format", "csv",
            "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "date,weekday,worked_minutes,target_minutes,shortfall_minutes,surplus_minutes"
    );
    assert_eq!(lines[1], "2025-03-10,Mon,510,480,0,30");
    assert_eq!(lines[2], "2025-03-11,Tue,240,480,240,0");
    assert_eq!(lines.len(), 3);
}

#[test]
fn export_week_as_json() {
    let cfg = setup("export_json");
    let out = temp_path("export_json_out", "json");

    companion()
        .args([
            "--config", &cfg, "--now", "2025-03-11T20:00:00Z", "export", "--format", "json",
            "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(2));
    assert_eq!(rows[1]["shortfall_minutes"], 240);
}

#[test]
fn export_requires_absolute_path() {
    let cfg = setup("export_relative");

    companion()
        .args(["--config", &cfg, "export", "--file", "week.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_overwrites_with_force() {
    let cfg = setup("export_force");
    let out = temp_path("export_force_out", "csv");
    fs::write(&out, "old").expect("seed file");

    companion()
        .args([
            "--config", &cfg, "--now", "2025-03-11T20:00:00Z", "export", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("date,weekday"));
}

#[test]
fn export_declined_keeps_existing_file() {
    let cfg = setup("export_declined");
    let out = temp_path("export_declined_out", "csv");
    fs::write(&out, "old").expect("seed file");

    companion()
        .args(["--config", &cfg, "--now", "2025-03-11T20:00:00Z", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "old");
}
