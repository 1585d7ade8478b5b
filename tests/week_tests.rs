use predicates::str::contains;
use std::fs;

mod common;
use common::{companion, entries_json, session, temp_path, write_config, write_entries};

/// Mon 480, Tue 600 (surplus), Wed 300; evaluated Wednesday evening.
fn three_day_week(name: &str) -> String {
    write_entries(
        name,
        &entries_json(&[
            session("mon", "2025-03-10", "08:00", "16:00", 0),
            session("tue", "2025-03-11", "08:00", "18:00", 0),
            session("wed", "2025-03-12", "08:00", "13:00", 0),
            session("next", "2025-03-17", "08:00", "16:00", 0),
        ]),
    )
}

const WEDNESDAY: &str = "2025-03-12T20:00:00Z";

#[test]
fn week_table_lists_days_up_to_today() {
    let entries = three_day_week("week_table");
    let cfg = write_config("week_table", &entries, "office_hours: 8\n");

    let assert = companion()
        .args(["--config", &cfg, "--now", WEDNESDAY, "week"])
        .assert()
        .success()
        .stdout(contains("Week of 2025-03-10"))
        .stdout(contains("2025-03-12"))
        .stdout(contains("Catch-up: 03h 00m"));

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!out.contains("2025-03-13"));
    assert!(!out.contains("2025-03-17"));
}

#[test]
fn surplus_never_offsets_a_deficit() {
    let entries = three_day_week("week_surplus");
    let cfg = write_config("week_surplus", &entries, "office_hours: 8\n");

    companion()
        .args(["--config", &cfg, "--now", WEDNESDAY, "status", "--json"])
        .assert()
        .success()
        .stdout(contains("\"weeklyCatchUpMinutes\": 180"));
}

#[test]
fn weekends_excluded_when_configured() {
    let sessions: Vec<String> = (10..=14)
        .map(|d| session(&format!("d{d}"), &format!("2025-03-{d}"), "09:00", "17:00", 0))
        .collect();
    let entries = write_entries("week_weekends", &entries_json(&sessions));

    let counted = write_config("week_weekends_on", &entries, "office_hours: 8\n");
    companion()
        .args(["--config", &counted, "--now", "2025-03-16T12:00:00Z", "week", "--json"])
        .assert()
        .success()
        .stdout(contains("\"catch_up_minutes\": 960"));

    let skipped = write_config(
        "week_weekends_off",
        &entries,
        "office_hours: 8\ncount_weekends: false\n",
    );
    companion()
        .args(["--config", &skipped, "--now", "2025-03-16T12:00:00Z", "week", "--json"])
        .assert()
        .success()
        .stdout(contains("\"catch_up_minutes\": 0"));
}

#[test]
fn csv_entry_files_are_supported() {
    let path = temp_path("week_csv_entries", "csv");
    fs::write(
        &path,
        "id,date,clock_in,clock_out,break_minutes,task\n\
         a,2025-03-10,2025-03-10T08:00:00Z,2025-03-10T12:00:00Z,0,mail\n\
         b,2025-03-10,2025-03-10T13:00:00Z,,30,review\n",
    )
    .expect("write csv");
    let cfg = write_config("week_csv_entries", &path, "office_hours: 8\n");

    companion()
        .args(["--config", &cfg, "--now", "2025-03-10T16:00:00Z", "status", "--json"])
        .assert()
        .success()
        .stdout(contains("\"todayMinutes\": 390"));
}

#[test]
fn unknown_entry_format_fails() {
    let path = temp_path("week_txt_entries", "txt");
    fs::write(&path, "whatever").expect("write txt");
    let cfg = write_config("week_txt_entries", &path, "office_hours: 8\n");

    companion()
        .args(["--config", &cfg, "week"])
        .assert()
        .failure()
        .stderr(contains("Unsupported entry file format"));
}
