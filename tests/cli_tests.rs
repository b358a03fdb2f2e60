use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rsp, rsp_defaults, temp_path, write_config};

#[test]
fn test_plan_continuous_pieces() {
    rsp_defaults("plan_pieces")
        .args([
            "plan",
            "2025-09-01",
            "--setup",
            "60",
            "--pieces",
            "60",
            "--piece-minutes",
            "15",
        ])
        .assert()
        .success()
        .stdout(contains("Estimated completion: 2025-09-02 07:00 (Tue)"))
        .stdout(contains("Total work  : 16.0 h"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("finishes on a Saturday").not());
}

#[test]
fn test_plan_setup_hours_matches_minutes() {
    rsp_defaults("plan_hours")
        .args([
            "plan",
            "2025-09-01",
            "--setup-hours",
            "1",
            "--production",
            "900",
        ])
        .assert()
        .success()
        .stdout(contains("2025-09-02 07:00"));
}

#[test]
fn test_plan_blocks_lists_breaks() {
    rsp_defaults("plan_blocks")
        .args(["plan", "2025-09-01", "--production", "900", "--blocks"])
        .assert()
        .success()
        .stdout(contains("break"))
        .stdout(contains("12:20"))
        .stdout(contains("19:50"));
}

#[test]
fn test_plan_warns_when_finishing_on_saturday() {
    rsp_defaults("plan_saturday")
        .args(["plan", "2025-09-06", "--saturday", "--production", "300"])
        .assert()
        .success()
        .stdout(contains("2025-09-06 11:00"))
        .stdout(contains("finishes on a Saturday"));
}

#[test]
fn test_plan_saturday_flags_override_config() {
    let on = write_config("saturday_on", "work_saturday: true\n");

    rsp()
        .args(["--config", &on, "plan", "2025-09-06", "--production", "60"])
        .assert()
        .success()
        .stdout(contains("Estimated completion: 2025-09-06 07:00"));

    rsp()
        .args(["--config", &on, "plan", "2025-09-06", "--no-saturday", "--production", "60"])
        .assert()
        .success()
        .stdout(contains("Estimated completion: 2025-09-08 07:00"));

    let off = write_config("saturday_off", "work_saturday: false\n");

    rsp()
        .args(["--config", &off, "plan", "2025-09-06", "--saturday", "--production", "60"])
        .assert()
        .success()
        .stdout(contains("Estimated completion: 2025-09-06 07:00"));
}

#[test]
fn test_plan_single_shift_after_end_moves_to_next_day() {
    rsp_defaults("plan_morning")
        .args([
            "plan",
            "2025-09-01",
            "--at",
            "14:00",
            "--coverage",
            "morning",
            "--production",
            "60",
        ])
        .assert()
        .success()
        .stdout(contains("Estimated completion: 2025-09-02 07:00"));
}

#[test]
fn test_plan_skips_holidays_from_flag() {
    rsp_defaults("plan_holiday")
        .args([
            "plan",
            "2025-09-01",
            "--at",
            "21:00",
            "--production",
            "100",
            "--holiday",
            "2025-09-02",
            "--holiday",
            "2025-09-03",
        ])
        .assert()
        .success()
        .stdout(contains("2025-09-04 07:00"));
}

#[test]
fn test_plan_rejects_unknown_coverage() {
    rsp_defaults("plan_bad_coverage")
        .args(["plan", "2025-09-01", "--coverage", "night", "--production", "10"])
        .assert()
        .failure()
        .stderr(contains("coverage"));
}

#[test]
fn test_plan_rejects_bad_date() {
    rsp_defaults("plan_bad_date")
        .args(["plan", "01/09/2025", "--production", "10"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_plan_unreachable_schedule_fails() {
    let cfg = write_config(
        "unreachable",
        "max_day_advances: 3\nholidays:\n  - 2025-09-01\n  - 2025-09-02\n  - 2025-09-03\n  - 2025-09-04\n  - 2025-09-05\n",
    );

    rsp()
        .args(["--config", &cfg, "plan", "2025-09-01", "--production", "10"])
        .assert()
        .failure()
        .stderr(contains("Schedule unreachable"));
}

#[test]
fn test_plan_strict_start_from_config() {
    let cfg = write_config(
        "strict_start",
        "strict_shift_start: true\ndefault_coverage: morning\n",
    );

    rsp()
        .args(["--config", &cfg, "plan", "2025-09-01", "--at", "15:00", "--production", "10"])
        .assert()
        .failure()
        .stderr(contains("Invalid request: start"));
}

#[test]
fn test_calendar_week_listing() {
    rsp_defaults("calendar_week")
        .args([
            "calendar",
            "--period",
            "2025-09-01:2025-09-07",
            "--holiday",
            "2025-09-03",
        ])
        .assert()
        .success()
        .stdout(contains("06:00-21:40"))
        .stdout(contains("12:00-12:20"))
        .stdout(contains("closed"))
        .stdout(contains("4 work days"));
}

#[test]
fn test_calendar_alternating_shift() {
    rsp_defaults("calendar_alternate")
        .args([
            "calendar",
            "--period",
            "2025-09-08",
            "--from",
            "2025-09-01",
            "--coverage",
            "morning",
            "--alternate",
        ])
        .assert()
        .success()
        .stdout(contains("afternoon"))
        .stdout(contains("13:50-21:40"));
}

#[test]
fn test_export_csv_blocks() {
    let out = temp_path("export_csv", "csv");

    rsp_defaults("export_csv")
        .args([
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "2025-09-01",
            "--setup",
            "60",
            "--production",
            "900",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("day,weekday,start,end,kind,duration_minutes"));
    assert!(content.contains("setup"));
    assert!(content.contains("break"));
    assert!(content.contains("2025-09-02 06:00:00"));
}

#[test]
fn test_export_json_document() {
    let out = temp_path("export_json", "json");

    rsp_defaults("export_json")
        .args([
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "2025-09-01",
            "--setup",
            "60",
            "--production",
            "900",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["completion"], "2025-09-02 07:00:00");
    assert_eq!(doc["work_minutes"], 960.0);
    assert_eq!(doc["days"].as_array().map(Vec::len), Some(2));
    assert_eq!(doc["blocks"][0]["kind"], "setup");
}

#[test]
fn test_export_pieces_production_total() {
    let out = temp_path("export_pieces", "json");

    rsp_defaults("export_pieces")
        .args([
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "2025-09-01",
            "--pieces",
            "40",
            "--piece-minutes",
            "2.5",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["work_minutes"], 100.0);
    assert_eq!(doc["completion"], "2025-09-01 07:40:00");
    assert_eq!(doc["blocks"][0]["kind"], "production");
}

#[test]
fn test_export_xlsx_written() {
    let out = temp_path("export_xlsx", "xlsx");

    rsp_defaults("export_xlsx")
        .args([
            "export",
            "--format",
            "xlsx",
            "--file",
            &out,
            "2025-09-01",
            "--production",
            "600",
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let out = temp_path("export_exists", "csv");
    fs::write(&out, "keep me").unwrap();

    rsp_defaults("export_exists")
        .args(["export", "--file", &out, "2025-09-01", "--production", "60"])
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rsp_defaults("export_exists")
        .args(["export", "--file", &out, "--force", "2025-09-01", "--production", "60"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("production"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = temp_path("init_test", "conf");

    rsp()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("06:00-13:50"));
    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_init_then_print_config() {
    let cfg = temp_path("init_print", "conf");

    rsp().args(["--config", &cfg, "init"]).assert().success();
    assert!(std::path::Path::new(&cfg).exists());

    rsp()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("morning_shift"))
        .stdout(contains("max_day_advances: 400"));
}
