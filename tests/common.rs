#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsp() -> Command {
    cargo_bin_cmd!("rshiftplan")
}

/// `rshiftplan --config <non-existing file>`: runs on the built-in defaults,
/// independent of the user's own configuration.
pub fn rsp_defaults(name: &str) -> Command {
    let cfg = temp_path(&format!("{name}_missing"), "conf");
    let mut cmd = rsp();
    cmd.args(["--config", &cfg]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftplan.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a YAML configuration file and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_path(name, "conf");
    fs::write(&p, yaml).expect("write config");
    p
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid date-time")
}

pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}
