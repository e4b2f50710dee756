#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wc() -> Command {
    cargo_bin_cmd!("workcal")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workcal.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a store with a small August 2025 dataset useful for many tests.
///
/// Week 32 (Aug 4-10): a full weekday, a legal holiday, a missing weekday,
/// a worked Saturday and a blank Sunday. Week 33: one long weekday.
pub fn init_store_with_data(store_path: &str) {
    for (date, entry) in [
        ("2025-08-04", "9-17"),
        ("2025-08-05", "x"),
        ("2025-08-06", "-"),
        ("2025-08-09", "9-17"),
        ("2025-08-10", ""),
        ("2025-08-11", "8-17"),
    ] {
        wc()
            .args(["--store", store_path, "add", date, entry])
            .assert()
            .success();
    }
}
