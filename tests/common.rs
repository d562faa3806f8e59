#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rma() -> Command {
    cargo_bin_cmd!("rmedalarm")
}

/// Path of a per-test configuration file inside the system temp dir.
/// Any leftover file from a previous run is removed.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmedalarm.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path
pub fn write_temp(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rmedalarm_{}", name));
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Usage catalog with one adult-only and one child/adult entry
pub fn sample_catalog(name: &str) -> String {
    write_temp(
        &format!("{name}_catalog.json"),
        r#"{
  "타이레놀": "1회 1정, 1일 3회 식후 30분에 복용합니다.",
  "이브": "성인: 1회 2캡슐, 1일 3회 식후 복용. 어린이: 1회 1캡슐, 1일 1회 취침 전 복용"
}"#,
    )
}
