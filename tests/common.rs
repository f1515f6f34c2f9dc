#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn frl() -> Command {
    cargo_bin_cmd!("frotalog")
}

/// Create a unique test storage dir inside the system temp dir and remove
/// any leftovers from previous runs.
pub fn setup_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frotalog_store", name));
    let store = path.to_string_lossy().to_string();
    fs::remove_dir_all(&store).ok();
    store
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add a small dataset useful for many tests.
pub fn store_with_data(store: &str) {
    frl()
        .args([
            "--store",
            store,
            "add",
            "--equipment",
            "Trator 01",
            "--model",
            "Valtra",
            "--unit",
            "Fazenda Norte",
            "--hours",
            "10",
            "--fuel",
            "5",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success();

    frl()
        .args([
            "--store",
            store,
            "add",
            "--equipment",
            "Colheitadeira 02",
            "--model",
            "Case",
            "--unit",
            "Fazenda Sul",
            "--hours",
            "20",
            "--fuel",
            "5",
            "--date",
            "2025-09-15",
        ])
        .assert()
        .success();
}

/// Full record ids currently persisted in the store, via JSON export.
pub fn record_ids(store: &str, name: &str) -> Vec<String> {
    let out = temp_out(name, "json");
    frl()
        .args([
            "--store", store, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("parse exported json");
    parsed
        .as_array()
        .expect("exported json array")
        .iter()
        .map(|r| r["id"].as_str().expect("record id").to_string())
        .collect()
}
