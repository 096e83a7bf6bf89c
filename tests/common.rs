#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use emchecklist::core::store::FormStore;
use emchecklist::models::catalog;
use emchecklist::models::entry::PrimaryWaterField;
use emchecklist::models::reading::{Group, Measure};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ecl() -> Command {
    cargo_bin_cmd!("emchecklist")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_emchecklist.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `FIELD=VALUE` assignments filling every required field.
pub fn all_required_assignments() -> Vec<String> {
    let mut out: Vec<String> = PrimaryWaterField::ALL
        .iter()
        .map(|f| format!("primary.{}=7.5", f.code()))
        .collect();

    for location in catalog::locations() {
        for group in Group::ALL {
            for measure in Measure::ALL {
                out.push(format!("{}.{}.{}=42", location.id, group.code(), measure.code()));
            }
        }
    }
    out
}

/// Form store with every required field set.
pub fn filled_store() -> FormStore {
    let mut form = FormStore::new();
    form.set_date("2025-09-01");
    form.set_shift(emchecklist::models::entry::Shift::from_code("A"));
    for field in PrimaryWaterField::ALL {
        form.set_primary_water(field, "7.5");
    }
    for location in catalog::locations() {
        for group in Group::ALL {
            for measure in Measure::ALL {
                form.set_reading(location.id, group, measure, "42")
                    .expect("known location");
            }
        }
    }
    form
}

/// Start a draft for the given date/shift through the CLI.
pub fn new_draft(db_path: &str, date: &str, shift: &str) {
    ecl()
        .args(["--db", db_path, "new", "--date", date, "--shift", shift])
        .assert()
        .success();
}

/// Fill every required field of the current draft through the CLI.
pub fn fill_draft(db_path: &str) {
    let mut args = vec!["--db".to_string(), db_path.to_string(), "set".to_string()];
    args.extend(all_required_assignments());
    ecl().args(&args).assert().success();
}
