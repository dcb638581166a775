//! Build script for readmission-dashboard.
//!
//! Copies the cleaned encounter CSV into OUT_DIR so it can be embedded via
//! `include_str!`. A missing file embeds an empty placeholder; the loader
//! then reports it at startup instead of rendering a partial dashboard.

use std::env;
use std::fs;
use std::path::Path;

const DATASET_SRC: &str = "../data/hospital_readmission_clean.csv";
const DATASET_DEST: &str = "hospital_readmission_clean.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src = Path::new(DATASET_SRC);
    let dest = Path::new(&out_dir).join(DATASET_DEST);
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", DATASET_SRC, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").unwrap();
        println!(
            "cargo:warning=Dataset {} not found, using empty placeholder",
            DATASET_SRC
        );
    }

    println!("cargo:rerun-if-changed={}", DATASET_SRC);
    println!("cargo:rerun-if-changed=build.rs");
}
