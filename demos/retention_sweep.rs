//! Retention sweep example
//!
//! Pre-populates a directory with date-stamped log files, then constructs
//! a logger with a retention cap and shows which files survive.
//!
//! Run with: cargo run --example retention_sweep

use datelog::prelude::*;
use std::fs;
use std::thread;
use std::time::Duration;

fn list_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

fn main() {
    println!("=== datelog - Retention Sweep Example ===\n");

    let dir = std::env::temp_dir().join("datelog_retention_sweep");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create demo directory");

    println!("1. Pre-populating five old log files:");
    for year in 2020..=2024 {
        let name = format!("Svc_{}.log", year);
        fs::write(dir.join(&name), b"archived\n").expect("write old log");
        println!("   {}", name);
        // Spread creation times so the sweep has an order to work with.
        thread::sleep(Duration::from_millis(20));
    }

    println!("\n2. Constructing a logger with max_files = 2 ...");
    let logger = FileLogger::new(
        dir.to_string_lossy().into_owned(),
        "Svc_yyyy",
        2,
        true,
        LogLevel::All,
    );

    println!("   Files after the sweep (2 newest kept):");
    for name in list_files(&dir) {
        println!("   {}", name);
    }

    println!("\n3. First write creates the current file:");
    logger.info("service resumed");
    for name in list_files(&dir) {
        println!("   {}", name);
    }

    println!("\n=== Example completed successfully! ===");
}
