//! Basic logger usage example
//!
//! Demonstrates level filtering, runtime toggles, and the on-disk record
//! format.
//!
//! Run with: cargo run --example basic_usage

use datelog::prelude::*;
use std::fs;

fn main() {
    println!("=== datelog - Basic Usage Example ===\n");

    let dir = std::env::temp_dir().join("datelog_basic_usage");
    let _ = fs::create_dir_all(&dir);

    let logger = FileLogger::new(
        dir.to_string_lossy().into_owned(),
        "Demo_yyyyMMdd",
        0,
        true,
        LogLevel::All,
    );
    println!("1. Logging to: {}", logger.path().display());

    // Threshold ALL admits every level.
    logger.info("This is an info message");
    logger.debug("This is a debug message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Threshold set to INFO - only info calls are written:");
    logger.set_level(LogLevel::Info);
    logger.info("Info message (written)");
    logger.debug("Debug message (dropped)");
    logger.fatal("Fatal message (dropped)");

    println!("\n3. Logger disabled - nothing is written:");
    logger.set_enabled(false);
    logger.info("Disabled message (dropped)");
    logger.set_enabled(true);

    if let Ok(content) = fs::read_to_string(logger.path()) {
        println!("\n4. File contents ({} lines):", content.lines().count());
        for line in content.lines() {
            println!("   {}", line);
        }
    }

    println!("\n=== Example completed successfully! ===");
}
