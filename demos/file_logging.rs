//! File logging example
//!
//! Demonstrates the JSON sink writing newline-delimited records to a file
//! while the text sink stays on the console.
//!
//! Run with: cargo run --example file_logging

use rust_dual_logger::prelude::*;
use std::fs::File;

fn main() -> Result<()> {
    println!("=== Rust Dual Logger - File Logging Example ===\n");

    let registry = Registry::builder()
        .level(Level::DEBUG)
        .text(std::io::stdout(), true)
        .json(File::create("application.jsonl")?, true)
        .build();

    println!("1. Logging to both console and file:");
    registry.info("Application started", &[]);
    registry.debug("Loading configuration...", &[Attr::string("path", "config.toml")]);
    registry.warn("Using default settings for some options", &[]);
    registry.error("Failed to load optional plugin", &[Attr::string("plugin", "metrics")]);

    println!("\n2. Performing some operations:");
    let worker = registry.default_logger().with_group("worker");
    for i in 1..=5 {
        worker.info("Processing item", &[Attr::int("item", i), Attr::int("total", 5)]);
        if i == 3 {
            worker.warn("Item took longer than expected", &[Attr::int("item", i)]);
        }
    }

    println!("\n3. File-only output:");
    registry.set_json_logger(File::options().append(true).open("application.jsonl")?, false);
    registry.disable_text_logger();
    registry.info("Only in the file", &[]);
    registry.enable_text_logger();

    println!(
        "\nRecords written: {}, failures: {}",
        registry.metrics().records_written(),
        registry.metrics().write_failures()
    );
    println!("Check application.jsonl for the JSON output");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
