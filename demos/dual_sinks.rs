//! Dual sink example
//!
//! Demonstrates installing both sinks on the process-wide logger and
//! switching them independently.
//!
//! Run with: cargo run --example dual_sinks

use rust_dual_logger::{self as log, warn, Attr};

fn main() {
    println!("=== Rust Dual Logger - Dual Sinks Example ===\n");

    println!("1. Text on stdout, JSON on stderr:");
    log::set_json_logger(std::io::stderr(), true);
    log::info("written twice", &[Attr::int("age", 18)]);

    println!("\n2. JSON only:");
    log::disable_text_logger();
    log::warn("json only", &[Attr::bool("retry", true)]);

    println!("\n3. Disabling the last active sink is ignored:");
    log::disable_json_logger();
    warn!("still written as JSON: {}", "guard");

    println!("\n4. Text only:");
    log::enable_text_logger();
    log::disable_json_logger();
    log::error("text only", &[Attr::any("tags", &["a", "b"])]);

    println!("\n=== Example completed successfully! ===");
}
