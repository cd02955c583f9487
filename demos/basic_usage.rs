//! Basic logger usage example
//!
//! Demonstrates the process-wide logger: levels, attributes, formatted
//! messages and derived loggers.
//!
//! Run with: cargo run --example basic_usage

use rust_dual_logger::{self as log, attrs, info, Attr, Level};
use std::time::Duration;

fn main() {
    println!("=== Rust Dual Logger - Basic Usage Example ===\n");

    println!("1. Logging at different levels (default threshold is INFO):");
    log::debug("This is a debug message (hidden)", &[]);
    log::info("This is an info message", &[]);
    log::warn("This is a warning message", &[]);
    log::error("This is an error message", &[]);

    println!("\n2. Lowering the threshold at runtime:");
    log::set_level_debug();
    log::debug("Debug message (visible)", &[]);
    log::set_level(Level(2));
    log::logf(Level(2), format_args!("Custom level {}", log::level()));
    log::info("Info message (hidden at INFO+2)", &[]);
    log::set_level_info();

    println!("\n3. Attributes and formatted messages:");
    log::info(
        "user login",
        &[
            Attr::int("age", 18),
            Attr::string("name", "foo"),
            Attr::duration("elapsed", Duration::from_millis(35)),
        ],
    );
    log::infof(format_args!("hello {}", "world"));
    info!("{} items processed", 42);

    println!("\n4. Derived loggers:");
    let request = log::default()
        .with(&[Attr::string("service", "api")])
        .with_group("request");
    request.info("handled", &attrs!["id" => "abc", "status" => 200]);
    request.warn("slow response", &[Attr::int("ms", 1200)]);

    println!("\n=== Example completed successfully! ===");
}
