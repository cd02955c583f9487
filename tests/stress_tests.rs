//! Stress tests for concurrent dispatch
//!
//! These tests verify:
//! - No record is lost when many threads log through shared loggers
//! - Records are never interleaved within a line
//! - Level and switch changes racing with logging never panic

mod common;

use common::SharedBuffer;
use rust_dual_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_logging_keeps_records_whole() {
    let text = SharedBuffer::new();
    let json = SharedBuffer::new();
    let registry = Arc::new(
        Registry::builder()
            .text(text.clone(), true)
            .json(json.clone(), true)
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let logger = registry
                    .default_logger()
                    .with(&[Attr::uint64("thread", t as u64)])
                    .with_group("work");
                for i in 0..PER_THREAD {
                    logger.info("tick with a long message body", &[Attr::uint64("i", i as u64)]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let records = json.json_lines();
    assert_eq!(records.len(), THREADS * PER_THREAD);

    let seen: HashSet<(u64, u64)> = records
        .iter()
        .map(|r| {
            (
                r["thread"].as_u64().expect("thread attr"),
                r["work"]["i"].as_u64().expect("grouped i attr"),
            )
        })
        .collect();
    assert_eq!(seen.len(), THREADS * PER_THREAD);

    let lines = text.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines.iter().all(|l| l.starts_with("time=") && l.contains(" work.i=")));

    assert_eq!(registry.metrics().records_written(), (2 * THREADS * PER_THREAD) as u64);
    assert_eq!(registry.metrics().write_failures(), 0);
}

#[test]
fn test_level_and_switch_changes_during_logging() {
    let text = SharedBuffer::new();
    let json = SharedBuffer::new();
    let registry = Arc::new(
        Registry::builder()
            .text(text.clone(), false)
            .json(json.clone(), false)
            .build(),
    );

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..500 {
                    registry.warnf(format_args!("warn {}", i));
                    registry.debug("debug", &[]);
                }
            })
        })
        .collect();

    let toggler = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 0..500 {
                if i % 2 == 0 {
                    registry.set_level_debug();
                    registry.disable_text_logger();
                } else {
                    registry.set_level_error();
                    registry.enable_text_logger();
                }
            }
            registry.set_level_info();
            registry.enable_text_logger();
        })
    };

    for handle in writers {
        handle.join().expect("logging thread panicked");
    }
    toggler.join().expect("toggle thread panicked");

    // JSON is never switched off, so at least one sink stays on throughout
    assert!(registry.text_enabled() && registry.json_enabled());
    for record in json.json_lines() {
        assert!(record["level"] == "WARN" || record["level"] == "DEBUG");
    }
    assert!(text.lines().iter().all(|l| l.starts_with("time=")));
}

#[test]
fn test_default_swap_while_logging() {
    let registry = Arc::new(Registry::without_sinks());
    let buffers: Vec<SharedBuffer> = (0..10).map(|_| SharedBuffer::new()).collect();

    let logger_thread = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for _ in 0..1000 {
                registry.info("swap", &[]);
            }
        })
    };

    for buffer in &buffers {
        registry.set_json_logger(buffer.clone(), false);
    }
    logger_thread.join().expect("logging thread panicked");

    let total: usize = buffers.iter().map(|b| b.json_lines().len()).sum();
    assert!(total <= 1000);
    assert_eq!(registry.metrics().write_failures(), 0);
}
