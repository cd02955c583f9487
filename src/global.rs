//! Process-wide registry and free logging functions
//!
//! The global [`Registry`] is created on first use with a text sink on
//! standard output (call sites included, INFO level). Every function here
//! forwards to it; code that prefers explicit wiring can hold its own
//! `Registry` instead.

use crate::core::{Attr, Level, Logger, Registry};
use std::fmt;
use std::io::Write;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry
pub fn registry() -> &'static Registry {
    &GLOBAL
}

/// The process-wide default logger; it writes through whichever sinks are
/// installed when it is used
pub fn default() -> Arc<Logger> {
    GLOBAL.default_logger()
}

pub fn set_level(level: Level) {
    GLOBAL.set_level(level);
}

pub fn level() -> Level {
    GLOBAL.level()
}

pub fn set_level_debug() {
    GLOBAL.set_level_debug();
}

pub fn set_level_info() {
    GLOBAL.set_level_info();
}

pub fn set_level_warn() {
    GLOBAL.set_level_warn();
}

pub fn set_level_error() {
    GLOBAL.set_level_error();
}

/// Install and enable the global text sink
pub fn set_text_logger<W: Write + Send + 'static>(writer: W, add_source: bool) {
    GLOBAL.set_text_logger(writer, add_source);
}

/// Install and enable the global JSON sink
pub fn set_json_logger<W: Write + Send + 'static>(writer: W, add_source: bool) {
    GLOBAL.set_json_logger(writer, add_source);
}

pub fn enable_text_logger() {
    GLOBAL.enable_text_logger();
}

pub fn enable_json_logger() {
    GLOBAL.enable_json_logger();
}

/// Ignored unless the JSON sink is enabled
pub fn disable_text_logger() {
    GLOBAL.disable_text_logger();
}

/// Ignored unless the text sink is enabled
pub fn disable_json_logger() {
    GLOBAL.disable_json_logger();
}

/// Log a DEBUG message with attributes.
///
/// ```
/// use rust_dual_logger::{self as log, Attr};
///
/// log::debug("hello world", &[]);
/// log::debug("hello world", &[Attr::int("age", 18), Attr::string("name", "foo")]);
/// ```
#[track_caller]
pub fn debug(msg: impl Into<String>, attrs: &[Attr]) {
    GLOBAL.debug(msg, attrs);
}

#[track_caller]
pub fn info(msg: impl Into<String>, attrs: &[Attr]) {
    GLOBAL.info(msg, attrs);
}

#[track_caller]
pub fn warn(msg: impl Into<String>, attrs: &[Attr]) {
    GLOBAL.warn(msg, attrs);
}

#[track_caller]
pub fn error(msg: impl Into<String>, attrs: &[Attr]) {
    GLOBAL.error(msg, attrs);
}

/// Log an ERROR message, then exit the process with code 1.
///
/// Reserve this for unrecoverable failures: destructors do not run.
#[track_caller]
pub fn panic(msg: impl Into<String>, attrs: &[Attr]) -> ! {
    GLOBAL.panic(msg, attrs)
}

/// Log a formatted DEBUG message. Formatted variants take no attributes.
///
/// ```
/// use rust_dual_logger as log;
///
/// log::debugf(format_args!("hello {}", "world"));
/// ```
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    GLOBAL.debugf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    GLOBAL.infof(args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    GLOBAL.warnf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    GLOBAL.errorf(args);
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    GLOBAL.panicf(args)
}

#[track_caller]
pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    GLOBAL.logf(level, args);
}
