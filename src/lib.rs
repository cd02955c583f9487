//! # Rust Dual Logger
//!
//! A structured logging facade that sends every record to up to two sinks:
//! a human-readable text encoder and a JSON encoder. Both sinks share one
//! dynamic level threshold and the same call-site resolution.
//!
//! ## Features
//!
//! - **Dual Sinks**: text and JSON output, each independently installed and switched
//! - **Dynamic Level**: one shared threshold, changeable at runtime without rebuilding loggers
//! - **Derived Loggers**: `with` / `with_group` bind attributes and groups without mutation
//! - **Accurate Call Sites**: every entry point reports the caller's `file:line`
//! - **Synchronous**: records are written before the logging call returns
//!
//! ## Example
//!
//! ```
//! use rust_dual_logger::{self as log, Attr};
//!
//! log::set_level_debug();
//! log::info("hello world", &[Attr::int("age", 18)]);
//! log::infof(format_args!("hello {}", "world"));
//!
//! let logger = log::default().with_group("request").with(&[Attr::string("id", "abc")]);
//! logger.warn("slow response", &[Attr::int("ms", 1200)]);
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Attr, AttrScope, Context, DispatchMetrics, Handler, HandlerOptions, Level, LevelVar,
        Logger, LoggerError, Record, Registry, RegistryBuilder, Result, Source, TimestampFormat,
        Value,
    };
    pub use crate::handlers::{JsonHandler, SharedWriter, TextHandler};
}

pub use crate::core::{
    Attr, AttrScope, Context, DispatchMetrics, Handler, HandlerOptions, Level, LevelVar, Logger,
    LoggerError, Record, Registry, RegistryBuilder, Result, Source, TimestampFormat, Value,
};
pub use crate::global::{
    debug, debugf, default, disable_json_logger, disable_text_logger, enable_json_logger,
    enable_text_logger, error, errorf, info, infof, level, logf, panic, panicf, registry,
    set_json_logger, set_level, set_level_debug, set_level_error, set_level_info,
    set_level_warn, set_text_logger, warn, warnf,
};
pub use crate::handlers::{JsonHandler, TextHandler};
