//! Logging macros for ergonomic message formatting.
//!
//! The level macros format their message like `format!` and route it
//! either through the process-wide registry or, with a `logger:` prefix,
//! through any value exposing the formatted methods (a [`Logger`] or a
//! [`Registry`]). The reported call site is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use rust_dual_logger::prelude::*;
//! use rust_dual_logger::{attrs, info, warn};
//!
//! let registry = Registry::builder().json(std::io::sink(), true).build();
//! let logger = registry.default_logger();
//!
//! // Global registry
//! info!("Server started");
//!
//! // Explicit logger with format arguments
//! let port = 8080;
//! info!(logger: logger, "Server listening on port {}", port);
//! warn!(logger: registry, "Retry attempt {} of {}", 3, 5);
//!
//! // Attributes go through the non-formatting methods
//! logger.info("request", &attrs!["status" => 200, "path" => "/health"]);
//! ```
//!
//! [`Logger`]: crate::Logger
//! [`Registry`]: crate::Registry

/// Log a formatted message at any level.
///
/// # Examples
///
/// ```
/// # use rust_dual_logger::prelude::*;
/// # let registry = Registry::without_sinks();
/// use rust_dual_logger::log;
/// log!(Level(2), "between info and warn");
/// log!(logger: registry, Level::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Build a `Vec<Attr>` from `key => value` pairs.
///
/// ```
/// use rust_dual_logger::{attrs, Attr};
///
/// let attrs = attrs!["age" => 18, "name" => "foo"];
/// assert_eq!(attrs, vec![Attr::new("age", 18), Attr::new("name", "foo")]);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::Attr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Attr::new($key, $value)),+]
    };
}
