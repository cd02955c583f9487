//! Handler trait for record encoders

use super::{
    attr::Attr, context::Context, error::Result, log_level::Level, log_level::LevelVar,
    log_record::Record, timestamp::TimestampFormat,
};
use std::sync::Arc;

/// A record encoder bound to a destination.
///
/// A logger holds up to two handlers. Deriving a logger derives its
/// handlers, so implementations must return a new handler from
/// `with_attrs` and `with_group` that shares the destination and level
/// but carries the extra context.
pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be written
    fn enabled(&self, ctx: &Context, level: Level) -> bool;

    /// Encode and write one record
    fn handle(&self, ctx: &Context, record: &Record) -> Result<()>;

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler>;

    fn with_group(&self, name: &str) -> Arc<dyn Handler>;

    fn name(&self) -> &str;
}

/// Options shared by the built-in handlers
///
/// # Example
///
/// ```
/// use rust_dual_logger::core::{HandlerOptions, Level, LevelVar};
/// use std::sync::Arc;
///
/// let level = Arc::new(LevelVar::new(Level::WARN));
/// let options = HandlerOptions::new(Arc::clone(&level)).with_source(true);
/// assert!(options.enabled(Level::ERROR));
/// assert!(!options.enabled(Level::INFO));
/// ```
#[derive(Debug, Clone)]
pub struct HandlerOptions {
    /// Include the `file:line` of the logging call
    pub add_source: bool,
    /// Minimum level, shared with every handler created from these options
    pub level: Arc<LevelVar>,
    pub timestamp_format: TimestampFormat,
}

impl HandlerOptions {
    pub fn new(level: Arc<LevelVar>) -> Self {
        Self {
            add_source: false,
            level,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level.get()
    }
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self::new(Arc::new(LevelVar::default()))
    }
}
