//! Logger handle and record dispatch

use super::{
    attr::{Attr, Value},
    context::Context,
    handler::Handler,
    log_level::Level,
    log_record::Record,
    registry::RouterState,
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// The handlers a logger writes through, at one point in time
#[derive(Clone)]
pub(crate) struct SinkSet {
    pub(crate) text: Option<Arc<dyn Handler>>,
    pub(crate) json: Option<Arc<dyn Handler>>,
}

impl SinkSet {
    fn is_empty(&self) -> bool {
        self.text.is_none() && self.json.is_none()
    }
}

enum Sinks {
    /// Read the registry's installed handlers on every call
    Shared,
    /// Handlers captured when the logger was derived
    Bound(SinkSet),
}

/// A handle bundling an optional text handler and an optional JSON handler.
///
/// Loggers are obtained from a [`Registry`](super::Registry) and derived
/// with [`with`](Logger::with) and [`with_group`](Logger::with_group);
/// derivation never mutates the source logger. Whether each sink kind is
/// written at all is decided by the registry's enable switches, which
/// every derived logger shares.
///
/// The registry's default logger always writes through the handlers
/// currently installed, so a handle taken before a sink is installed
/// sees it. Derived loggers keep the handlers they were derived from.
///
/// # Example
///
/// ```
/// use rust_dual_logger::prelude::*;
///
/// let registry = Registry::builder().json(std::io::sink(), true).build();
/// let logger = registry.default_logger().with(&[Attr::string("service", "api")]);
///
/// logger.info("request served", &[Attr::int("status", 200)]);
/// logger.warnf(format_args!("slow request: {}ms", 1200));
/// ```
pub struct Logger {
    sinks: Sinks,
    state: Arc<RouterState>,
}

impl Logger {
    /// The default logger of a registry
    pub(crate) fn shared(state: Arc<RouterState>) -> Self {
        Self {
            sinks: Sinks::Shared,
            state,
        }
    }

    pub(crate) fn from_parts(
        text: Option<Arc<dyn Handler>>,
        json: Option<Arc<dyn Handler>>,
        state: Arc<RouterState>,
    ) -> Self {
        Self {
            sinks: Sinks::Bound(SinkSet { text, json }),
            state,
        }
    }

    fn sinks(&self) -> SinkSet {
        match &self.sinks {
            Sinks::Shared => self.state.installed(),
            Sinks::Bound(set) => set.clone(),
        }
    }

    /// Whether any handler is installed, regardless of the enable switches
    pub fn has_sinks(&self) -> bool {
        !self.sinks().is_empty()
    }

    /// Derive a logger whose records all start with `attrs`.
    ///
    /// Without installed handlers this returns the same `Arc`.
    #[must_use]
    pub fn with(self: &Arc<Self>, attrs: &[Attr]) -> Arc<Logger> {
        let sinks = self.sinks();
        if sinks.is_empty() {
            return Arc::clone(self);
        }

        Arc::new(Logger::from_parts(
            sinks.text.map(|h| h.with_attrs(attrs)),
            sinks.json.map(|h| h.with_attrs(attrs)),
            Arc::clone(&self.state),
        ))
    }

    /// Derive a logger that nests all further attributes under `name`.
    ///
    /// Without installed handlers this returns the same `Arc`.
    #[must_use]
    pub fn with_group(self: &Arc<Self>, name: &str) -> Arc<Logger> {
        let sinks = self.sinks();
        if sinks.is_empty() {
            return Arc::clone(self);
        }

        Arc::new(Logger::from_parts(
            sinks.text.map(|h| h.with_group(name)),
            sinks.json.map(|h| h.with_group(name)),
            Arc::clone(&self.state),
        ))
    }

    /// Whether a record at `level` would reach at least one handler
    pub fn enabled(&self, level: Level) -> bool {
        self.enabled_in(&self.sinks(), &Context::background(), level)
    }

    fn enabled_in(&self, sinks: &SinkSet, ctx: &Context, level: Level) -> bool {
        let text = self.state.text_enabled()
            && sinks.text.as_ref().is_some_and(|h| h.enabled(ctx, level));
        let json = self.state.json_enabled()
            && sinks.json.as_ref().is_some_and(|h| h.enabled(ctx, level));
        text || json
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.emit_attrs(&Context::background(), Level::DEBUG, msg, attrs, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.emit_attrs(&Context::background(), Level::INFO, msg, attrs, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.emit_attrs(&Context::background(), Level::WARN, msg, attrs, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.emit_attrs(&Context::background(), Level::ERROR, msg, attrs, Location::caller());
    }

    /// Log at ERROR level, then terminate the process with exit code 1.
    ///
    /// Only for unrecoverable startup or invariant failures: no destructors
    /// run and the caller never regains control.
    #[track_caller]
    pub fn panic(&self, msg: impl Into<String>, attrs: &[Attr]) -> ! {
        self.emit_attrs(&Context::background(), Level::ERROR, msg, attrs, Location::caller());
        std::process::exit(1)
    }

    /// Log a formatted DEBUG message. Formatted variants take no attributes.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::DEBUG, args, Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::INFO, args, Location::caller());
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::WARN, args, Location::caller());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::ERROR, args, Location::caller());
    }

    /// Formatted counterpart of [`panic`](Logger::panic)
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_fmt(Level::ERROR, args, Location::caller());
        std::process::exit(1)
    }

    /// Log a formatted message at an arbitrary level
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit_fmt(level, args, Location::caller());
    }

    /// Log at an arbitrary level with key/value pairs.
    ///
    /// `ctx` is handed to the handlers; `None` means a background context.
    #[track_caller]
    pub fn log(
        &self,
        ctx: Option<&Context>,
        level: Level,
        msg: impl Into<String>,
        args: &[(&str, Value)],
    ) {
        let location = Location::caller();
        let background = Context::background();
        let ctx = ctx.unwrap_or(&background);
        let sinks = self.sinks();
        if !self.enabled_in(&sinks, ctx, level) {
            return;
        }

        let mut record = Record::new(level, msg, Some(location));
        record.add(args.iter().map(|(key, value)| (*key, value.clone())));
        self.dispatch(&sinks, ctx, &record);
    }

    /// Log at an arbitrary level with prebuilt attributes
    #[track_caller]
    pub fn log_attrs(
        &self,
        ctx: Option<&Context>,
        level: Level,
        msg: impl Into<String>,
        attrs: &[Attr],
    ) {
        let location = Location::caller();
        let background = Context::background();
        self.emit_attrs(ctx.unwrap_or(&background), level, msg, attrs, location);
    }

    pub(crate) fn emit_attrs(
        &self,
        ctx: &Context,
        level: Level,
        msg: impl Into<String>,
        attrs: &[Attr],
        location: &'static Location<'static>,
    ) {
        let sinks = self.sinks();
        if !self.enabled_in(&sinks, ctx, level) {
            return;
        }

        let record = Record::new(level, msg, Some(location)).with_attrs(attrs);
        self.dispatch(&sinks, ctx, &record);
    }

    pub(crate) fn emit_fmt(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    ) {
        let ctx = Context::background();
        let sinks = self.sinks();
        if !self.enabled_in(&sinks, &ctx, level) {
            return;
        }

        let record = Record::formatted(level, args, Some(location));
        self.dispatch(&sinks, &ctx, &record);
    }

    /// Hand the record to every switched-on, installed, level-enabled
    /// handler. Both sinks are checked independently and handler errors
    /// are only counted.
    fn dispatch(&self, sinks: &SinkSet, ctx: &Context, record: &Record) {
        if self.state.text_enabled() {
            if let Some(handler) = &sinks.text {
                self.write(handler.as_ref(), ctx, record);
            }
        }

        if self.state.json_enabled() {
            if let Some(handler) = &sinks.json {
                self.write(handler.as_ref(), ctx, record);
            }
        }
    }

    fn write(&self, handler: &dyn Handler, ctx: &Context, record: &Record) {
        if !handler.enabled(ctx, record.level) {
            return;
        }

        match handler.handle(ctx, record) {
            Ok(()) => self.state.metrics.record_written(),
            Err(_) => self.state.metrics.record_failed(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks = self.sinks();
        f.debug_struct("Logger")
            .field("text", &sinks.text.as_ref().map(|h| h.name()))
            .field("json", &sinks.json.as_ref().map(|h| h.name()))
            .finish()
    }
}
