//! Dispatch router: default logger, enable switches and shared level

use super::{
    attr::Attr,
    context::Context,
    handler::{Handler, HandlerOptions},
    log_level::{Level, LevelVar},
    logger::{Logger, SinkSet},
    metrics::DispatchMetrics,
    timestamp::TimestampFormat,
};
use crate::handlers::{JsonHandler, SharedWriter, TextHandler};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// State shared by a registry and every logger derived from it
#[derive(Default)]
pub(crate) struct RouterState {
    text_enabled: AtomicBool,
    json_enabled: AtomicBool,
    text: RwLock<Option<Arc<dyn Handler>>>,
    json: RwLock<Option<Arc<dyn Handler>>>,
    pub(crate) metrics: DispatchMetrics,
}

impl RouterState {
    /// Snapshot of the installed handlers; no lock outlives the call
    pub(crate) fn installed(&self) -> SinkSet {
        SinkSet {
            text: self.text.read().clone(),
            json: self.json.read().clone(),
        }
    }

    pub(crate) fn install_text(&self, handler: Arc<dyn Handler>) {
        *self.text.write() = Some(handler);
    }

    pub(crate) fn install_json(&self, handler: Arc<dyn Handler>) {
        *self.json.write() = Some(handler);
    }

    #[inline]
    pub(crate) fn text_enabled(&self) -> bool {
        self.text_enabled.load(Ordering::Acquire)
    }

    #[inline]
    pub(crate) fn json_enabled(&self) -> bool {
        self.json_enabled.load(Ordering::Acquire)
    }

    pub(crate) fn set_text_enabled(&self, enabled: bool) {
        self.text_enabled.store(enabled, Ordering::Release);
    }

    pub(crate) fn set_json_enabled(&self, enabled: bool) {
        self.json_enabled.store(enabled, Ordering::Release);
    }
}

/// Routes log calls to a default [`Logger`] holding up to two handlers.
///
/// A registry owns:
/// - the level threshold shared by every handler it creates,
/// - one enable switch per sink kind (text, JSON), consulted on every
///   dispatch by the default logger and all loggers derived from it,
/// - the installed text and JSON handlers, read by the default logger on
///   every call.
///
/// Installing a sink is visible through every handle to the default
/// logger, including ones obtained earlier; loggers derived earlier keep
/// the handlers they were derived from.
///
/// # Example
///
/// ```
/// use rust_dual_logger::prelude::*;
///
/// let registry = Registry::builder()
///     .level(Level::DEBUG)
///     .json(std::io::sink(), true)
///     .build();
///
/// registry.info("service started", &[Attr::int("port", 8080)]);
/// registry.set_level_warn();
/// assert!(!registry.enabled(Level::INFO));
/// ```
pub struct Registry {
    level: Arc<LevelVar>,
    state: Arc<RouterState>,
    default: Arc<Logger>,
    timestamp_format: TimestampFormat,
    #[cfg(feature = "console")]
    text_colors: bool,
}

impl Registry {
    /// A registry writing text records to standard output with call sites
    /// included, at INFO level.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().text(std::io::stdout(), true).build()
    }

    /// A registry with no sinks installed and both switches off
    #[must_use]
    pub fn without_sinks() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The shared level threshold
    pub fn level_var(&self) -> &Arc<LevelVar> {
        &self.level
    }

    pub fn level(&self) -> Level {
        self.level.get()
    }

    /// Replace the threshold for every handler created by this registry
    pub fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    pub fn set_level_debug(&self) {
        self.set_level(Level::DEBUG);
    }

    pub fn set_level_info(&self) {
        self.set_level(Level::INFO);
    }

    pub fn set_level_warn(&self) {
        self.set_level(Level::WARN);
    }

    pub fn set_level_error(&self) {
        self.set_level(Level::ERROR);
    }

    /// Options for a handler sharing this registry's level
    pub fn handler_options(&self, add_source: bool) -> HandlerOptions {
        HandlerOptions::new(Arc::clone(&self.level))
            .with_source(add_source)
            .with_timestamp_format(self.timestamp_format.clone())
    }

    /// Install a text handler writing to `writer` and switch text output on
    pub fn set_text_logger<W: Write + Send + 'static>(&self, writer: W, add_source: bool) {
        let handler = TextHandler::new(writer, self.handler_options(add_source));
        #[cfg(feature = "console")]
        let handler = handler.with_colors(self.text_colors);
        self.set_text_handler(Arc::new(handler));
    }

    /// Install a JSON handler writing to `writer` and switch JSON output on
    pub fn set_json_logger<W: Write + Send + 'static>(&self, writer: W, add_source: bool) {
        let handler = JsonHandler::new(writer, self.handler_options(add_source));
        self.set_json_handler(Arc::new(handler));
    }

    /// Install any handler in the text slot and switch text output on
    pub fn set_text_handler(&self, handler: Arc<dyn Handler>) {
        self.state.install_text(handler);
        self.state.set_text_enabled(true);
    }

    /// Install any handler in the JSON slot and switch JSON output on
    pub fn set_json_handler(&self, handler: Arc<dyn Handler>) {
        self.state.install_json(handler);
        self.state.set_json_enabled(true);
    }

    pub fn enable_text_logger(&self) {
        self.state.set_text_enabled(true);
    }

    pub fn enable_json_logger(&self) {
        self.state.set_json_enabled(true);
    }

    /// Switch text output off, unless JSON output is off too.
    ///
    /// When JSON is not enabled the call is ignored, so this can never be
    /// the call that silences every sink.
    pub fn disable_text_logger(&self) {
        if !self.state.json_enabled() {
            return;
        }
        self.state.set_text_enabled(false);
    }

    /// Switch JSON output off, unless text output is off too.
    pub fn disable_json_logger(&self) {
        if !self.state.text_enabled() {
            return;
        }
        self.state.set_json_enabled(false);
    }

    pub fn text_enabled(&self) -> bool {
        self.state.text_enabled()
    }

    pub fn json_enabled(&self) -> bool {
        self.state.json_enabled()
    }

    /// The shared default logger.
    ///
    /// Every call returns the same logger, which writes through whatever
    /// handlers are installed when it is used.
    pub fn default_logger(&self) -> Arc<Logger> {
        Arc::clone(&self.default)
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.state.metrics
    }

    /// Whether a record at `level` would reach at least one sink
    pub fn enabled(&self, level: Level) -> bool {
        self.default.enabled(level)
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.route(Level::DEBUG, msg, attrs, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.route(Level::INFO, msg, attrs, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.route(Level::WARN, msg, attrs, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, msg: impl Into<String>, attrs: &[Attr]) {
        self.route(Level::ERROR, msg, attrs, Location::caller());
    }

    /// Log at ERROR level, then exit the process with code 1
    #[track_caller]
    pub fn panic(&self, msg: impl Into<String>, attrs: &[Attr]) -> ! {
        self.route(Level::ERROR, msg, attrs, Location::caller());
        std::process::exit(1)
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.default.emit_fmt(Level::DEBUG, args, Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.default.emit_fmt(Level::INFO, args, Location::caller());
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.default.emit_fmt(Level::WARN, args, Location::caller());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.default.emit_fmt(Level::ERROR, args, Location::caller());
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.default.emit_fmt(Level::ERROR, args, Location::caller());
        std::process::exit(1)
    }

    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.default.emit_fmt(level, args, Location::caller());
    }

    fn route(
        &self,
        level: Level,
        msg: impl Into<String>,
        attrs: &[Attr],
        location: &'static Location<'static>,
    ) {
        self.default
            .emit_attrs(&Context::background(), level, msg, attrs, location);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("level", &self.level.get())
            .field("text_enabled", &self.text_enabled())
            .field("json_enabled", &self.json_enabled())
            .field("default", &*self.default)
            .finish()
    }
}

/// Builder for constructing a [`Registry`] with a fluent API
///
/// # Example
/// ```
/// use rust_dual_logger::prelude::*;
///
/// let registry = Registry::builder()
///     .level(Level::WARN)
///     .timestamp_format(TimestampFormat::UnixMillis)
///     .text(std::io::stderr(), false)
///     .json(std::io::sink(), true)
///     .build();
///
/// assert!(registry.text_enabled() && registry.json_enabled());
/// ```
pub struct RegistryBuilder {
    level: Level,
    timestamp_format: TimestampFormat,
    text: Option<(SharedWriter, bool)>,
    json: Option<(SharedWriter, bool)>,
    #[cfg(feature = "console")]
    text_colors: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            level: Level::INFO,
            timestamp_format: TimestampFormat::default(),
            text: None,
            json: None,
            #[cfg(feature = "console")]
            text_colors: false,
        }
    }

    /// Set the initial level threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Install a text sink, enabled from the start
    #[must_use = "builder methods return a new value"]
    pub fn text<W: Write + Send + 'static>(mut self, writer: W, add_source: bool) -> Self {
        self.text = Some((SharedWriter::new(writer), add_source));
        self
    }

    /// Install a JSON sink, enabled from the start
    #[must_use = "builder methods return a new value"]
    pub fn json<W: Write + Send + 'static>(mut self, writer: W, add_source: bool) -> Self {
        self.json = Some((SharedWriter::new(writer), add_source));
        self
    }

    /// Colour the level token of the text sink, including text sinks
    /// installed later through `set_text_logger`
    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn text_colors(mut self, use_colors: bool) -> Self {
        self.text_colors = use_colors;
        self
    }

    pub fn build(self) -> Registry {
        let level = Arc::new(LevelVar::new(self.level));
        let state = Arc::new(RouterState::default());
        let options = |add_source: bool| {
            HandlerOptions::new(Arc::clone(&level))
                .with_source(add_source)
                .with_timestamp_format(self.timestamp_format.clone())
        };

        if let Some((writer, add_source)) = self.text {
            let handler = TextHandler::with_writer(writer, options(add_source));
            #[cfg(feature = "console")]
            let handler = handler.with_colors(self.text_colors);
            state.install_text(Arc::new(handler));
            state.set_text_enabled(true);
        }

        if let Some((writer, add_source)) = self.json {
            let handler = JsonHandler::with_writer(writer, options(add_source));
            state.install_json(Arc::new(handler));
            state.set_json_enabled(true);
        }

        Registry {
            default: Arc::new(Logger::shared(Arc::clone(&state))),
            level,
            state,
            timestamp_format: self.timestamp_format,
            #[cfg(feature = "console")]
            text_colors: self.text_colors,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
