//! Human-readable `key=value` line encoder

use super::writer::SharedWriter;
use crate::core::{
    Attr, AttrScope, Context, Handler, HandlerOptions, Level, Record, Result, Value,
};
use chrono::SecondsFormat;
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

/// Encodes each record as one line of `key=value` pairs:
///
/// ```text
/// time=2025-01-08T10:30:45.123Z level=INFO source=main.rs:12 msg="user login" req.id=7
/// ```
///
/// Attributes inside groups are flattened with dotted keys. Values are
/// quoted with escapes when they are empty or contain spaces, `=`, `"` or
/// control characters, so a message can never spill onto a second line.
#[derive(Debug, Clone)]
pub struct TextHandler {
    options: HandlerOptions,
    scope: AttrScope,
    writer: SharedWriter,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl TextHandler {
    pub fn new<W: Write + Send + 'static>(writer: W, options: HandlerOptions) -> Self {
        Self::with_writer(SharedWriter::new(writer), options)
    }

    pub fn with_writer(writer: SharedWriter, options: HandlerOptions) -> Self {
        Self {
            options,
            scope: AttrScope::new(),
            writer,
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Colour the level token with ANSI escapes
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    /// Render a record as a single newline-terminated line
    pub fn format_record(&self, record: &Record) -> Result<String> {
        let mut out = String::with_capacity(128);

        out.push_str("time=");
        out.push_str(&self.options.timestamp_format.format(&record.time)?);

        out.push_str(" level=");
        out.push_str(&self.format_level(record.level));

        if self.options.add_source {
            if let Some(source) = record.source() {
                out.push_str(" source=");
                out.push_str(&quote_if_needed(&source.to_string()));
            }
        }

        out.push_str(" msg=");
        out.push_str(&quote_if_needed(&record.message));

        for attr in self.scope.resolve(record.attrs()) {
            write_attr(&mut out, "", &attr);
        }

        out.push('\n');
        Ok(out)
    }

    fn format_level(&self, level: Level) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return level.to_string().color(level.color_code()).to_string();
        }
        level.to_string()
    }

    fn derive(&self, scope: AttrScope) -> Arc<dyn Handler> {
        let mut handler = self.clone();
        handler.scope = scope;
        Arc::new(handler)
    }
}

impl Handler for TextHandler {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        self.options.enabled(level)
    }

    fn handle(&self, _ctx: &Context, record: &Record) -> Result<()> {
        let line = self.format_record(record)?;
        self.writer.write_record(line.as_bytes())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        self.derive(self.scope.with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        self.derive(self.scope.with_group(name))
    }

    fn name(&self) -> &str {
        "text"
    }
}

fn write_attr(out: &mut String, prefix: &str, attr: &Attr) {
    if attr.is_elided() {
        return;
    }

    if let Value::Group(members) = &attr.value {
        let nested = match (prefix.is_empty(), attr.key.is_empty()) {
            (_, true) => prefix.to_string(),
            (true, false) => attr.key.clone(),
            (false, false) => format!("{}.{}", prefix, attr.key),
        };
        for member in members {
            write_attr(out, &nested, member);
        }
        return;
    }

    let key = if prefix.is_empty() {
        attr.key.clone()
    } else {
        format!("{}.{}", prefix, attr.key)
    };

    out.push(' ');
    out.push_str(&quote_if_needed(&key));
    out.push('=');
    out.push_str(&format_value(&attr.value));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => quote_if_needed(s),
        Value::Time(t) => t.to_rfc3339_opts(SecondsFormat::Millis, true),
        Value::Any(serde_json::Value::String(s)) => quote_if_needed(s),
        Value::Any(json) => quote_if_needed(&json.to_string()),
        other => quote_if_needed(&other.to_string()),
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.chars()
            .any(|c| c == '=' || c == '"' || c.is_whitespace() || c.is_control())
}

fn quote_if_needed(s: &str) -> String {
    if needs_quoting(s) {
        format!("{:?}", s)
    } else {
        s.to_string()
    }
}
