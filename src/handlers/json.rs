//! JSON line encoder for structured logging

use super::writer::SharedWriter;
use crate::core::{Attr, AttrScope, Context, Handler, HandlerOptions, Level, Record, Result, Value};
use chrono::SecondsFormat;
use std::io::Write;
use std::sync::Arc;

/// Encodes each record as a single-line JSON object (JSONL)
///
/// ```text
/// {"time":"2025-01-08T10:30:45.123Z","level":"WARN","source":{"file":"main.rs","line":12},"msg":"slow","age":18}
/// ```
///
/// Groups become nested objects. Attributes are emitted in order, so a key
/// repeated within a record appears repeatedly in the object rather than
/// being collapsed.
#[derive(Debug, Clone)]
pub struct JsonHandler {
    options: HandlerOptions,
    scope: AttrScope,
    writer: SharedWriter,
}

impl JsonHandler {
    pub fn new<W: Write + Send + 'static>(writer: W, options: HandlerOptions) -> Self {
        Self::with_writer(SharedWriter::new(writer), options)
    }

    pub fn with_writer(writer: SharedWriter, options: HandlerOptions) -> Self {
        Self {
            options,
            scope: AttrScope::new(),
            writer,
        }
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    /// Render a record as one newline-terminated JSON object
    pub fn format_record(&self, record: &Record) -> Result<String> {
        let mut out = String::with_capacity(160);

        out.push_str("{\"time\":");
        let time = self.options.timestamp_format.to_json_value(&record.time)?;
        out.push_str(&time.to_string());

        out.push_str(",\"level\":");
        out.push_str(&serde_json::to_string(&record.level.to_string())?);

        if self.options.add_source {
            if let Some(source) = record.source() {
                out.push_str(",\"source\":{\"file\":");
                out.push_str(&serde_json::to_string(source.file)?);
                out.push_str(",\"line\":");
                out.push_str(&source.line.to_string());
                out.push('}');
            }
        }

        out.push_str(",\"msg\":");
        out.push_str(&serde_json::to_string(&record.message)?);

        let mut first = false;
        for attr in self.scope.resolve(record.attrs()) {
            write_attr(&mut out, &attr, &mut first)?;
        }

        out.push_str("}\n");
        Ok(out)
    }

    fn derive(&self, scope: AttrScope) -> Arc<dyn Handler> {
        let mut handler = self.clone();
        handler.scope = scope;
        Arc::new(handler)
    }
}

impl Handler for JsonHandler {
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
        "json"
    }
}

/// Append one attribute as an object member; `first` tracks whether a
/// separating comma is needed
fn write_attr(out: &mut String, attr: &Attr, first: &mut bool) -> Result<()> {
    if attr.is_elided() {
        return Ok(());
    }

    if let Value::Group(members) = &attr.value {
        if attr.key.is_empty() {
            for member in members {
                write_attr(out, member, first)?;
            }
            return Ok(());
        }
    }

    if !*first {
        out.push(',');
    }
    *first = false;

    out.push_str(&serde_json::to_string(&attr.key)?);
    out.push(':');

    match &attr.value {
        Value::String(s) => out.push_str(&serde_json::to_string(s)?),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Uint(u) => out.push_str(&u.to_string()),
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(number) => out.push_str(&number.to_string()),
            None => out.push_str(&serde_json::to_string(&f.to_string())?),
        },
        Value::Duration(d) => {
            let nanos = u64::try_from(d.as_nanos()).unwrap_or(u64::MAX);
            out.push_str(&nanos.to_string());
        }
        Value::Time(t) => {
            let rendered = t.to_rfc3339_opts(SecondsFormat::AutoSi, true);
            out.push_str(&serde_json::to_string(&rendered)?);
        }
        Value::Any(json) => out.push_str(&json.to_string()),
        Value::Group(members) => {
            out.push('{');
            let mut nested_first = true;
            for member in members {
                write_attr(out, member, &mut nested_first)?;
            }
            out.push('}');
        }
    }

    Ok(())
}
