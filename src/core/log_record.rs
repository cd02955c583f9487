//! Log record structure

use super::attr::Attr;
use super::log_level::Level;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source location of the logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    /// File name with the directory removed
    pub file: &'a str,
    pub line: u32,
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One log event, built per call and handed to each enabled handler.
///
/// The call site is captured as a `Location` by the public entry point
/// that created the record; it is only turned into a [`Source`] when a
/// handler asks for it.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    location: Option<&'static Location<'static>>,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(
        level: Level,
        message: impl Into<String>,
        location: Option<&'static Location<'static>>,
    ) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            location,
            attrs: Vec::new(),
        }
    }

    /// Create a record whose message is rendered from format arguments.
    ///
    /// Formatted records carry no attributes of their own.
    pub fn formatted(
        level: Level,
        args: fmt::Arguments<'_>,
        location: Option<&'static Location<'static>>,
    ) -> Self {
        let message = match args.as_str() {
            Some(literal) => literal.to_string(),
            None => args.to_string(),
        };
        Self::new(level, message, location)
    }

    /// Append attributes, keeping order and duplicates
    pub fn add_attrs(&mut self, attrs: &[Attr]) {
        self.attrs.extend_from_slice(attrs);
    }

    /// Append alternating key/value pairs
    pub fn add<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<super::attr::Value>,
    {
        self.attrs
            .extend(pairs.into_iter().map(|(key, value)| Attr::new(key, value)));
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: &[Attr]) -> Self {
        self.add_attrs(attrs);
        self
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }

    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Resolve the call site, stripping the directory from the file path
    pub fn source(&self) -> Option<Source<'static>> {
        self.location.map(|location| {
            let file = location.file();
            let base = Path::new(file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(file);
            Source {
                file: base,
                line: location.line(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_verbatim_message() {
        let record = Record::new(Level::INFO, "100% {done}", None);
        assert_eq!(record.message, "100% {done}");
        assert_eq!(record.num_attrs(), 0);
        assert!(record.source().is_none());
    }

    #[test]
    fn test_record_formatted_message() {
        let name = "world";
        let record = Record::formatted(Level::WARN, format_args!("hello {}", name), None);
        assert_eq!(record.message, "hello world");
        assert_eq!(record.level, Level::WARN);
    }

    #[test]
    fn test_attrs_keep_order_and_duplicates() {
        let mut record = Record::new(Level::INFO, "msg", None);
        record.add_attrs(&[Attr::int("a", 1), Attr::int("b", 2)]);
        record.add([("a", 3)]);

        let keys: Vec<&str> = record.attrs().iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_source_strips_directory() {
        let line = line!() + 1;
        let record = Record::new(Level::INFO, "msg", Some(Location::caller()));
        let source = record.source().expect("location captured");

        assert_eq!(source.file, "log_record.rs");
        assert_eq!(source.line, line);
        assert_eq!(source.to_string(), format!("log_record.rs:{}", line));
    }
}
