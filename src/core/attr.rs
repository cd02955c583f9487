//! Attributes attached to log records
//!
//! This module provides:
//! - `Value`: the closed set of value kinds an attribute can carry
//! - `Attr`: a key/value pair, possibly a nested group
//! - `AttrScope`: the attribute and group context bound to a derived logger

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Value of a structured logging attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Duration(Duration),
    Time(DateTime<Utc>),
    Group(Vec<Attr>),
    /// Any serializable value, captured as JSON
    Any(serde_json::Value),
}

impl Value {
    /// Capture an arbitrary serializable value.
    ///
    /// A value that fails to serialize is kept as a string describing the
    /// failure rather than being lost.
    pub fn any<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Value::Any(json),
            Err(e) => Value::String(format!("!ERROR:{}", e)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Duration(d) => write!(f, "{:?}", d),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", attr)?;
                }
                f.write_str("]")
            }
            Value::Any(json) => write!(f, "{}", json),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<isize> for Value {
    fn from(i: isize) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl From<Vec<Attr>> for Value {
    fn from(attrs: Vec<Attr>) -> Self {
        Value::Group(attrs)
    }
}

/// A key/value pair attached to a record.
///
/// Keys need not be unique; records keep attributes in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn int(key: impl Into<String>, value: isize) -> Self {
        Self::new(key, Value::Int(value as i64))
    }

    pub fn int64(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, Value::Int(value))
    }

    pub fn uint64(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, Value::Uint(value))
    }

    pub fn float64(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Value::Float(value))
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, Value::Duration(value))
    }

    pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self::new(key, Value::Time(value))
    }

    /// A named group of attributes, nested under `key` in structured output
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::new(key, Value::Group(attrs.into_iter().collect()))
    }

    pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        Self::new(key, Value::any(value))
    }

    /// Whether encoders skip this attribute entirely.
    ///
    /// Empty-keyed scalars carry nothing to render, and groups with no
    /// renderable members are dropped.
    #[must_use]
    pub fn is_elided(&self) -> bool {
        match &self.value {
            Value::Group(attrs) => attrs.iter().all(Attr::is_elided),
            _ => self.key.is_empty(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Attr::new(key, value)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Attribute context bound to a logger through `with` and `with_group`.
///
/// Attributes bound before any group live at the root. Each `with_group`
/// opens a group that receives every attribute bound afterwards, plus the
/// attributes of each record, so the open groups form a chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrScope {
    root: Vec<Attr>,
    groups: Vec<(String, Vec<Attr>)>,
}

impl AttrScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind attributes to the innermost open group (or the root)
    #[must_use]
    pub fn with_attrs(&self, attrs: &[Attr]) -> Self {
        let mut scope = self.clone();
        match scope.groups.last_mut() {
            Some((_, bound)) => bound.extend_from_slice(attrs),
            None => scope.root.extend_from_slice(attrs),
        }
        scope
    }

    /// Open a group; an empty name leaves the scope unchanged
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        let mut scope = self.clone();
        if !name.is_empty() {
            scope.groups.push((name.to_string(), Vec::new()));
        }
        scope
    }

    /// Produce the full attribute list for a record.
    ///
    /// Bound attributes come first at every nesting level, followed by the
    /// record's own attributes inside the innermost open group.
    pub fn resolve(&self, record_attrs: &[Attr]) -> Vec<Attr> {
        let mut inner: Vec<Attr> = record_attrs.to_vec();
        for (name, bound) in self.groups.iter().rev() {
            let mut members = bound.clone();
            members.append(&mut inner);
            inner = vec![Attr::group(name.clone(), members)];
        }

        let mut attrs = self.root.clone();
        attrs.append(&mut inner);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_eq!(Value::from(18), Value::Int(18));
        assert_eq!(Value::from(7u64), Value::Uint(7));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
    }

    #[test]
    fn test_attr_display() {
        let attr = Attr::group("req", [Attr::int("id", 7), Attr::string("path", "/")]);
        assert_eq!(attr.to_string(), "req=[id=7 path=/]");
    }

    #[test]
    fn test_any_captures_json() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let attr = Attr::any("p", &Point { x: 1, y: 2 });
        assert_eq!(attr.value, Value::Any(serde_json::json!({"x": 1, "y": 2})));
    }

    #[test]
    fn test_elided() {
        assert!(Attr::string("", "v").is_elided());
        assert!(Attr::group("g", Vec::new()).is_elided());
        assert!(Attr::group("g", [Attr::string("", "v")]).is_elided());
        assert!(!Attr::group("", [Attr::int("a", 1)]).is_elided());
        assert!(!Attr::int("a", 1).is_elided());
    }

    #[test]
    fn test_scope_preserves_order() {
        let scope = AttrScope::new()
            .with_attrs(&[Attr::int("a", 1)])
            .with_attrs(&[Attr::int("b", 2)]);

        let attrs = scope.resolve(&[Attr::int("c", 3), Attr::int("a", 4)]);
        let keys: Vec<&str> = attrs.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn test_scope_nests_groups() {
        let scope = AttrScope::new()
            .with_attrs(&[Attr::string("svc", "api")])
            .with_group("req")
            .with_attrs(&[Attr::int("id", 9)])
            .with_group("db");

        let attrs = scope.resolve(&[Attr::int("rows", 3)]);
        assert_eq!(
            attrs,
            vec![
                Attr::string("svc", "api"),
                Attr::group(
                    "req",
                    [Attr::int("id", 9), Attr::group("db", [Attr::int("rows", 3)])]
                ),
            ]
        );
    }

    #[test]
    fn test_empty_group_name_is_identity() {
        let scope = AttrScope::new().with_attrs(&[Attr::int("a", 1)]);
        assert_eq!(scope.with_group(""), scope);
    }
}
