//! Timestamp formatting for record headers
//!
//! Both encoders render the record time through a `TimestampFormat`.
//! The default matches the RFC 3339 millisecond form understood by most
//! log aggregation tools.

use super::error::{LoggerError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_dual_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::default();
/// let timestamp = format.format(&Utc::now()).unwrap();
/// assert!(timestamp.ends_with('Z'));
///
/// // An unknown strftime specifier is reported instead of panicking
/// assert!(TimestampFormat::Custom("%Q".into()).format(&Utc::now()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Rfc3339Millis,

    /// RFC 3339 with microseconds: `2025-01-08T10:30:45.123456Z`
    Rfc3339Micros,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `%d/%b/%Y:%H:%M:%S %z`
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`; fails only for a custom pattern chrono rejects
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        match self {
            TimestampFormat::Rfc3339Millis => {
                Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            TimestampFormat::Rfc3339Micros => {
                Ok(datetime.to_rfc3339_opts(SecondsFormat::Micros, true))
            }
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::with_capacity(format_str.len() + 16);
                write!(out, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("invalid strftime pattern {:?}", format_str),
                    )
                })?;
                Ok(out)
            }
        }
    }

    /// Timestamp as a JSON value: numeric formats stay numbers
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        match self {
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().into()),
            _ => self.format(datetime).map(serde_json::Value::String),
        }
    }
}
