//! Core logger types and traits

pub mod attr;
pub mod context;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use attr::{Attr, AttrScope, Value};
pub use context::Context;
pub use error::{LoggerError, Result};
pub use handler::{Handler, HandlerOptions};
pub use log_level::{Level, LevelVar};
pub use log_record::{Record, Source};
pub use logger::Logger;
pub use metrics::DispatchMetrics;
pub use registry::{Registry, RegistryBuilder};
pub use timestamp::TimestampFormat;
