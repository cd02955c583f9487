//! Handler implementations

pub mod json;
pub mod text;
pub mod writer;

pub use json::JsonHandler;
pub use text::TextHandler;
pub use writer::SharedWriter;

// Re-export the trait alongside its implementations
pub use crate::core::Handler;
