//! Request-scoped context passed through to handlers

use std::time::Instant;

/// Cancellation and deadline context for `Logger::log` and `Logger::log_attrs`.
///
/// Dispatch never consults it to skip or abort a write; it is forwarded to
/// `Handler::enabled` and `Handler::handle` so custom handlers can.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    deadline: Option<Instant>,
}

impl Context {
    /// An empty context with no deadline
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
