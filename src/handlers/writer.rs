//! Destination stream shared by a handler and everything derived from it

use crate::core::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A byte sink guarded by a mutex.
///
/// Cloning shares the underlying stream. Every record is written with one
/// `write_all` while holding the lock, so records from concurrent callers
/// never interleave mid-line.
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write one encoded record and flush it through
    pub fn write_record(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").finish_non_exhaustive()
    }
}
