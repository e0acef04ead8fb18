//! Recorder interface.
use super::Record;
use anyhow::Result;

/// Writes records somewhere, e.g. into a CSV file.
pub trait Recorder {
    /// Stores a record.
    fn store(&mut self, record: Record);

    /// Writes out buffered records.
    ///
    /// `step` is an opaque progress counter, typically the episode index.
    fn flush(&mut self, step: i64) -> Result<()>;
}

/// A recorder that discards all records.
pub struct NullRecorder {}

impl Recorder for NullRecorder {
    fn store(&mut self, _record: Record) {}

    fn flush(&mut self, _step: i64) -> Result<()> {
        Ok(())
    }
}
