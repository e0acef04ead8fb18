//! Recording of training metrics.
//!
//! A [`Record`] is a key-value container filled by the trainer and the agent
//! during training (loss, episode return, epsilon, ...). A [`Recorder`]
//! decides where stored records end up: [`NullRecorder`] discards them,
//! [`CsvRecorder`] exports them as rows of a CSV file.
mod base;
mod csv_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use csv_recorder::CsvRecorder;
pub use recorder::{NullRecorder, Recorder};
