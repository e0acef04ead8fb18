//! CSV export of training records.
use super::{Record, RecordValue, Recorder};
use anyhow::Result;
use std::{fs::File, path::Path};

/// Exports scalar record values as rows of a CSV file.
///
/// The column layout is fixed by the first stored record: its scalar keys,
/// sorted, preceded by a `step` column. Non-scalar values and keys appearing
/// only in later records are ignored; missing values leave the cell empty.
pub struct CsvRecorder {
    wtr: csv::Writer<File>,
    keys: Option<Vec<String>>,
    buf: Vec<Record>,
}

impl CsvRecorder {
    /// Creates a recorder writing to the file at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            wtr: csv::Writer::from_path(path)?,
            keys: None,
            buf: Vec::new(),
        })
    }

    fn header_from(record: &Record) -> Vec<String> {
        let mut keys = record
            .iter()
            .filter(|(_, v)| matches!(v, RecordValue::Scalar(_)))
            .map(|(k, _)| k.clone())
            .collect::<Vec<_>>();
        keys.sort();
        keys
    }
}

impl Recorder for CsvRecorder {
    fn store(&mut self, record: Record) {
        self.buf.push(record);
    }

    fn flush(&mut self, step: i64) -> Result<()> {
        for record in self.buf.drain(..) {
            if self.keys.is_none() {
                let keys = Self::header_from(&record);
                let mut header = vec!["step".to_string()];
                header.extend(keys.iter().cloned());
                self.wtr.write_record(&header)?;
                self.keys = Some(keys);
            }

            let keys = self.keys.as_ref().unwrap();
            let mut row = vec![step.to_string()];
            for k in keys.iter() {
                match record.get(k) {
                    Some(RecordValue::Scalar(v)) => row.push(v.to_string()),
                    _ => row.push(String::new()),
                }
            }
            self.wtr.write_record(&row)?;
        }
        self.wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn writes_header_and_rows() {
        let dir = TempDir::new("csv_recorder").unwrap();
        let path = dir.path().join("train.csv");

        let mut recorder = CsvRecorder::new(&path).unwrap();
        recorder.store(Record::from_slice(&[
            ("loss", RecordValue::Scalar(0.5)),
            ("episode_len", RecordValue::Scalar(12.0)),
        ]));
        recorder.store(Record::from_scalar("loss", 0.25));
        recorder.flush(1).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "step,episode_len,loss");
        assert_eq!(lines[1], "1,12,0.5");
        assert_eq!(lines[2], "1,,0.25");
    }
}
