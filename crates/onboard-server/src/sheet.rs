//! Append-only sheet sink
//!
//! The durable side of a submission: rows go in, nothing comes back
//! out on the write path. No dedup, no schema enforcement beyond the
//! column order the record already carries.

use onboard_schema::SubmissionRecord;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;

/// Sheet sink failure
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Underlying I/O failure
    #[error("sheet i/o failed: {0}")]
    Io(#[from] io::Error),

    /// Row serialization failure
    #[error("row serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only row sink
pub trait RowSink: Send + Sync {
    /// Append one row; order of concurrent appends is the lock order
    ///
    /// # Errors
    /// Returns [`SheetError`] if the row cannot be persisted.
    fn append(&self, record: &SubmissionRecord) -> Result<(), SheetError>;
}

/// In-memory sheet, inspectable for tests
#[derive(Debug, Default)]
pub struct MemorySheet {
    rows: Mutex<Vec<SubmissionRecord>>,
}

impl MemorySheet {
    /// Create an empty sheet
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all appended rows, in append order
    #[must_use]
    pub fn rows(&self) -> Vec<SubmissionRecord> {
        self.rows.lock().clone()
    }

    /// Number of appended rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    /// Whether nothing has been appended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl RowSink for MemorySheet {
    fn append(&self, record: &SubmissionRecord) -> Result<(), SheetError> {
        self.rows.lock().push(record.clone());
        Ok(())
    }
}

/// File-backed sheet: one JSON row array per line, append-only
#[derive(Debug)]
pub struct JsonlSheet {
    file: Mutex<File>,
}

impl JsonlSheet {
    /// Open (creating if needed) a sheet file for appending
    ///
    /// # Errors
    /// Returns [`SheetError`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl RowSink for JsonlSheet {
    fn append(&self, record: &SubmissionRecord) -> Result<(), SheetError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
