//! Record sink implementations
//!
//! A sink accepts one formatted record per extracted machine. The file
//! sink opens its destination in append mode and never truncates, so a
//! crawl adds to whatever a prior run left behind.

use crate::extract::MachineRecord;
use crate::ScrapeError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Formats one machine record as its output block
///
/// The two extended sections appear only when the record carries them.
pub fn format_record(record: &MachineRecord) -> String {
    let mut block = String::new();

    block.push_str("---------- Machine ----------\n");
    block.push_str(&format!("Title: {}\n", record.title));
    block.push_str(&format!("URL: {}\n", record.url));

    if let Some(description) = &record.description {
        block.push_str("---------- Description ----------\n");
        block.push_str(description);
        block.push('\n');
    }

    if let Some(release_notes) = &record.release_notes {
        block.push_str("---------- About Release ----------\n");
        block.push_str(release_notes);
        block.push('\n');
    }

    block.push('\n');
    block
}

/// Destination for extracted machine records
pub trait RecordSink {
    /// Writes one record; called exactly once per extracted machine
    fn write_record(&mut self, record: &MachineRecord) -> Result<(), ScrapeError>;
}

/// Appends formatted records to a file
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Opens the destination file in append mode, creating it if needed
    ///
    /// Existing content is preserved.
    pub fn open(path: &Path) -> Result<Self, ScrapeError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl RecordSink for FileSink {
    fn write_record(&mut self, record: &MachineRecord) -> Result<(), ScrapeError> {
        self.file.write_all(format_record(record).as_bytes())?;
        Ok(())
    }
}

/// Collects records in memory; used as a test double
#[derive(Debug, Default)]
pub struct VecSink {
    pub records: Vec<MachineRecord>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for VecSink {
    fn write_record(&mut self, record: &MachineRecord) -> Result<(), ScrapeError> {
        self.records.push(record.clone());
        Ok(())
    }
}
