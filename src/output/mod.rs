//! Output module for record formatting and progress reporting
//!
//! This module handles:
//! - Formatting machine records into their output blocks
//! - Appending records to the destination file
//! - Reporting crawl progress to the console

mod progress;
mod sink;

pub use progress::{ConsoleProgress, NullProgress, ProgressReporter};
pub use sink::{format_record, FileSink, RecordSink, VecSink};
