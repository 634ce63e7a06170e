//! JSONL (JSON Lines) emitter for output records.

use std::io::Write;

use crate::gitlab::ExtractionError;

use super::model::OutputRecord;

/// Destination for records as they are produced.
pub trait RecordSink {
    /// Accepts one record. Records arrive in emission order.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written; the caller stops
    /// producing further records.
    fn emit(&mut self, record: &OutputRecord) -> Result<(), ExtractionError>;
}

impl RecordSink for Vec<OutputRecord> {
    fn emit(&mut self, record: &OutputRecord) -> Result<(), ExtractionError> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes each record as one JSON object per line.
///
/// The writer is flushed after every line so records already emitted stay
/// visible if a later fetch fails.
#[derive(Debug)]
pub struct JsonlEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonlEmitter<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonlEmitter<W> {
    fn emit(&mut self, record: &OutputRecord) -> Result<(), ExtractionError> {
        serde_json::to_writer(&mut self.writer, record).map_err(|e| ExtractionError::Io {
            message: format!("JSON serialization failed: {e}"),
        })?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
