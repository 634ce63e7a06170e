//! Output records and the line-oriented emitter that writes them.
//!
//! Every non-system note becomes one [`OutputRecord`]. Records are handed
//! to a [`RecordSink`] one at a time as they are produced; [`JsonlEmitter`]
//! writes each as a single JSON object on its own line.

mod jsonl;
mod model;

pub use jsonl::{JsonlEmitter, RecordSink};
pub use model::OutputRecord;
