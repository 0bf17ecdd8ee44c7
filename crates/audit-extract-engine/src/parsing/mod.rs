//! # Finding Extraction
//!
//! Two-phase extraction over the ordered paragraph lines of a report.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    [`LineKind`] from the line text and the minimal ambient context
//!    (body started, inside a table block)
//!
//! 2. **Record Accumulation** (`accumulator`): a [`RecordAccumulator`]
//!    applies each classified line as one transition, emitting a
//!    [`FindingRecord`](crate::models::FindingRecord) whenever a heading
//!    closes the finding under construction
//!
//! ## Key Invariants
//!
//! - A record is emitted iff its finding title is non-empty at flush time
//! - Area and category titles carry forward across sibling findings
//! - Every content line lands in exactly one bucket, or nowhere
//! - Lines between a table caption and the next blank line are discarded
//! - Unrecognized input degrades to a silent drop, never an error

pub mod accumulator;
pub mod classify;

pub use accumulator::RecordAccumulator;
pub use classify::{Context, LineClassifier, LineKind};

use crate::models::FindingRecord;

/// Runs the single-pass extraction over the document's paragraph lines.
///
/// Lines are trimmed, classified against the accumulator's ambient state,
/// and folded into records. The final flush at end-of-stream closes the
/// last open finding, if any.
pub fn extract_findings<I, S>(lines: I) -> Vec<FindingRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = LineClassifier;
    let mut accumulator = RecordAccumulator::new();
    let mut records = Vec::new();

    for line in lines {
        let kind = classifier.classify(line.as_ref().trim(), accumulator.context());
        if let Some(record) = accumulator.push(kind) {
            records.push(record);
        }
    }

    records.extend(accumulator.finish());
    records
}
