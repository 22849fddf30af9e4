//! Turns resignation notices pasted from HR e-mail into [`ResigneeRecord`]s.
//!
//! Each resignee occupies ten non-blank lines. Stray blank lines between fields are
//! ignored, a short trailing group is dropped, and a group that fails validation is
//! skipped without affecting the rest of the batch.

mod parser;
mod record;

pub use record::{
    RecordRejection, ResigneeDisplay, ResigneeRecord, FIELD_COUNT, SOURCE_DATE_FORMAT,
};

use tracing::debug;

/// A ten-line group that was complete but could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedChunk {
    /// Zero-based position among the complete groups of the input.
    pub index: usize,
    /// First line of the group, which is normally the employee number.
    pub employee_no: String,
    pub reason: RecordRejection,
}

/// Accepted records plus what was left behind, for callers that want to report it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeOutcome {
    pub records: Vec<ResigneeRecord>,
    pub rejected: Vec<RejectedChunk>,
    pub dropped_lines: usize,
}

impl IntakeOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.dropped_lines == 0
    }
}

/// Parses pasted text into records, silently skipping malformed or partial groups.
pub fn parse_resignees(raw: &str) -> Vec<ResigneeRecord> {
    parse_with_diagnostics(raw).records
}

/// Lazy form of [`parse_resignees`], yielding the same records in the same order.
pub fn resignee_records(raw: &str) -> impl Iterator<Item = ResigneeRecord> + '_ {
    parser::chunk_lines(raw).filter_map(|chunk| ResigneeRecord::from_fields(&chunk.fields).ok())
}

pub fn parse_with_diagnostics(raw: &str) -> IntakeOutcome {
    let mut chunks = parser::chunk_lines(raw);
    let mut outcome = IntakeOutcome::default();

    for chunk in chunks.by_ref() {
        match ResigneeRecord::from_fields(&chunk.fields) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                let employee_no = chunk.fields.first().copied().unwrap_or_default();
                debug!(index = chunk.index, employee_no, %reason, "skipping resignee chunk");
                outcome.rejected.push(RejectedChunk {
                    index: chunk.index,
                    employee_no: employee_no.to_string(),
                    reason,
                });
            }
        }
    }

    outcome.dropped_lines = chunks.trailing_lines();
    if outcome.dropped_lines > 0 {
        debug!(
            lines = outcome.dropped_lines,
            "dropping incomplete trailing resignee chunk"
        );
    }

    outcome
}
