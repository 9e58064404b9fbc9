//! Pipeline file input and output
//!
//! Loading the occurrence stage's output and writing range-metrics records.

pub mod occurrence;
pub mod report;

pub use occurrence::{load_occurrences, parse_occurrence_json, OccurrenceSet};
pub use report::{write_json, BatchEntry, BatchSummary, RangeReport, ReportStatus};
