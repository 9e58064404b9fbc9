//! Range metric computation
//!
//! Extent of Occurrence, Area of Occupancy, Criterion B classification and
//! the summary record that combines them.

pub mod constants;
pub mod criterion_b;
pub mod eoo;
pub mod aoo;
pub mod summary;

pub use aoo::{estimate_aoo, AooEstimate};
pub use criterion_b::{assess_criterion_b, CriterionBResult, SubCriterionStatus, ThreatCategory};
pub use eoo::{estimate_eoo, EooEstimate};
pub use summary::{GeographicRange, RangeMetrics, RangeSummaryBuilder};
