pub mod errors;
pub mod config;
pub mod coordinate;
pub mod geometry;
pub mod metrics;
pub mod io;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RangeKit;

pub use config::RangeConfig;
pub use errors::{RangeError, RangeResult, RangeWarning};
pub use coordinate::{BoundingBox, Point, CoordinateTransformer, CoordinateSystem, Mollweide, Projection};
pub use metrics::{RangeMetrics, RangeSummaryBuilder, CriterionBResult, SubCriterionStatus, ThreatCategory};
pub use io::{OccurrenceSet, RangeReport};
