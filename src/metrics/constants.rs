//! Range metric constants
//!
//! IUCN-defined thresholds and conventions used throughout the range
//! computation, named here instead of being scattered as literals.

/// Grid conventions for Area of Occupancy
pub mod grid {
    /// IUCN reference cell edge length in kilometers
    pub const DEFAULT_CELL_SIZE_KM: f64 = 2.0;

    pub const METERS_PER_KM: f64 = 1_000.0;
    pub const SQUARE_METERS_PER_SQUARE_KM: f64 = 1_000_000.0;
}

/// Minimum usable occurrence points per metric
pub mod points {
    /// A convex hull needs at least three points
    pub const MIN_POINTS_EOO: usize = 3;

    /// A single point occupies exactly one cell
    pub const MIN_POINTS_AOO: usize = 1;
}

/// Criterion B upper bounds (exclusive) in km²
pub mod criterion_b {
    pub const B1_CRITICALLY_ENDANGERED_KM2: f64 = 100.0;
    pub const B1_ENDANGERED_KM2: f64 = 5_000.0;
    pub const B1_VULNERABLE_KM2: f64 = 20_000.0;

    pub const B2_CRITICALLY_ENDANGERED_KM2: f64 = 10.0;
    pub const B2_ENDANGERED_KM2: f64 = 500.0;
    pub const B2_VULNERABLE_KM2: f64 = 2_000.0;
}

/// Sample-size heuristic for the confidence score
pub mod confidence {
    /// Occurrence counts strictly above this get the high score
    pub const HIGH_CONFIDENCE_MIN_OCCURRENCES: usize = 100;
    pub const HIGH_CONFIDENCE: f64 = 0.85;
    pub const LOW_CONFIDENCE: f64 = 0.6;
}

/// Fixed values written into the range-metrics record
pub mod report {
    pub const AGENT: &str = "geographic";
    pub const METHOD: &str = "rust_mollweide_hull_grid";
    pub const EXPERT_ANALYSIS_PENDING: &str = "TBD - requires expert analysis";
}

/// Pipeline file layout
pub mod files {
    pub const DEFAULT_DATA_DIR: &str = "data";
    pub const OCCURRENCE_FILE: &str = "02_occurrence_data.json";
    pub const RANGE_METRICS_FILE: &str = "03_range_metrics.json";
    pub const BATCH_SUMMARY_FILE: &str = "batch_summary.json";
}
