//! Custom error types for range metric computation

use std::fmt;
use std::io;

/// Range-metric error types
#[derive(Debug)]
pub enum RangeError {
    /// I/O error
    IoError(io::Error),
    /// Required upstream file or record is absent
    MissingInput(String),
    /// Too few usable occurrence points for a metric
    InsufficientPoints {
        /// Metric that could not be computed ("EOO" or "AOO")
        metric: &'static str,
        /// Minimum number of points the metric needs
        required: usize,
        /// Number of usable points that were available
        found: usize,
    },
    /// Configuration value out of its valid range
    InvalidConfig(String),
    /// JSON (de)serialization failure
    JsonError(serde_json::Error),
    /// TOML configuration parse failure
    TomlError(toml::de::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::IoError(e) => write!(f, "I/O error: {}", e),
            RangeError::MissingInput(what) => write!(f, "Missing input: {}", what),
            RangeError::InsufficientPoints { metric, required, found } => write!(
                f,
                "Not enough points to calculate {} (need at least {}, found {})",
                metric, required, found
            ),
            RangeError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            RangeError::JsonError(e) => write!(f, "JSON error: {}", e),
            RangeError::TomlError(e) => write!(f, "TOML error: {}", e),
            RangeError::GenericError(msg) => write!(f, "Range error: {}", msg),
        }
    }
}

impl std::error::Error for RangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RangeError::IoError(e) => Some(e),
            RangeError::JsonError(e) => Some(e),
            RangeError::TomlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RangeError {
    fn from(error: io::Error) -> Self {
        RangeError::IoError(error)
    }
}

impl From<serde_json::Error> for RangeError {
    fn from(error: serde_json::Error) -> Self {
        RangeError::JsonError(error)
    }
}

impl From<toml::de::Error> for RangeError {
    fn from(error: toml::de::Error) -> Self {
        RangeError::TomlError(error)
    }
}

/// Result type for range metric operations
pub type RangeResult<T> = Result<T, RangeError>;

impl From<String> for RangeError {
    fn from(msg: String) -> Self {
        RangeError::GenericError(msg)
    }
}

/// Non-fatal conditions recorded in the `warnings` list of a result
#[derive(Debug, Clone, PartialEq)]
pub enum RangeWarning {
    /// AOO exceeds EOO, which cannot happen for a correct hull and grid
    GeometricInconsistency {
        eoo_km2: f64,
        aoo_km2: f64,
    },
    /// Reported geographic hull and area-bearing projected hull use different vertices
    HullMismatch {
        projected_vertices: usize,
        geographic_vertices: usize,
    },
    /// Occurrence entries dropped for missing, unparseable or out-of-range coordinates
    MalformedCoordinates {
        excluded: usize,
    },
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeWarning::GeometricInconsistency { eoo_km2, aoo_km2 } => write!(
                f,
                "EOO ({:.0} km²) < AOO ({:.0} km²): AOO cannot exceed EOO",
                eoo_km2, aoo_km2
            ),
            RangeWarning::HullMismatch { projected_vertices, geographic_vertices } => write!(
                f,
                "Reported convex hull and area hull select different occurrence points as vertices \
                 (geographic: {}, projected: {})",
                geographic_vertices, projected_vertices
            ),
            RangeWarning::MalformedCoordinates { excluded } => write!(
                f,
                "Excluded {} occurrence record(s) with missing or invalid coordinates",
                excluded
            ),
        }
    }
}
