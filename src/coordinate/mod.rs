//! Coordinate handling for geospatial data
//!
//! This module provides the point and bounding box types and the
//! equal-area projection used by the range metrics.

mod bbox;
mod point;
mod transform;
mod crs;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::{CoordinateTransformer, Mollweide, Projection};
pub use self::crs::CoordinateSystem;
