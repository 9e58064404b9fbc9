//! Planar geometry used by the range metrics
//!
//! Convex hulls and polygon areas for EOO, square occupancy grids for AOO.

pub mod hull;
pub mod grid;

pub use hull::{close_ring, convex_hull_indices, polygon_area};
pub use grid::{CellIndex, OccupancyGrid};
