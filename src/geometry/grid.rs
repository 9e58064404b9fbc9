//! Square occupancy grid over projected points
//!
//! The grid origin is the lower-left corner of the points' own bounding box,
//! so every cell index is a non-negative `(column, row)` pair. Because the
//! grid is anchored to the data rather than to a fixed global lattice, a
//! translated copy of the same point pattern can straddle cell edges
//! differently and report a slightly different count.

use std::collections::HashSet;
use log::debug;

use crate::coordinate::{BoundingBox, Point};

/// `(column, row)` index of a grid cell
pub type CellIndex = (u64, u64);

/// Set of grid cells touched by at least one point
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    origin: Point,
    cell_size_m: f64,
    extent: BoundingBox,
    cells: HashSet<CellIndex>,
}

impl OccupancyGrid {
    /// Build the grid for a set of projected points
    ///
    /// # Arguments
    /// * `points` - Projected points in meters
    /// * `cell_size_m` - Cell edge length in meters, finite and positive
    ///
    /// # Returns
    /// `None` when there are no points
    pub fn from_points(points: &[Point], cell_size_m: f64) -> Option<Self> {
        let extent = BoundingBox::from_points(points)?;

        let mut grid = OccupancyGrid {
            origin: extent.min_point(),
            cell_size_m,
            extent,
            cells: HashSet::new(),
        };

        for point in points {
            let cell = grid.cell_of(point);
            grid.cells.insert(cell);
        }

        let (columns, rows) = grid.dimensions();
        debug!("Grid of {}x{} cells ({} m), {} occupied by {} points",
               columns, rows, cell_size_m, grid.cells.len(), points.len());

        Some(grid)
    }

    /// Cell containing a projected point
    pub fn cell_of(&self, point: &Point) -> CellIndex {
        let column = ((point.x - self.origin.x) / self.cell_size_m).floor().max(0.0);
        let row = ((point.y - self.origin.y) / self.cell_size_m).floor().max(0.0);
        (column as u64, row as u64)
    }

    /// Number of columns and rows needed to cover the points' extent
    pub fn dimensions(&self) -> (u64, u64) {
        let columns = (self.extent.width() / self.cell_size_m) as u64 + 1;
        let rows = (self.extent.height() / self.cell_size_m) as u64 + 1;
        (columns, rows)
    }

    /// Lower-left corner of cell (0, 0)
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Number of distinct occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// The occupied cells
    pub fn cells(&self) -> &HashSet<CellIndex> {
        &self.cells
    }
}
