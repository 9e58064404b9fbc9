//! Area of Occupancy
//!
//! Counts the grid cells that contain at least one projected occurrence
//! point and multiplies by the cell area.

use log::info;

use crate::coordinate::{CoordinateTransformer, Point};
use crate::errors::{RangeError, RangeResult};
use crate::geometry::OccupancyGrid;
use super::constants::{grid, points as min_points};

/// AOO area and the grid it was counted on
#[derive(Debug, Clone)]
pub struct AooEstimate {
    /// Occupied area in km²
    pub area_km2: f64,
    /// Number of distinct occupied cells
    pub occupied_cells: usize,
    /// Cell edge length in km
    pub cell_size_km: f64,
}

/// Compute the Area of Occupancy of a geographic point set
///
/// # Arguments
/// * `points` - Occurrence points as longitude/latitude
/// * `cell_size_km` - Grid cell edge length in kilometers
/// * `transformer` - Projection to the equal-area plane
///
/// # Returns
/// The estimate, or `InsufficientPoints` for an empty point set
pub fn estimate_aoo(points: &[Point], cell_size_km: f64, transformer: &CoordinateTransformer) -> RangeResult<AooEstimate> {
    if !cell_size_km.is_finite() || cell_size_km <= 0.0 {
        return Err(RangeError::InvalidConfig(format!(
            "Grid cell size must be a positive number of km, got {}", cell_size_km
        )));
    }

    let projected = transformer.project_points(points);
    let occupancy = OccupancyGrid::from_points(&projected, cell_size_km * grid::METERS_PER_KM)
        .ok_or(RangeError::InsufficientPoints {
            metric: "AOO",
            required: min_points::MIN_POINTS_AOO,
            found: 0,
        })?;

    let occupied_cells = occupancy.occupied_count();
    let area_km2 = occupied_cells as f64 * cell_size_km * cell_size_km;

    info!("AOO: {:.2} km² ({} grid cells of {} km)", area_km2, occupied_cells, cell_size_km);

    Ok(AooEstimate {
        area_km2,
        occupied_cells,
        cell_size_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let transformer = CoordinateTransformer::default();
        let aoo = estimate_aoo(&[Point::new(-3.7, 40.4)], 2.0, &transformer).unwrap();

        assert_eq!(aoo.occupied_cells, 1);
        assert_eq!(aoo.area_km2, 4.0);
    }

    #[test]
    fn test_cell_size_is_configurable() {
        let transformer = CoordinateTransformer::default();
        let aoo = estimate_aoo(&[Point::new(-3.7, 40.4)], 10.0, &transformer).unwrap();

        assert_eq!(aoo.area_km2, 100.0);
        assert_eq!(aoo.cell_size_km, 10.0);
    }

    #[test]
    fn test_distant_points_use_separate_cells() {
        let transformer = CoordinateTransformer::default();
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.000001, 0.000001),
        ];
        let aoo = estimate_aoo(&points, 2.0, &transformer).unwrap();

        assert_eq!(aoo.occupied_cells, 3);
        assert_eq!(aoo.area_km2, 12.0);
    }

    #[test]
    fn test_empty_point_set() {
        let transformer = CoordinateTransformer::default();
        let result = estimate_aoo(&[], 2.0, &transformer);

        assert!(matches!(
            result,
            Err(RangeError::InsufficientPoints { metric: "AOO", required: 1, found: 0 })
        ));
    }

    #[test]
    fn test_invalid_cell_size() {
        let transformer = CoordinateTransformer::default();
        let points = [Point::new(0.0, 0.0)];

        assert!(matches!(estimate_aoo(&points, 0.0, &transformer), Err(RangeError::InvalidConfig(_))));
        assert!(matches!(estimate_aoo(&points, -1.0, &transformer), Err(RangeError::InvalidConfig(_))));
    }
}
