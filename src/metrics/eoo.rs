//! Extent of Occurrence
//!
//! The EOO is the area of the minimum convex polygon around all occurrence
//! points, measured after projecting them to an equal-area plane. The hull
//! reported for mapping is computed separately on the unprojected
//! longitude/latitude points; the two hulls are built independently and
//! [`EooEstimate::hulls_agree`] records whether they use the same vertices.

use log::{debug, info};

use crate::coordinate::{CoordinateTransformer, Point};
use crate::errors::{RangeError, RangeResult};
use crate::geometry::hull::{close_ring, convex_hull_indices, polygon_area};
use super::constants::{grid, points as min_points};

/// EOO area and hull rings
#[derive(Debug, Clone)]
pub struct EooEstimate {
    /// Hull area in km²
    pub area_km2: f64,
    /// Closed hull ring in projected meters (area-bearing)
    pub projected_hull: Vec<Point>,
    /// Closed hull ring in longitude/latitude (for display)
    pub geographic_hull: Vec<Point>,
    /// Whether both hulls were built from the same input points
    pub hulls_agree: bool,
}

impl EooEstimate {
    /// Distinct vertices of the area-bearing hull
    pub fn projected_vertex_count(&self) -> usize {
        open_vertex_count(&self.projected_hull)
    }

    /// Distinct vertices of the reported hull
    pub fn geographic_vertex_count(&self) -> usize {
        open_vertex_count(&self.geographic_hull)
    }
}

fn open_vertex_count(ring: &[Point]) -> usize {
    ring.len().saturating_sub(1)
}

/// Compute the Extent of Occurrence of a geographic point set
///
/// # Arguments
/// * `points` - Occurrence points as longitude/latitude
/// * `transformer` - Projection to the equal-area plane
///
/// # Returns
/// The estimate, or `InsufficientPoints` for fewer than three points.
/// Collinear or coincident points give a zero-area hull, not an error.
pub fn estimate_eoo(points: &[Point], transformer: &CoordinateTransformer) -> RangeResult<EooEstimate> {
    if points.len() < min_points::MIN_POINTS_EOO {
        return Err(RangeError::InsufficientPoints {
            metric: "EOO",
            required: min_points::MIN_POINTS_EOO,
            found: points.len(),
        });
    }

    let projected = transformer.project_points(points);

    let mut projected_indices = convex_hull_indices(&projected);
    let projected_hull = close_ring(projected_indices.iter().map(|&i| projected[i]).collect());
    let area_km2 = polygon_area(&projected_hull) / grid::SQUARE_METERS_PER_SQUARE_KM;

    let mut geographic_indices = convex_hull_indices(points);
    let geographic_hull = close_ring(geographic_indices.iter().map(|&i| points[i]).collect());

    projected_indices.sort_unstable();
    geographic_indices.sort_unstable();
    let hulls_agree = projected_indices == geographic_indices;

    debug!("Projected hull has {} vertices, geographic hull has {}",
           projected_indices.len(), geographic_indices.len());
    info!("EOO: {:.2} km² from {} points", area_km2, points.len());

    Ok(EooEstimate {
        area_km2,
        projected_hull,
        geographic_hull,
        hulls_agree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Projection;
    use crate::coordinate::Mollweide;
    use approx::assert_relative_eq;

    fn from_projected(coords: &[(f64, f64)]) -> Vec<Point> {
        let moll = Mollweide::default();
        coords.iter().map(|&(x, y)| moll.inverse(x, y)).collect()
    }

    #[test]
    fn test_too_few_points() {
        let transformer = CoordinateTransformer::default();
        let points = vec![Point::new(10.0, 10.0), Point::new(10.1, 10.1)];

        match estimate_eoo(&points, &transformer) {
            Err(RangeError::InsufficientPoints { metric, required, found }) => {
                assert_eq!(metric, "EOO");
                assert_eq!(required, 3);
                assert_eq!(found, 2);
            },
            other => panic!("expected InsufficientPoints, got {:?}", other),
        }
    }

    #[test]
    fn test_projected_triangle_area() {
        let transformer = CoordinateTransformer::default();
        let origin = (1_500_000.0, 2_500_000.0);
        let points = from_projected(&[
            (origin.0, origin.1),
            (origin.0 + 20_000.0, origin.1),
            (origin.0, origin.1 + 30_000.0),
        ]);

        let eoo = estimate_eoo(&points, &transformer).unwrap();
        assert_relative_eq!(eoo.area_km2, 300.0, max_relative = 1e-6);
        assert_eq!(eoo.projected_hull.len(), 4);
        assert_eq!(eoo.geographic_hull.len(), 4);
        assert_eq!(eoo.projected_vertex_count(), 3);
        assert!(eoo.hulls_agree);
    }

    #[test]
    fn test_collinear_points_are_valid() {
        let transformer = CoordinateTransformer::default();
        let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0)];

        let eoo = estimate_eoo(&points, &transformer).unwrap();
        assert_eq!(eoo.area_km2, 0.0);
        assert_eq!(eoo.geographic_hull.first(), eoo.geographic_hull.last());
    }

    #[test]
    fn test_coincident_points_are_valid() {
        let transformer = CoordinateTransformer::default();
        let points = vec![Point::new(5.0, 5.0); 4];

        let eoo = estimate_eoo(&points, &transformer).unwrap();
        assert_eq!(eoo.area_km2, 0.0);
        assert_eq!(eoo.geographic_vertex_count(), 1);
    }

    #[test]
    fn test_bent_meridian_breaks_hull_agreement() {
        let transformer = CoordinateTransformer::default();
        // Collinear on lon = 60 in degrees, but the projected meridian bulges east
        let points = vec![
            Point::new(60.0, 0.0),
            Point::new(60.0, 40.0),
            Point::new(60.0, 80.0),
            Point::new(20.0, 40.0),
        ];

        let eoo = estimate_eoo(&points, &transformer).unwrap();
        assert!(!eoo.hulls_agree);
        assert_eq!(eoo.projected_vertex_count(), 4);
        assert_eq!(eoo.geographic_vertex_count(), 3);
        assert!(!eoo.geographic_hull.contains(&Point::new(60.0, 40.0)));
    }
}
