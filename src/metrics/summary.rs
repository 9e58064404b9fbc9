//! Range summary assembly
//!
//! Runs the EOO and AOO estimators on one species' point set, classifies the
//! result against Criterion B and gathers centroid, bounding box, confidence
//! and diagnostics into a single [`RangeMetrics`] record.

use log::{debug, info, warn};

use crate::config::RangeConfig;
use crate::coordinate::{BoundingBox, CoordinateTransformer, Point};
use crate::errors::{RangeError, RangeResult, RangeWarning};
use crate::utils::format_utils::{format_thousands, round_to};
use super::aoo::estimate_aoo;
use super::criterion_b::{assess_criterion_b, CriterionBResult};
use super::eoo::estimate_eoo;

/// Where the occurrences lie, in longitude/latitude
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicRange {
    /// Arithmetic mean of longitudes and latitudes (not an area centroid)
    pub centroid: Point,
    /// Min/max over the raw longitudes and latitudes
    pub bounding_box: BoundingBox,
    /// Closed convex hull ring of the unprojected points
    pub convex_hull: Vec<Point>,
}

/// Range metrics for one species
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMetrics {
    pub occurrence_count: usize,
    pub eoo_km2: f64,
    pub aoo_km2: f64,
    pub occupied_cells: usize,
    pub cell_size_km: f64,
    pub geographic_range: GeographicRange,
    pub criterion_b: CriterionBResult,
    /// Sample-size heuristic, not a statistical confidence
    pub confidence: f64,
    pub warnings: Vec<RangeWarning>,
}

impl RangeMetrics {
    /// EOO rounded to two decimals
    pub fn eoo_km2_rounded(&self) -> f64 {
        round_to(self.eoo_km2, 2)
    }

    /// AOO rounded to two decimals
    pub fn aoo_km2_rounded(&self) -> f64 {
        round_to(self.aoo_km2, 2)
    }

    /// Human-readable summary of both areas
    pub fn notes(&self) -> String {
        format!("EOO: {} km². AOO: {} km².",
                format_thousands(self.eoo_km2), format_thousands(self.aoo_km2))
    }

    /// Whether the AOO ≤ EOO containment check failed
    pub fn is_geometrically_inconsistent(&self) -> bool {
        self.warnings.iter().any(|w| matches!(w, RangeWarning::GeometricInconsistency { .. }))
    }
}

/// Builds [`RangeMetrics`] from occurrence points
pub struct RangeSummaryBuilder {
    config: RangeConfig,
    transformer: CoordinateTransformer,
}

impl RangeSummaryBuilder {
    /// Create a builder using the World Mollweide projection
    pub fn new(config: RangeConfig) -> Self {
        RangeSummaryBuilder {
            config,
            transformer: CoordinateTransformer::default(),
        }
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    /// Compute the full set of range metrics
    ///
    /// # Arguments
    /// * `points` - Usable occurrence points as longitude/latitude
    ///
    /// # Returns
    /// The metrics, or an error if either area cannot be computed. No
    /// partial record is produced on error.
    pub fn build(&self, points: &[Point]) -> RangeResult<RangeMetrics> {
        let eoo = estimate_eoo(points, &self.transformer)?;
        let aoo = estimate_aoo(points, self.config.grid_size_km, &self.transformer)?;

        let criterion_b = assess_criterion_b(Some(eoo.area_km2), Some(aoo.area_km2));
        match criterion_b.most_severe() {
            Some(category) => info!("Criterion B met, most severe category {} ({})", category, category.name()),
            None => debug!("Criterion B not met"),
        }

        let mut warnings = Vec::new();
        if eoo.area_km2 < aoo.area_km2 {
            warn!("EOO ({:.0}) < AOO ({:.0}), which is impossible!", eoo.area_km2, aoo.area_km2);
            warnings.push(RangeWarning::GeometricInconsistency {
                eoo_km2: eoo.area_km2,
                aoo_km2: aoo.area_km2,
            });
        }
        if !eoo.hulls_agree {
            debug!("Geographic and projected hulls select different vertices");
            warnings.push(RangeWarning::HullMismatch {
                projected_vertices: eoo.projected_vertex_count(),
                geographic_vertices: eoo.geographic_vertex_count(),
            });
        }

        let bounding_box = BoundingBox::from_points(points).ok_or_else(|| {
            RangeError::GenericError("Bounding box of an empty point set".to_string())
        })?;

        Ok(RangeMetrics {
            occurrence_count: points.len(),
            eoo_km2: eoo.area_km2,
            aoo_km2: aoo.area_km2,
            occupied_cells: aoo.occupied_cells,
            cell_size_km: aoo.cell_size_km,
            geographic_range: GeographicRange {
                centroid: mean_point(points),
                bounding_box,
                convex_hull: eoo.geographic_hull,
            },
            criterion_b,
            confidence: self.config.confidence_for(points.len()),
            warnings,
        })
    }
}

/// Arithmetic mean of the coordinates; origin for an empty slice
fn mean_point(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sum_x / n, sum_y / n)
}
