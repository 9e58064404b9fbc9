//! Range-metrics report records
//!
//! Serializable shape of the `03_range_metrics.json` artifact and of the
//! batch summary, plus the writers for both.

use std::fs;
use std::path::Path;
use log::info;
use serde::{Deserialize, Serialize};

use crate::coordinate::CoordinateSystem;
use crate::errors::{RangeError, RangeResult, RangeWarning};
use crate::metrics::constants::report;
use crate::metrics::criterion_b::SubCriterionStatus;
use crate::metrics::RangeMetrics;
use crate::utils::format_utils::round_to;

/// Success/error discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

/// Top-level range-metrics record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub status: ReportStatus,
    pub agent: String,
    pub species_name: String,
    pub confidence: f64,
    pub data: RangeData,
    pub metadata: ReportMetadata,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeData {
    pub eoo_km2: f64,
    pub aoo_km2: f64,
    pub number_of_locations: String,
    pub severely_fragmented: String,
    pub criterion_b: CriterionBRecord,
    pub geographic_range: GeographicRangeRecord,
    pub spatial_analysis: SpatialAnalysis,
}

/// Criterion B outcome; `bN_status` separates "not_met" from "not_assessed"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionBRecord {
    pub b1_met: bool,
    pub b1_category: Option<String>,
    pub b1_status: String,
    pub b2_met: bool,
    pub b2_category: Option<String>,
    pub b2_status: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxRecord {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicRangeRecord {
    pub centroid: Centroid,
    pub bounding_box: BoundingBoxRecord,
    /// Closed ring of `[lon, lat]` pairs
    pub convex_hull_coords: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialAnalysis {
    pub number_of_occurrences: usize,
    pub number_of_unique_cells: usize,
    pub spatial_extent_km2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub method: String,
    pub grid_size_km: f64,
    /// CRS of every coordinate in the record
    pub crs: String,
    /// Equal-area CRS the areas were measured in
    pub projection: String,
}

fn sub_criterion_fields(status: &SubCriterionStatus) -> (bool, Option<String>, String) {
    (
        status.is_met(),
        status.category().map(|c| c.code().to_string()),
        status.label().to_string(),
    )
}

impl RangeReport {
    /// Build the success record for one species
    ///
    /// # Arguments
    /// * `species_name` - Display name of the species
    /// * `metrics` - Computed range metrics
    /// * `load_warnings` - Warnings raised before the computation (e.g. dropped records)
    /// * `projection` - Equal-area system the areas were measured in
    pub fn from_metrics(
        species_name: &str,
        metrics: &RangeMetrics,
        load_warnings: &[RangeWarning],
        projection: CoordinateSystem,
    ) -> Self {
        let (b1_met, b1_category, b1_status) = sub_criterion_fields(&metrics.criterion_b.b1);
        let (b2_met, b2_category, b2_status) = sub_criterion_fields(&metrics.criterion_b.b2);
        let range = &metrics.geographic_range;

        let warnings = load_warnings.iter()
            .chain(metrics.warnings.iter())
            .map(|w| w.to_string())
            .collect();

        RangeReport {
            status: ReportStatus::Success,
            agent: report::AGENT.to_string(),
            species_name: species_name.to_string(),
            confidence: metrics.confidence,
            data: RangeData {
                eoo_km2: metrics.eoo_km2_rounded(),
                aoo_km2: metrics.aoo_km2_rounded(),
                number_of_locations: report::EXPERT_ANALYSIS_PENDING.to_string(),
                severely_fragmented: report::EXPERT_ANALYSIS_PENDING.to_string(),
                criterion_b: CriterionBRecord {
                    b1_met,
                    b1_category,
                    b1_status,
                    b2_met,
                    b2_category,
                    b2_status,
                    notes: metrics.notes(),
                },
                geographic_range: GeographicRangeRecord {
                    centroid: Centroid {
                        lat: range.centroid.lat(),
                        lon: range.centroid.lon(),
                    },
                    bounding_box: BoundingBoxRecord {
                        min_lat: range.bounding_box.min_y,
                        max_lat: range.bounding_box.max_y,
                        min_lon: range.bounding_box.min_x,
                        max_lon: range.bounding_box.max_x,
                    },
                    convex_hull_coords: range.convex_hull.iter().map(|p| p.to_array()).collect(),
                },
                spatial_analysis: SpatialAnalysis {
                    number_of_occurrences: metrics.occurrence_count,
                    number_of_unique_cells: metrics.occupied_cells,
                    spatial_extent_km2: round_to(metrics.eoo_km2, 2),
                },
            },
            metadata: ReportMetadata {
                method: report::METHOD.to_string(),
                grid_size_km: metrics.cell_size_km,
                crs: CoordinateSystem::WGS84.identifier().to_string(),
                projection: projection.identifier().to_string(),
            },
            warnings,
            errors: Vec::new(),
        }
    }
}

/// Outcome of one species in a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub species_name: String,
    pub status: ReportStatus,
    /// Path of the written range-metrics file
    pub output: Option<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl BatchEntry {
    pub fn success(species_name: &str, output: &Path, report: &RangeReport) -> Self {
        BatchEntry {
            species_name: species_name.to_string(),
            status: ReportStatus::Success,
            output: Some(output.display().to_string()),
            warnings: report.warnings.clone(),
            errors: Vec::new(),
        }
    }

    pub fn failure(species_name: &str, error: &RangeError) -> Self {
        BatchEntry {
            species_name: species_name.to_string(),
            status: ReportStatus::Error,
            output: None,
            warnings: Vec::new(),
            errors: vec![error.to_string()],
        }
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub species: Vec<BatchEntry>,
}

impl BatchSummary {
    pub fn new(species: Vec<BatchEntry>) -> Self {
        let succeeded = species.iter().filter(|e| e.status == ReportStatus::Success).count();
        BatchSummary {
            succeeded,
            failed: species.len() - succeeded,
            species,
        }
    }
}

/// Write a serializable record as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> RangeResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    info!("Results saved to {}", path.display());
    Ok(())
}
