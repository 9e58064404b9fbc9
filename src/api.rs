use std::collections::HashSet;
use std::path::PathBuf;
use log::{error, info, warn};
use rayon::prelude::*;

use crate::config::RangeConfig;
use crate::errors::RangeResult;
use crate::io::occurrence::{load_occurrences, OccurrenceSet};
use crate::io::report::{write_json, RangeReport};
use crate::metrics::RangeSummaryBuilder;
use crate::utils::progress::ProgressTracker;
use crate::utils::string_utils::{display_name, species_key};

/// Main interface to the RangeKit library
pub struct RangeKit {
    builder: RangeSummaryBuilder,
}

impl RangeKit {
    /// Create a new RangeKit instance
    ///
    /// # Arguments
    /// * `config` - Run configuration; validated here
    ///
    /// # Returns
    /// A RangeKit instance or an error if the configuration is invalid
    pub fn new(config: RangeConfig) -> RangeResult<Self> {
        config.validate()?;
        Ok(RangeKit {
            builder: RangeSummaryBuilder::new(config),
        })
    }

    pub fn config(&self) -> &RangeConfig {
        self.builder.config()
    }

    /// Compute the range-metrics record for an already loaded point set
    ///
    /// # Arguments
    /// * `species_name` - Species name in any form ("Panthera leo", "panthera_leo")
    /// * `occurrences` - Parsed occurrence points
    ///
    /// # Returns
    /// The success record, or the fatal error that stopped the computation
    pub fn assess_points(&self, species_name: &str, occurrences: &OccurrenceSet) -> RangeResult<RangeReport> {
        let key = species_key(species_name)?;
        let metrics = self.builder.build(&occurrences.points)?;

        Ok(RangeReport::from_metrics(
            &display_name(&key),
            &metrics,
            &occurrences.warnings(),
            self.builder.transformer().target_crs(),
        ))
    }

    /// Run the range stage for one species
    ///
    /// Reads `<data_dir>/<species>/02_occurrence_data.json`, computes the
    /// metrics and writes `<data_dir>/<species>/03_range_metrics.json`.
    /// Nothing is written when the computation fails.
    ///
    /// # Returns
    /// Path of the written file and the record it contains
    pub fn assess_species(&self, species_name: &str) -> RangeResult<(PathBuf, RangeReport)> {
        let key = species_key(species_name)?;
        info!("Calculating EOO and AOO for {}...", key);

        let occurrences = load_occurrences(&self.config().input_path(&key))?;
        let report = self.assess_points(&key, &occurrences)?;

        let output = self.config().output_path(&key);
        write_json(&output, &report)?;

        Ok((output, report))
    }

    /// Run the range stage for several species in parallel
    ///
    /// Species are independent; one failure does not affect the others.
    /// Names that normalize to an already listed species are skipped, so no
    /// output file is written twice. Results are returned in input order.
    pub fn assess_batch(
        &self,
        species: &[String],
        progress: Option<&ProgressTracker>,
    ) -> Vec<(String, RangeResult<(PathBuf, RangeReport)>)> {
        let mut seen = HashSet::new();
        let unique: Vec<&String> = species
            .iter()
            .filter(|name| match species_key(name) {
                Ok(key) => {
                    let first = seen.insert(key);
                    if !first {
                        warn!("Skipping {}: duplicate of an earlier species", name);
                    }
                    first
                },
                Err(_) => true,
            })
            .collect();

        unique
            .par_iter()
            .map(|name| {
                let result = self.assess_species(name);
                if let Err(e) = &result {
                    error!("{}: {}", name, e);
                }
                if let Some(tracker) = progress {
                    tracker.increment(1);
                }
                (name.to_string(), result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use serde_json::json;
    use crate::coordinate::Point;
    use crate::errors::RangeError;

    fn occurrences(points: Vec<Point>) -> OccurrenceSet {
        OccurrenceSet {
            total_records: points.len(),
            excluded: 0,
            points,
        }
    }

    #[test]
    fn test_assess_points_normalizes_name() {
        let kit = RangeKit::new(RangeConfig::default()).unwrap();
        let set = occurrences(vec![
            Point::new(30.0, -2.0),
            Point::new(30.5, -2.0),
            Point::new(30.25, -1.5),
        ]);

        let report = kit.assess_points("Panthera leo", &set).unwrap();
        assert_eq!(report.species_name, "Panthera Leo");
    }

    #[test]
    fn test_assess_points_insufficient() {
        let kit = RangeKit::new(RangeConfig::default()).unwrap();
        let set = occurrences(vec![Point::new(30.0, -2.0)]);

        assert!(matches!(
            kit.assess_points("x", &set),
            Err(RangeError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = RangeConfig::default();
        config.grid_size_km = 0.0;
        assert!(matches!(RangeKit::new(config), Err(RangeError::InvalidConfig(_))));
    }

    #[test]
    fn test_batch_skips_duplicate_spellings() {
        let dir = tempfile::tempdir().unwrap();
        let species_dir = dir.path().join("panthera_leo");
        fs::create_dir_all(&species_dir).unwrap();
        let doc = json!({"data": {"occurrence_points": [
            {"lon": 34.8, "lat": -2.3},
            {"lon": 35.4, "lat": -2.9},
            {"lon": 36.1, "lat": -1.2},
        ]}});
        fs::write(species_dir.join("02_occurrence_data.json"), doc.to_string()).unwrap();

        let kit = RangeKit::new(RangeConfig::default().with_data_dir(dir.path())).unwrap();
        let species = vec![
            "Panthera leo".to_string(),
            "panthera_leo".to_string(),
            "PANTHERA  LEO".to_string(),
            "../escape".to_string(),
        ];
        let results = kit.assess_batch(&species, None);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "Panthera leo");
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, "../escape");
        assert!(results[1].1.is_err());
    }
}
