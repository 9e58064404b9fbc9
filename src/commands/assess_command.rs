//! Single-species range assessment command
//!
//! Reads one species' occurrence data, computes EOO/AOO and Criterion B,
//! and writes the range-metrics file.

use clap::ArgMatches;
use log::info;

use crate::api::RangeKit;
use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, species_from_args};
use crate::config::RangeConfig;
use crate::errors::{RangeError, RangeResult};
use crate::io::report::RangeReport;
use crate::utils::logger::Logger;

/// Command for assessing one species
pub struct AssessCommand<'a> {
    /// Species name as given on the command line
    species: String,
    /// Run configuration
    config: RangeConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AssessCommand<'a> {
    /// Create a new assess command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AssessCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RangeResult<Self> {
        let species = species_from_args(args)?
            .into_iter()
            .next()
            .ok_or_else(|| RangeError::MissingInput("species name".to_string()))?;

        Ok(AssessCommand {
            species,
            config: config_from_args(args)?,
            logger,
        })
    }

    /// Display the Criterion B verdict
    fn display_criterion_b(&self, report: &RangeReport) {
        let criterion_b = &report.data.criterion_b;

        if criterion_b.b1_met || criterion_b.b2_met {
            info!("Criterion B thresholds met:");
            if let Some(category) = &criterion_b.b1_category {
                info!("  - B1 (EOO): {}", category);
            }
            if let Some(category) = &criterion_b.b2_category {
                info!("  - B2 (AOO): {}", category);
            }
        } else {
            info!("No Criterion B thresholds met");
        }
    }
}

impl<'a> Command for AssessCommand<'a> {
    fn execute(&self) -> RangeResult<()> {
        let kit = RangeKit::new(self.config.clone())?;
        let (output, report) = kit.assess_species(&self.species)?;

        info!("EOO: {} km², AOO: {} km² ({} grid cells)",
              report.data.eoo_km2, report.data.aoo_km2,
              report.data.spatial_analysis.number_of_unique_cells);
        self.display_criterion_b(&report);

        self.logger.log(&format!("{}: {} -> {}",
                                 report.species_name, report.data.criterion_b.notes, output.display()))?;
        Ok(())
    }
}
