//! Multi-species range assessment command
//!
//! Assesses every listed species in parallel and writes a batch summary
//! next to the per-species output.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::RangeKit;
use crate::commands::command_traits::Command;
use crate::commands::{config_from_args, species_from_args};
use crate::config::RangeConfig;
use crate::errors::{RangeError, RangeResult};
use crate::io::report::{write_json, BatchEntry, BatchSummary};
use crate::metrics::constants::files;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for assessing several species
pub struct BatchCommand<'a> {
    /// Species names as given on the command line
    species: Vec<String>,
    /// Run configuration
    config: RangeConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RangeResult<Self> {
        Ok(BatchCommand {
            species: species_from_args(args)?,
            config: config_from_args(args)?,
            logger,
        })
    }

    /// Run the batch and collect a summary without touching the logger
    pub fn run(&self, progress: Option<&ProgressTracker>) -> RangeResult<BatchSummary> {
        let kit = RangeKit::new(self.config.clone())?;

        let entries = kit.assess_batch(&self.species, progress)
            .into_iter()
            .map(|(name, result)| match result {
                Ok((output, report)) => BatchEntry::success(&name, &output, &report),
                Err(e) => BatchEntry::failure(&name, &e),
            })
            .collect();

        let summary = BatchSummary::new(entries);
        write_json(&self.config.data_dir.join(files::BATCH_SUMMARY_FILE), &summary)?;
        Ok(summary)
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> RangeResult<()> {
        info!("Assessing {} species", self.species.len());

        let tracker = ProgressTracker::new(self.species.len() as u64, "Assessing species");
        let summary = self.run(Some(&tracker))?;
        tracker.finish();

        for entry in &summary.species {
            self.logger.log(&format!("{}: {:?} {}",
                                     entry.species_name, entry.status, entry.errors.join("; ")))?;
        }

        info!("{} succeeded, {} failed", summary.succeeded, summary.failed);
        if summary.failed > 0 {
            warn!("Failed species are listed in {}", files::BATCH_SUMMARY_FILE);
            return Err(RangeError::GenericError(format!(
                "{} of {} species failed", summary.failed, summary.species.len()
            )));
        }

        Ok(())
    }
}
