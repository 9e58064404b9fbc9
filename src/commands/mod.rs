//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod assess_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use assess_command::AssessCommand;
pub use batch_command::BatchCommand;

use std::path::Path;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::config::RangeConfig;
use crate::errors::{RangeError, RangeResult};
use crate::utils::logger::Logger;

/// Command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("RangeKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculate IUCN Extent of Occurrence, Area of Occupancy and Criterion B")
        .arg(
            Arg::new("species")
                .help("Species name(s), e.g. \"panthera_leo\" or \"Panthera leo\"")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .help("Root directory of the per-species pipeline data")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("grid-size")
                .short('g')
                .long("grid-size")
                .help("AOO grid cell edge length in km (IUCN default: 2)")
                .value_name("KM")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Assess species in parallel and write a batch summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .help("Write rangekit.log and rangekit-global.log to this directory")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Species names given on the command line
pub(crate) fn species_from_args(args: &ArgMatches) -> RangeResult<Vec<String>> {
    let species: Vec<String> = args.get_many::<String>("species")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if species.is_empty() {
        return Err(RangeError::MissingInput("species name".to_string()));
    }
    Ok(species)
}

/// Build the run configuration: TOML file first, then flag overrides
pub(crate) fn config_from_args(args: &ArgMatches) -> RangeResult<RangeConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => RangeConfig::load(Path::new(path))?,
        None => RangeConfig::default(),
    };

    if let Some(dir) = args.get_one::<String>("data-dir") {
        config = config.with_data_dir(dir);
    }

    if let Some(size) = args.get_one::<String>("grid-size") {
        let grid_size_km = size.parse::<f64>()
            .map_err(|_| RangeError::InvalidConfig(format!("Invalid grid size: {}", size)))?;
        config = config.with_grid_size_km(grid_size_km)?;
    }

    Ok(config)
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RangekitCommandFactory;

impl RangekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RangekitCommandFactory
    }
}

impl Default for RangekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RangekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RangeResult<Box<dyn Command + 'a>> {
        let species_count = args.get_many::<String>("species").map_or(0, |v| v.len());

        if args.get_flag("batch") || species_count > 1 {
            Ok(Box::new(BatchCommand::new(args, logger)?))
        } else {
            Ok(Box::new(AssessCommand::new(args, logger)?))
        }
    }
}
