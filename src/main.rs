use std::path::Path;
use std::process;
use log::{error, Level};

use rangekit::utils::logger::Logger;
use rangekit::commands::{build_cli, CommandFactory, RangekitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };

    let logger = match matches.get_one::<String>("log-dir") {
        Some(dir) => {
            let dir = Path::new(dir);
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Error creating log directory: {}", e);
                process::exit(1);
            }

            let logger = match Logger::new(&dir.join("rangekit.log")) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            };

            if let Err(e) = Logger::init_global_logger(&dir.join("rangekit-global.log"), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            logger
        },
        None => {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
            )
            .init();
            Logger::disabled()
        }
    };

    let factory = RangekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
