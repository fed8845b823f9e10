// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for the `bsort` binary.
//!
//! This module contains argument parsing, console output helpers and the
//! dispatcher that routes a parsed command line to training or inference.

use clap::CommandFactory;

use crate::config::load_config;
use crate::error::Result;
use crate::predict::infer_image;
use crate::train::train_model;
use crate::ultralytics::UltralyticsCli;

// Modules
/// CLI arguments.
pub mod args;

/// Console output.
pub mod logging;

use args::{Cli, Commands};

/// Execute a parsed command line.
///
/// Without a subcommand the help text is printed and nothing else happens.
///
/// # Errors
///
/// Returns the first error raised while loading the configuration, training or
/// running inference.
pub fn run(cli: Cli) -> Result<()> {
    logging::set_verbose(cli.verbose);
    let backend = UltralyticsCli::new(cli.yolo);

    match cli.command {
        Some(Commands::Train(args)) => {
            let config = load_config(&args.config)?;
            train_model(&backend, &config)
        }
        Some(Commands::Infer(args)) => {
            let config = load_config(&args.config)?;
            infer_image(&backend, &config, &args.image).map(|_| ())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
