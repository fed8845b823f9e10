// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ultralytics::DEFAULT_PROGRAM;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(name = "bsort", author, version, about = "BSORT: Bottle Cap Sorter CLI Tool", long_about = None)]
#[command(after_help = r"Examples:
    bsort train --config settings.yaml
    bsort infer --config settings.yaml --image sample.jpg
    bsort infer --config settings.yaml --image sample.jpg --verbose false
    BSORT_YOLO=/opt/venv/bin/yolo bsort train --config settings.yaml")]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute. Help is printed when absent.
    pub command: Option<Commands>,

    /// Ultralytics `yolo` executable (name on PATH or full path)
    #[arg(long, global = true, env = "BSORT_YOLO", default_value = DEFAULT_PROGRAM)]
    pub yolo: PathBuf,

    /// Show verbose output
    #[arg(long, global = true, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the model
    Train(TrainArgs),
    /// Run inference on an image
    Infer(InferArgs),
}

/// Arguments for the train command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to settings.yaml
    #[arg(long)]
    pub config: PathBuf,
}

/// Arguments for the infer command.
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Path to settings.yaml
    #[arg(long)]
    pub config: PathBuf,

    /// Path to image file
    #[arg(long)]
    pub image: PathBuf,
}
