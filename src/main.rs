// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use bsort::cli::{self, args::Cli};
use bsort::error;
use clap::Parser;

fn main() {
    if let Err(e) = cli::run(Cli::parse()) {
        error!("{e}");
        process::exit(1);
    }
}
