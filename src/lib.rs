// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # bsort: Bottle Cap Sorter
//!
//! Command-line front end for training and running an Ultralytics YOLO bottle cap
//! detector. Every run is described by a YAML settings file; model construction,
//! training and inference are delegated to the detection library.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Train (artifacts land in runs/train/bsort_run)
//! bsort train --config settings.yaml
//!
//! # Annotate one image (results land in <output_dir>/predict)
//! bsort infer --config settings.yaml --image sample.jpg
//!
//! # Show help
//! bsort
//! ```
//!
//! **Settings keys:**
//!
//! | Key | Description | Default |
//! |-----|-------------|---------|
//! | `model_path` | Weights file | `yolov8n.pt` (train), required (infer) |
//! | `dataset_path` | Dataset description for training | none |
//! | `epochs` | Training epochs | `10` |
//! | `image_size` | Input image size | `320` |
//! | `batch_size` | Training batch size | `8` |
//! | `learning_rate` | Initial learning rate | `0.01` |
//! | `confidence_threshold` | Prediction confidence threshold | `0.25` |
//! | `output_dir` | Prediction project directory | `runs/detect` |
//!
//! ## Library Usage
//!
//! The orchestration functions are generic over [`DetectionBackend`], so another
//! backend can be plugged in:
//!
//! ```no_run
//! use bsort::{UltralyticsCli, infer_image, load_config};
//!
//! fn main() -> bsort::Result<()> {
//!     let config = load_config("settings.yaml")?;
//!     let results = infer_image(&UltralyticsCli::default(), &config, "sample.jpg")?;
//!     println!("saved to {}", results[0].save_dir.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | YAML settings ([`Config`], [`load_config`]) |
//! | [`backend`] | Detection library seam ([`DetectionBackend`], [`DetectionModel`]) |
//! | [`ultralytics`] | `yolo` executable backend ([`UltralyticsCli`]) |
//! | [`train`] | The `train` command ([`train_model`]) |
//! | [`predict`] | The `infer` command ([`infer_image`]) |
//! | [`results`] | Prediction output ([`PredictionResult`]) |
//! | [`error`] | Error types ([`BsortError`], [`Result`]) |

// Modules
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod predict;
pub mod results;
pub mod train;
pub mod ultralytics;
pub mod utils;

// Re-export main types for convenience
pub use backend::{DetectionBackend, DetectionModel, PredictParams, TrainParams};
pub use config::{Config, load_config};
pub use error::{BsortError, Result};
pub use predict::infer_image;
pub use results::PredictionResult;
pub use train::train_model;
pub use ultralytics::UltralyticsCli;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "bsort");
    }
}
