// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! The `train` command.

use std::path::{Path, PathBuf};

use crate::backend::{DetectionBackend, DetectionModel, TrainParams};
use crate::config::Config;
use crate::error::Result;
use crate::{info, success, verbose, warn};

/// Project directory for training runs.
pub const TRAIN_PROJECT: &str = "runs/train";

/// Run name inside [`TRAIN_PROJECT`].
pub const TRAIN_RUN_NAME: &str = "bsort_run";

impl TrainParams {
    /// Resolve training hyperparameters from a configuration, applying defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            data: config.dataset_path.clone(),
            epochs: config.epochs(),
            imgsz: config.image_size(),
            batch: config.batch_size(),
            lr0: config.learning_rate(),
            project: PathBuf::from(TRAIN_PROJECT),
            name: TRAIN_RUN_NAME.to_string(),
        }
    }
}

/// Train a detection model as described by `config`.
///
/// The dataset path is handed to the backend unchecked; the library reports a
/// missing or malformed dataset.
///
/// # Errors
///
/// Returns any error raised by the backend while building or training the model.
pub fn train_model<B: DetectionBackend>(backend: &B, config: &Config) -> Result<()> {
    let model_path = config.model_path_or_default();
    if config.model_path.is_none() {
        warn!("'model_path' is not set. Using default '{model_path}'.");
    }
    info!("🚀 Starting training with model: {model_path}");

    let mut model = backend.construct(Path::new(model_path))?;

    let params = TrainParams::from_config(config);
    verbose!(
        "epochs={}, imgsz={}, batch={}, lr0={}, data={}",
        params.epochs,
        params.imgsz,
        params.batch,
        params.lr0,
        params.data.as_deref().unwrap_or("<unset>")
    );
    model.train(&params)?;

    success!("Training finished.");
    Ok(())
}
