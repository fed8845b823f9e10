// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Detection library seam.
//!
//! Training and inference are delegated to an external detection library. The CLI
//! talks to it only through [`DetectionBackend`] and [`DetectionModel`], so the
//! orchestration in [`crate::train`] and [`crate::predict`] can be exercised against
//! a substitute implementation. The production implementation is
//! [`crate::ultralytics::UltralyticsCli`].

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::results::PredictionResult;

/// Hyperparameters for one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainParams {
    /// Dataset description file. `None` leaves the choice to the library.
    pub data: Option<String>,
    /// Number of epochs.
    pub epochs: u32,
    /// Square input image size.
    pub imgsz: u32,
    /// Batch size (`-1` for auto-batch).
    pub batch: i32,
    /// Initial learning rate.
    pub lr0: f64,
    /// Project directory for run artifacts.
    pub project: PathBuf,
    /// Run name inside `project`.
    pub name: String,
}

/// Settings for one prediction call.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictParams {
    /// Image to run prediction on.
    pub source: PathBuf,
    /// Confidence threshold.
    pub conf: f32,
    /// Square input image size.
    pub imgsz: u32,
    /// Whether annotated output is written to disk.
    pub save: bool,
    /// Project directory for annotated output.
    pub project: PathBuf,
    /// Run name inside `project`.
    pub name: String,
}

/// Factory for model handles.
pub trait DetectionBackend {
    /// Model handle type produced by this backend.
    type Model: DetectionModel;

    /// Build a model handle from a weights file.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot load the weights.
    fn construct(&self, weights: &Path) -> Result<Self::Model>;
}

/// A loaded detection model.
pub trait DetectionModel {
    /// Train the model, blocking until the library finishes.
    ///
    /// # Errors
    ///
    /// Any failure reported by the library.
    fn train(&mut self, params: &TrainParams) -> Result<()>;

    /// Run prediction and return one result per processed source.
    ///
    /// # Errors
    ///
    /// Any failure reported by the library.
    fn predict(&mut self, params: &PredictParams) -> Result<Vec<PredictionResult>>;
}
