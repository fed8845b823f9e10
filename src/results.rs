// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Prediction output records.

use std::path::{Path, PathBuf};

/// Outcome of running prediction on one source.
///
/// The detection library keeps boxes and annotated images on disk; the CLI only
/// needs to know where they went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    /// Source image the prediction was run on.
    pub path: PathBuf,
    /// Directory the annotated output was written to.
    pub save_dir: PathBuf,
}

impl PredictionResult {
    /// Create a new result record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            save_dir: save_dir.into(),
        }
    }

    /// Expected location of the annotated copy of the source image.
    ///
    /// Ultralytics keeps the source file name when saving annotated images.
    #[must_use]
    pub fn annotated_path(&self) -> Option<PathBuf> {
        self.path
            .file_name()
            .map(|name| self.save_dir.join(Path::new(name)))
    }
}
