// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! The `infer` command.

use std::path::{Path, PathBuf};

use crate::backend::{DetectionBackend, DetectionModel, PredictParams};
use crate::cli::logging::is_verbose;
use crate::config::Config;
use crate::error::{BsortError, Result};
use crate::results::PredictionResult;
use crate::{info, success, verbose};

/// Run name inside the configured output directory.
pub const PREDICT_RUN_NAME: &str = "predict";

impl PredictParams {
    /// Resolve prediction settings for `source`, applying configuration defaults.
    #[must_use]
    pub fn from_config(config: &Config, source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            conf: config.confidence_threshold(),
            imgsz: config.image_size(),
            save: true,
            project: PathBuf::from(config.output_dir()),
            name: PREDICT_RUN_NAME.to_string(),
        }
    }
}

/// Run the configured model on a single image and save the annotated result.
///
/// Both files are checked before the backend is touched: the model first, then the
/// image.
///
/// # Arguments
///
/// * `backend` - Detection library used to build the model.
/// * `config` - Run configuration; `model_path` is required.
/// * `image_path` - Image to run inference on.
///
/// # Errors
///
/// * [`BsortError::MissingKey`] if `model_path` is not configured.
/// * [`BsortError::ModelNotFound`] if the weights file does not exist.
/// * [`BsortError::ImageNotFound`] if the image does not exist.
/// * [`BsortError::Backend`] if the library fails or returns no results.
pub fn infer_image<B, P>(
    backend: &B,
    config: &Config,
    image_path: P,
) -> Result<Vec<PredictionResult>>
where
    B: DetectionBackend,
    P: AsRef<Path>,
{
    let model_path = Path::new(config.required_model_path()?);
    if !model_path.exists() {
        return Err(BsortError::ModelNotFound(model_path.to_path_buf()));
    }

    let image_path = image_path.as_ref();
    if !image_path.exists() {
        return Err(BsortError::ImageNotFound(image_path.to_path_buf()));
    }

    info!("🔍 Running inference on: {}", image_path.display());
    info!("🤖 Loading model from: {}", model_path.display());

    if is_verbose() {
        println!("image 1/1 {}: {}", image_path.display(), describe_image(image_path));
    }

    let mut model = backend.construct(model_path)?;

    let params = PredictParams::from_config(config, image_path);
    verbose!(
        "conf={}, imgsz={}, project={}",
        params.conf,
        params.imgsz,
        params.project.display()
    );
    let results = model.predict(&params)?;

    let first = results.first().ok_or_else(|| {
        BsortError::Backend(format!(
            "prediction on {} returned no results",
            image_path.display()
        ))
    })?;
    success!(
        "Inference complete. Results saved in {}",
        first.save_dir.display()
    );
    if let Some(annotated) = first.annotated_path() {
        verbose!("Annotated image: {}", annotated.display());
    }

    Ok(results)
}

/// Image dimensions read from the file header, e.g. `640x480`.
fn describe_image(path: &Path) -> String {
    match image::image_dimensions(path) {
        Ok((width, height)) => format!("{width}x{height}"),
        Err(e) => format!("unreadable header ({e})"),
    }
}
