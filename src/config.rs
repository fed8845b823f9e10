// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! YAML run configuration.
//!
//! A [`Config`] is loaded once per invocation with [`load_config`] and is read-only
//! afterwards. Recognized keys are type-checked at load time and exposed through
//! accessors that apply the documented defaults; every other top-level key is kept
//! verbatim and can be looked up with [`Config::get`].
//!
//! ```yaml
//! model_path: runs/train/bsort_run/weights/best.pt
//! dataset_path: data/bottle_caps.yaml
//! epochs: 50
//! image_size: 320
//! batch_size: 8
//! learning_rate: 0.01
//! confidence_threshold: 0.25
//! output_dir: runs/detect
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{BsortError, Result};
use crate::verbose;

/// Weights used for training when `model_path` is not configured.
pub const DEFAULT_MODEL_PATH: &str = "yolov8n.pt";
/// Default number of training epochs.
pub const DEFAULT_EPOCHS: u32 = 10;
/// Default square input image size in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 320;
/// Default training batch size.
pub const DEFAULT_BATCH_SIZE: i32 = 8;
/// Default initial learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Default confidence threshold for predictions.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;
/// Default project directory for prediction output.
pub const DEFAULT_OUTPUT_DIR: &str = "runs/detect";

/// Parsed run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Path to the weights file used to build the model.
    pub model_path: Option<String>,
    /// Dataset description handed to the trainer as-is.
    pub dataset_path: Option<String>,
    /// Number of training epochs.
    pub epochs: Option<u32>,
    /// Square input image size in pixels.
    pub image_size: Option<u32>,
    /// Training batch size. Ultralytics accepts `-1` for auto-batch.
    pub batch_size: Option<i32>,
    /// Initial learning rate (`lr0`).
    pub learning_rate: Option<f64>,
    /// Minimum confidence for a detection to be kept.
    pub confidence_threshold: Option<f32>,
    /// Project directory for annotated prediction output.
    pub output_dir: Option<String>,
    /// Every top-level key of the source document, recognized or not.
    #[serde(skip)]
    raw: Mapping,
}

impl Config {
    /// Parse a configuration from YAML text.
    ///
    /// An empty document yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BsortError::ConfigParse`] if the text is not YAML, the top level is not
    /// a mapping, or a recognized key holds a value of the wrong type.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw = match serde_yaml::from_str::<Value>(text)? {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            other => {
                return Err(BsortError::ConfigParse(format!(
                    "expected a mapping at the top level, found {}",
                    value_kind(&other)
                )));
            }
        };

        let mut config: Self = serde_yaml::from_value(Value::Mapping(raw.clone()))?;
        config.raw = raw;
        Ok(config)
    }

    /// Raw value of any top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// All top-level keys and values as loaded.
    #[must_use]
    pub const fn raw(&self) -> &Mapping {
        &self.raw
    }

    /// Weights path for training, falling back to [`DEFAULT_MODEL_PATH`].
    #[must_use]
    pub fn model_path_or_default(&self) -> &str {
        self.model_path.as_deref().unwrap_or(DEFAULT_MODEL_PATH)
    }

    /// Weights path for inference, which has no default.
    ///
    /// # Errors
    ///
    /// Returns [`BsortError::MissingKey`] if `model_path` is not configured.
    pub fn required_model_path(&self) -> Result<&str> {
        self.model_path
            .as_deref()
            .ok_or_else(|| BsortError::MissingKey("model_path".to_string()))
    }

    #[must_use]
    pub fn epochs(&self) -> u32 {
        self.epochs.unwrap_or(DEFAULT_EPOCHS)
    }

    #[must_use]
    pub fn image_size(&self) -> u32 {
        self.image_size.unwrap_or(DEFAULT_IMAGE_SIZE)
    }

    #[must_use]
    pub fn batch_size(&self) -> i32 {
        self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE)
    }

    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate.unwrap_or(DEFAULT_LEARNING_RATE)
    }

    #[must_use]
    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold.unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD)
    }

    #[must_use]
    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }
}

/// Load a configuration file from disk.
///
/// # Arguments
///
/// * `path` - Path to the `.yaml` configuration file.
///
/// # Errors
///
/// Returns [`BsortError::ConfigNotFound`] if the file does not exist (checked before
/// reading), [`BsortError::Io`] if it cannot be read and [`BsortError::ConfigParse`]
/// if it cannot be parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BsortError::ConfigNotFound(path.to_path_buf()));
    }

    verbose!("Loading configuration from {}", path.display());
    let text = fs::read_to_string(path)?;
    Config::from_yaml_str(&text).map_err(|e| match e {
        BsortError::ConfigParse(msg) => {
            BsortError::ConfigParse(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
