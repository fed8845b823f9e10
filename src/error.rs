// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the bsort CLI.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for bsort operations.
pub type Result<T> = std::result::Result<T, BsortError>;

/// Main error type for configuration loading, training and inference.
#[derive(Debug)]
pub enum BsortError {
    /// The YAML configuration file does not exist.
    ConfigNotFound(PathBuf),
    /// The configuration file is not valid YAML or a value has the wrong type.
    ConfigParse(String),
    /// A key required by the current command is absent from the configuration.
    MissingKey(String),
    /// The model weights file does not exist.
    ModelNotFound(PathBuf),
    /// The input image does not exist.
    ImageNotFound(PathBuf),
    /// Error raised by the detection backend (spawn failure, non-zero exit, ...).
    Backend(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for BsortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigNotFound(path) => {
                write!(f, "Configuration file not found at: {}", path.display())
            }
            Self::ConfigParse(msg) => write!(f, "Config error: {msg}"),
            Self::MissingKey(key) => write!(f, "Config error: missing required key '{key}'"),
            Self::ModelNotFound(path) => write!(
                f,
                "Model file not found at: {}. Please train first or check path.",
                path.display()
            ),
            Self::ImageNotFound(path) => write!(f, "Image file not found at: {}", path.display()),
            Self::Backend(msg) => write!(f, "Backend error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for BsortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BsortError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for BsortError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}
