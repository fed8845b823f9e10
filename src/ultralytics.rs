// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Ultralytics YOLO backend.
//!
//! Drives the `yolo` command-line entry point installed with the `ultralytics`
//! Python package (`pip install ultralytics`). Each call spawns one child process
//! with `key=value` arguments, inherits its console output, and blocks until it
//! exits.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::backend::{DetectionBackend, DetectionModel, PredictParams, TrainParams};
use crate::error::{BsortError, Result};
use crate::results::PredictionResult;
use crate::utils::find_next_run_dir;
use crate::verbose;

/// Default name of the Ultralytics executable.
pub const DEFAULT_PROGRAM: &str = "yolo";

/// Task passed to every `yolo` invocation.
const TASK: &str = "detect";

/// Backend that shells out to the Ultralytics `yolo` CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltralyticsCli {
    program: PathBuf,
}

impl Default for UltralyticsCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl UltralyticsCli {
    /// Create a backend that runs `program` (a name on `PATH` or a full path).
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this backend launches.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl DetectionBackend for UltralyticsCli {
    type Model = UltralyticsModel;

    fn construct(&self, weights: &Path) -> Result<Self::Model> {
        Ok(UltralyticsModel {
            program: self.program.clone(),
            weights: weights.to_path_buf(),
        })
    }
}

/// Model handle bound to one weights file.
///
/// Ultralytics loads (or downloads) the weights inside each child process, so
/// constructing a handle does no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltralyticsModel {
    program: PathBuf,
    weights: PathBuf,
}

impl UltralyticsModel {
    /// Weights file this handle was built from.
    #[must_use]
    pub fn weights(&self) -> &Path {
        &self.weights
    }

    fn train_args(&self, params: &TrainParams) -> Vec<OsString> {
        let mut args = vec![
            OsString::from(TASK),
            OsString::from("train"),
            arg("model", &self.weights),
        ];
        // Left out when unset so the library reports the missing dataset itself.
        if let Some(data) = &params.data {
            args.push(arg("data", data));
        }
        args.extend([
            arg("epochs", params.epochs.to_string()),
            arg("imgsz", params.imgsz.to_string()),
            arg("batch", params.batch.to_string()),
            arg("lr0", params.lr0.to_string()),
            arg("project", &params.project),
            arg("name", &params.name),
        ]);
        args
    }

    fn predict_args(&self, params: &PredictParams, run_name: &OsStr) -> Vec<OsString> {
        vec![
            OsString::from(TASK),
            OsString::from("predict"),
            arg("model", &self.weights),
            arg("source", &params.source),
            arg("conf", params.conf.to_string()),
            arg("imgsz", params.imgsz.to_string()),
            arg("save", python_bool(params.save)),
            arg("project", &params.project),
            arg("name", run_name),
            // The run directory is resolved up front; stop the library from renaming it.
            arg("exist_ok", python_bool(true)),
        ]
    }

    fn run(&self, args: &[OsString]) -> Result<()> {
        verbose!(
            "Running {} {}",
            self.program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|e| launch_error(&self.program, &e))?;

        if status.success() {
            Ok(())
        } else {
            Err(BsortError::Backend(format!(
                "{} exited with {status}",
                self.program.display()
            )))
        }
    }
}

impl DetectionModel for UltralyticsModel {
    fn train(&mut self, params: &TrainParams) -> Result<()> {
        let args = self.train_args(params);
        self.run(&args)
    }

    fn predict(&mut self, params: &PredictParams) -> Result<Vec<PredictionResult>> {
        let save_dir = find_next_run_dir(&params.project, &params.name);
        let run_name = save_dir
            .file_name()
            .map_or_else(|| OsString::from(&params.name), OsStr::to_os_string);

        let args = self.predict_args(params, &run_name);
        self.run(&args)?;

        Ok(vec![PredictionResult::new(&params.source, save_dir)])
    }
}

/// Build a `key=value` argument without lossy path conversion.
fn arg(key: &str, value: impl AsRef<OsStr>) -> OsString {
    let mut out = OsString::from(key);
    out.push("=");
    out.push(value);
    out
}

const fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn launch_error(program: &Path, err: &io::Error) -> BsortError {
    if err.kind() == io::ErrorKind::NotFound {
        BsortError::Backend(format!(
            "failed to launch {}: executable not found. Install it with `pip install ultralytics` or set BSORT_YOLO",
            program.display()
        ))
    } else {
        BsortError::Backend(format!("failed to launch {}: {err}", program.display()))
    }
}
