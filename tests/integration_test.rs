// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the bsort library and binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use bsort::{
    BsortError, DetectionBackend, DetectionModel, PredictParams, PredictionResult, TrainParams,
    infer_image, load_config, train_model,
};
use serde_yaml::{Mapping, Value};

/// Backend that keeps the last parameters it saw.
#[derive(Default)]
struct LastCall {
    weights: std::cell::RefCell<Option<PathBuf>>,
}

struct LastCallModel;

impl DetectionBackend for LastCall {
    type Model = LastCallModel;

    fn construct(&self, weights: &Path) -> bsort::Result<Self::Model> {
        *self.weights.borrow_mut() = Some(weights.to_path_buf());
        Ok(LastCallModel)
    }
}

impl DetectionModel for LastCallModel {
    fn train(&mut self, params: &TrainParams) -> bsort::Result<()> {
        if params.epochs == 0 {
            return Err(BsortError::Backend("epochs must be positive".to_string()));
        }
        Ok(())
    }

    fn predict(&mut self, params: &PredictParams) -> bsort::Result<Vec<PredictionResult>> {
        Ok(vec![PredictionResult::new(
            &params.source,
            params.project.join(&params.name),
        )])
    }
}

fn bsort() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bsort"));
    cmd.env_remove("BSORT_YOLO");
    cmd
}

#[test]
fn test_config_dump_then_load() {
    let mut mapping = Mapping::new();
    mapping.insert("epochs".into(), 5.into());
    mapping.insert("model_path".into(), "yolo_test.pt".into());
    mapping.insert("confidence_threshold".into(), 0.4.into());
    mapping.insert("notes".into(), "blue caps only".into());

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings_dummy.yaml");
    fs::write(&path, serde_yaml::to_string(&mapping).unwrap()).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.raw(), &mapping);
    assert_eq!(config.epochs(), 5);
    assert_eq!(config.model_path.as_deref(), Some("yolo_test.pt"));
    assert_eq!(config.get("notes"), Some(&Value::from("blue caps only")));
}

#[test]
fn test_custom_backend_errors_propagate() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.yaml");
    fs::write(&path, "model_path: custom.pt\nepochs: 0\n").unwrap();

    let backend = LastCall::default();
    let err = train_model(&backend, &load_config(&path).unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "Backend error: epochs must be positive");
    assert_eq!(
        backend.weights.borrow().as_deref(),
        Some(Path::new("custom.pt"))
    );
}

#[test]
fn test_custom_backend_infer() {
    let tmp = tempfile::tempdir().unwrap();
    let model = tmp.path().join("best.pt");
    let image = tmp.path().join("cap.jpg");
    fs::write(&model, b"").unwrap();
    fs::write(&image, b"").unwrap();
    let path = tmp.path().join("settings.yaml");
    fs::write(
        &path,
        format!("model_path: {}\noutput_dir: results\n", model.display()),
    )
    .unwrap();

    let results = infer_image(&LastCall::default(), &load_config(&path).unwrap(), &image).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].save_dir, PathBuf::from("results/predict"));
    assert_eq!(results[0].annotated_path(), Some(PathBuf::from("results/predict/cap.jpg")));
}

#[test]
fn test_cli_without_arguments_prints_help() {
    let output = bsort().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("train"));
    assert!(stdout.contains("infer"));
}

#[test]
fn test_cli_missing_config_fails() {
    let output = bsort()
        .args(["train", "--config", "no/such/settings.yaml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file not found at: no/such/settings.yaml"));
}

#[test]
fn test_cli_infer_missing_model_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("settings.yaml");
    fs::write(&config, "model_path: missing.pt\n").unwrap();

    let output = bsort()
        .arg("infer")
        .arg("--config")
        .arg(&config)
        .args(["--image", "cap.jpg"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Model file not found at: missing.pt"));
}

#[cfg(unix)]
#[test]
fn test_cli_train_with_stand_in_executable() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("settings.yaml");
    fs::write(&config, "dataset_path: data.yaml\nepochs: 1\n").unwrap();

    let output = bsort()
        .arg("train")
        .arg("--config")
        .arg(&config)
        .args(["--yolo", "true"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Starting training with model: yolov8n.pt"));
    assert!(stdout.contains("Training finished."));

    let output = bsort()
        .arg("train")
        .arg("--config")
        .arg(&config)
        .args(["--yolo", "false"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("exited with"));
}

#[cfg(unix)]
#[test]
fn test_cli_infer_with_stand_in_executable() {
    let tmp = tempfile::tempdir().unwrap();
    let model = tmp.path().join("best.pt");
    let image = tmp.path().join("cap.jpg");
    let output_dir = tmp.path().join("out");
    fs::write(&model, b"").unwrap();
    fs::write(&image, b"").unwrap();
    fs::create_dir_all(output_dir.join("predict")).unwrap();

    let config = tmp.path().join("settings.yaml");
    fs::write(
        &config,
        format!(
            "model_path: {}\noutput_dir: {}\n",
            model.display(),
            output_dir.display()
        ),
    )
    .unwrap();

    let output = bsort()
        .arg("infer")
        .arg("--config")
        .arg(&config)
        .arg("--image")
        .arg(&image)
        .args(["--yolo", "true", "--verbose", "false"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "Inference complete. Results saved in {}",
        output_dir.join("predict2").display()
    );
    assert!(stdout.contains(&expected), "stdout was: {stdout}");
    assert!(!stdout.contains("image 1/1"));

    let output = bsort()
        .arg("infer")
        .arg("--config")
        .arg(&config)
        .arg("--image")
        .arg(&image)
        .args(["--yolo", "false"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("exited with"));
}
