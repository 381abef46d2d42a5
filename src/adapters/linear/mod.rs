//! Linear model adapter: Predictor over a JSON-exported classifier.
//!
//! The artifact is the serialized-model equivalent of the original pickled
//! estimators: one JSON file per disease
//! (`models/<disease>_model.json`) exported by the training pipeline,
//! holding feature names, coefficients, intercept and a decision threshold.
//! The adapter treats it as opaque beyond shape checks; there is no
//! training or calibration here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Disease, InputRecord};
use crate::ports::{InferenceError, ModelLoader, Predictor};

/// Error loading a model artifact. Fatal for that disease's predictions.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("model artifact not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model artifact format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("malformed model: {0}")]
    Malformed(String),
}

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Probability cutoff for the positive class.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// A loaded, immutable linear classifier.
#[derive(Debug)]
pub struct LinearModel {
    params: ExportedModel,
}

impl LinearModel {
    /// Load and sanity-check an exported model file.
    ///
    /// # Errors
    /// Returns `LoadError` if the file is absent, unreadable, not valid
    /// JSON, or internally inconsistent.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let params: ExportedModel = serde_json::from_str(&content)?;

        let n = params.feature_names.len();
        if n == 0 {
            return Err(LoadError::Malformed("empty feature_names".into()));
        }
        if params.coefficients.len() != n {
            return Err(LoadError::Malformed(format!(
                "coefficients length {} does not match {} feature names",
                params.coefficients.len(),
                n
            )));
        }
        if !params.threshold.is_finite() || !(0.0..=1.0).contains(&params.threshold) {
            return Err(LoadError::Malformed(format!(
                "threshold {} outside [0, 1]",
                params.threshold
            )));
        }

        tracing::info!(
            "Loaded model from {:?} (n_features={}, threshold={})",
            path,
            n,
            params.threshold
        );

        Ok(Self { params })
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

impl Predictor for LinearModel {
    fn infer(&self, record: &InputRecord) -> Result<i64, InferenceError> {
        let n = self.params.feature_names.len();
        if record.len() != n {
            return Err(InferenceError::FeatureCountMismatch {
                expected: n,
                got: record.len(),
            });
        }

        // The model was fit against vectors in feature_names order; refuse
        // records whose layout silently drifted.
        for (index, (name, expected)) in record
            .field_names()
            .zip(self.params.feature_names.iter())
            .enumerate()
        {
            if name != expected {
                return Err(InferenceError::FeatureNameMismatch {
                    index,
                    expected: expected.clone(),
                    got: name.to_string(),
                });
            }
        }

        let logit: f64 = record
            .values()
            .iter()
            .zip(self.params.coefficients.iter())
            .map(|(x, c)| x * c)
            .sum::<f64>()
            + self.params.intercept;

        let probability = Self::sigmoid(logit);
        if !probability.is_finite() {
            return Err(InferenceError::NonFiniteScore);
        }

        Ok(i64::from(probability >= self.params.threshold))
    }
}

/// Resolves `<dir>/<disease>_model.json` and loads it.
pub struct DiskModelLoader {
    dir: PathBuf,
}

impl DiskModelLoader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Artifact path for a disease.
    #[must_use]
    pub fn artifact_path(&self, disease: Disease) -> PathBuf {
        self.dir
            .join(format!("{}_model.json", disease.profile().model_stem))
    }
}

impl ModelLoader for DiskModelLoader {
    type Model = LinearModel;
    type Error = LoadError;

    fn load(&self, disease: Disease) -> Result<LinearModel, LoadError> {
        LinearModel::load(&self.artifact_path(disease))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_record, RawInputs};
    use tempfile::tempdir;

    fn diabetes_model(coefficients: Vec<f64>, intercept: f64) -> ExportedModel {
        ExportedModel {
            feature_names: Disease::Diabetes
                .schema()
                .names()
                .map(String::from)
                .collect(),
            coefficients,
            intercept,
            threshold: 0.5,
        }
    }

    fn write_model(path: &Path, model: &ExportedModel) {
        let json = serde_json::to_string_pretty(model).expect("serialize model");
        std::fs::write(path, json).expect("write model");
    }

    fn diabetes_record() -> InputRecord {
        let raw = RawInputs::new()
            .with("Pregnancies", 2.0)
            .with("Glucose", 130.0)
            .with("BloodPressure", 70.0)
            .with("SkinThickness", 20.0)
            .with("Insulin", 85.0)
            .with("BMI", 28.5)
            .with("DiabetesPedigreeFunction", 0.5)
            .with("Age", 33.0);
        build_record(Disease::Diabetes, &raw).expect("complete inputs")
    }

    #[test]
    fn test_load_rejects_missing_artifact() {
        let temp = tempdir().expect("tempdir");
        let err = LinearModel::load(&temp.path().join("diabetes_model.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_length_mismatch() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("bad.json");
        // 8 feature names, 3 coefficients.
        write_model(&path, &diabetes_model(vec![0.1, 0.2, 0.3], 0.0));
        let err = LinearModel::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_infer_signs_decide_class() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("diabetes_model.json");

        // Large positive intercept forces the positive class regardless of input.
        write_model(&path, &diabetes_model(vec![0.0; 8], 10.0));
        let model = LinearModel::load(&path).expect("load");
        assert_eq!(model.infer(&diabetes_record()).unwrap(), 1);

        // Large negative intercept forces the negative class.
        write_model(&path, &diabetes_model(vec![0.0; 8], -10.0));
        let model = LinearModel::load(&path).expect("load");
        assert_eq!(model.infer(&diabetes_record()).unwrap(), 0);
    }

    #[test]
    fn test_infer_rejects_wrong_disease_record() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("diabetes_model.json");
        write_model(&path, &diabetes_model(vec![0.0; 8], 0.0));
        let model = LinearModel::load(&path).expect("load");

        let raw = RawInputs::new()
            .with("age", 61.0)
            .with("sex", "Male")
            .with("cp", 2)
            .with("trestbps", 140.0)
            .with("chol", 240.0)
            .with("fbs", 0)
            .with("restecg", 1)
            .with("thalach", 150.0)
            .with("exang", 0)
            .with("oldpeak", 1.4)
            .with("slope", 1)
            .with("ca", 0)
            .with("thal", 2);
        let heart = build_record(Disease::Heart, &raw).expect("complete inputs");

        let err = model.infer(&heart).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::FeatureCountMismatch {
                expected: 8,
                got: 13
            }
        ));
    }

    #[test]
    fn test_disk_loader_resolves_artifact_names() {
        let loader = DiskModelLoader::new("models");
        assert_eq!(
            loader.artifact_path(Disease::Liver),
            PathBuf::from("models/liver_model.json")
        );
        assert_eq!(
            loader.artifact_path(Disease::Heart),
            PathBuf::from("models/heart_model.json")
        );
        assert_eq!(
            loader.artifact_path(Disease::Diabetes),
            PathBuf::from("models/diabetes_model.json")
        );
    }
}
