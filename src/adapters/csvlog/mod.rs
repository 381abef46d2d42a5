//! CSV prediction log adapter.
//!
//! Appends one row per prediction to a flat CSV file: the record's values in
//! schema order plus a trailing `Prediction` column. The header row is
//! written when the file is created. The file's column set is fixed by the
//! first entry ever logged into it; later entries with a different schema
//! are rejected instead of producing ragged rows, so cross-disease logs need
//! distinct files.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::InputRecord;
use crate::ports::PredictionLog;

/// Column name for the label appended after the feature columns.
pub const LABEL_COLUMN: &str = "Prediction";

/// Error appending to the prediction log.
///
/// Reported to the caller but never allowed to discard an already-computed
/// prediction.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO error on prediction log: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error on prediction log: {0}")]
    Csv(#[from] csv::Error),

    #[error("log column mismatch: file has [{found}], entry has [{expected}]")]
    SchemaMismatch { expected: String, found: String },
}

/// Append-only CSV prediction log.
pub struct CsvLog {
    path: PathBuf,
    // Serializes appends so concurrent requests cannot interleave rows.
    append_lock: Mutex<()>,
}

impl CsvLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn expected_columns(record: &InputRecord) -> Vec<String> {
        record
            .field_names()
            .map(String::from)
            .chain(std::iter::once(LABEL_COLUMN.to_string()))
            .collect()
    }

    /// Compare an existing file's header against the entry's columns.
    fn check_header(&self, expected: &[String]) -> Result<(), LogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        let mut header = csv::StringRecord::new();
        if !reader.read_record(&mut header)? {
            // Zero-byte or truncated file; treat as uninitialized.
            return Ok(());
        }

        let found: Vec<&str> = header.iter().collect();
        if found != expected.iter().map(String::as_str).collect::<Vec<_>>() {
            return Err(LogError::SchemaMismatch {
                expected: expected.join(", "),
                found: found.join(", "),
            });
        }
        Ok(())
    }
}

impl PredictionLog for CsvLog {
    type Error = LogError;

    fn append(&self, record: &InputRecord, label: &str) -> Result<(), LogError> {
        // A poisoned lock only means another append panicked; the file
        // itself is still append-consistent row by row.
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let expected = Self::expected_columns(record);
        let initialized = std::fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false);

        if initialized {
            self.check_header(&expected)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !initialized {
            writer.write_record(&expected)?;
        }

        let row: Vec<String> = record
            .values()
            .iter()
            .map(f64::to_string)
            .chain(std::iter::once(label.to_string()))
            .collect();
        writer.write_record(&row)?;
        writer.flush()?;

        tracing::debug!("Appended prediction row to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_record, Disease, RawInputs};
    use tempfile::tempdir;

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

    fn heart_record() -> InputRecord {
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
        build_record(Disease::Heart, &raw).expect("complete inputs")
    }

    #[test]
    fn test_append_writes_header_then_rows() {
        let temp = tempdir().expect("tempdir");
        let log = CsvLog::new(temp.path().join("user_inputs.csv"));

        let record = diabetes_record();
        for _ in 0..3 {
            log.append(&record, "Likely Diabetic").expect("append");
        }

        let content = std::fs::read_to_string(log.path()).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4, "one header + three data rows");
        assert_eq!(
            lines[0],
            "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,\
             DiabetesPedigreeFunction,Age,Prediction"
        );
        for line in &lines[1..] {
            assert_eq!(*line, "2,130,70,20,85,28.5,0.5,33,Likely Diabetic");
        }
    }

    #[test]
    fn test_append_rejects_cross_disease_schema() {
        let temp = tempdir().expect("tempdir");
        let log = CsvLog::new(temp.path().join("user_inputs.csv"));

        log.append(&heart_record(), "No Heart Disease")
            .expect("first append fixes the schema");
        let err = log
            .append(&diabetes_record(), "Likely Diabetic")
            .unwrap_err();
        assert!(matches!(err, LogError::SchemaMismatch { .. }));

        // Nothing was appended by the rejected entry.
        let content = std::fs::read_to_string(log.path()).expect("read log");
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_append_surfaces_io_failure() {
        let temp = tempdir().expect("tempdir");
        // A directory cannot be opened for append, even by root.
        let log = CsvLog::new(temp.path());
        let err = log.append(&diabetes_record(), "Likely Diabetic").unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
