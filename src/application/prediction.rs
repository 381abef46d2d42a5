//! Prediction service: orchestrates registry lookup, inference and logging.

use std::sync::Arc;

use crate::adapters::{LoadError, LogError};
use crate::domain::{build_record, Disease, InputRecord, Prediction, RawInputs};
use crate::ports::{ModelLoader, PredictionLog, Predictor};
use crate::ChronicaError;

use super::registry::ModelRegistry;

/// Result of one prediction request.
///
/// A failed log append rides along instead of replacing the prediction: the
/// label was already computed and must reach the caller either way.
#[derive(Debug)]
pub struct PredictionOutcome {
    pub prediction: Prediction,
    pub log_error: Option<LogError>,
}

/// Service running the prediction pipeline.
///
/// One request runs to completion (mapping → inference → log append →
/// response) before the next; nothing here suspends mid-flight. Mapping and
/// inference failures abort the request before anything is logged.
pub struct PredictionService<L, G>
where
    L: ModelLoader,
    G: PredictionLog,
{
    registry: Arc<ModelRegistry<L>>,
    log: Arc<G>,
}

impl<L, G> PredictionService<L, G>
where
    L: ModelLoader,
    G: PredictionLog,
    L::Error: Into<LoadError>,
    G::Error: Into<LogError>,
{
    /// Create a new prediction service.
    pub fn new(registry: Arc<ModelRegistry<L>>, log: Arc<G>) -> Self {
        Self { registry, log }
    }

    /// Run inference on a mapped record, derive its label and append the
    /// entry to the prediction log.
    ///
    /// # Errors
    /// Returns `ChronicaError` on model load or inference failure; nothing
    /// is logged in those cases. A log append failure is NOT an error here,
    /// it is reported in the outcome's `log_error`.
    pub fn predict_and_log(&self, record: &InputRecord) -> Result<PredictionOutcome, ChronicaError> {
        let disease = record.disease();

        let model = self
            .registry
            .get(disease)
            .map_err(|e| ChronicaError::Load(e.into()))?;

        let class = model.infer(record)?;
        let prediction = Prediction::new(disease, class);

        let log_error = match self.log.append(record, &prediction.label) {
            Ok(()) => None,
            Err(e) => {
                let e: LogError = e.into();
                tracing::warn!("Failed to append prediction log entry: {e}");
                Some(e)
            }
        };

        tracing::info!(
            "Prediction complete: disease={}, class={}, label={:?}",
            disease,
            class,
            prediction.label
        );

        Ok(PredictionOutcome {
            prediction,
            log_error,
        })
    }

    /// Map raw form values for `disease` and run [`predict_and_log`].
    ///
    /// # Errors
    /// Additionally returns `ChronicaError::Mapping` when a required field
    /// is missing or a gender value is malformed.
    ///
    /// [`predict_and_log`]: Self::predict_and_log
    pub fn predict_raw(
        &self,
        disease: Disease,
        raw: &RawInputs,
    ) -> Result<PredictionOutcome, ChronicaError> {
        let record = build_record(disease, raw)?;
        self.predict_and_log(&record)
    }
}
