//! Predictor port: single-row inference over an opaque pre-trained model.

use crate::domain::{Disease, InputRecord};

/// Error raised at inference time.
///
/// These indicate the schema/model contract was violated upstream; they are
/// fatal for the request and nothing is logged when they occur.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("feature count mismatch: model expects {expected}, record has {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("feature name mismatch at position {index}: model expects {expected:?}, record has {got:?}")]
    FeatureNameMismatch {
        index: usize,
        expected: String,
        got: String,
    },

    #[error("model produced a non-finite score")]
    NonFiniteScore,
}

/// Narrow interface over a pre-trained classifier.
///
/// The core logic depends only on this trait, not on the concrete artifact
/// format. A model is immutable after load.
pub trait Predictor: Send + Sync {
    /// Run single-row inference, producing exactly one class value.
    ///
    /// # Errors
    /// Returns `InferenceError` if the record does not match the features
    /// the model was fit against.
    fn infer(&self, record: &InputRecord) -> Result<i64, InferenceError>;
}

/// Deserializes one disease's model from backing storage.
///
/// Called at most once per disease per process by the registry.
pub trait ModelLoader: Send + Sync {
    type Model: Predictor;

    /// Error type for load failures (artifact missing or corrupt).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deserialize the model for `disease`.
    ///
    /// # Errors
    /// Returns error if the backing artifact is absent or corrupt. This is
    /// fatal to any prediction for that disease; there is no fallback model.
    fn load(&self, disease: Disease) -> Result<Self::Model, Self::Error>;
}
