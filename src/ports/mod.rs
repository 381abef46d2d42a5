//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (serialized models, the
//! prediction log file).

mod log;
mod predictor;

pub use log::PredictionLog;
pub use predictor::{InferenceError, ModelLoader, Predictor};
