//! # Chronica
//!
//! Form-driven chronic disease prediction over pre-trained classifiers.
//!
//! This crate provides:
//! - Per-disease feature schemas and raw-input mapping (Liver, Heart, Diabetes)
//! - A load-once model registry over serialized classifier artifacts
//! - Binary prediction with an append-only CSV prediction log
//! - Terminal UI for local data entry
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (Disease, FeatureSchema, InputRecord, Prediction)
//! - `ports`: Trait definitions for inference, model loading and logging
//! - `adapters`: Concrete implementations (JSON linear models, CSV log)
//! - `application`: Model registry and the prediction use case
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Disease, InputRecord, Prediction, RawInputs, RawValue};

/// Result type for Chronica operations
pub type Result<T> = std::result::Result<T, ChronicaError>;

/// Main error type for Chronica
#[derive(Debug, thiserror::Error)]
pub enum ChronicaError {
    #[error("Model load failed: {0}")]
    Load(#[from] adapters::LoadError),

    #[error("Input mapping failed: {0}")]
    Mapping(#[from] domain::MappingError),

    #[error("Inference failed: {0}")]
    Inference(#[from] ports::InferenceError),

    #[error("Prediction log write failed: {0}")]
    Log(#[from] adapters::LogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
