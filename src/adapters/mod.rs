//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external formats:
//! - `linear`: JSON-exported linear classifiers (the serialized model artifacts)
//! - `csvlog`: append-only CSV prediction log

pub mod csvlog;
pub mod linear;

// Re-export adapter errors for lib.rs
pub use csvlog::LogError;
pub use linear::LoadError;
