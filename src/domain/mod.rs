//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O. Everything here is
//! deterministic and cheap to construct once per prediction request.

mod disease;
mod prediction;
mod record;
mod schema;

pub use disease::{Disease, DiseaseProfile};
pub use prediction::Prediction;
pub use record::{build_record, InputRecord, MappingError, RawInputs, RawValue};
pub use schema::{FeatureSchema, Field, ValueKind};
