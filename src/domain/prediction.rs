//! Prediction result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::disease::Disease;

/// Outcome of one classifier call, interpreted into a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: Disease,

    /// Raw class value returned by the model.
    pub class: i64,

    /// Whether the raw class was the literal positive class `1`.
    pub positive: bool,

    /// Human-readable label, also persisted to the prediction log.
    pub label: String,

    /// Timestamp of the prediction.
    pub created_at: DateTime<Utc>,
}

impl Prediction {
    /// Interpret a raw class value for a disease.
    #[must_use]
    pub fn new(disease: Disease, class: i64) -> Self {
        Self {
            disease,
            class,
            positive: class == 1,
            label: disease.label_for(class).to_string(),
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
