//! Disease variants and their static profiles.
//!
//! Each disease maps to exactly one feature schema, one model artifact and
//! one pair of result labels. Dispatch goes through `profile()` so no string
//! comparison is needed anywhere in the pipeline.

use serde::{Deserialize, Serialize};

use super::schema::{FeatureSchema, DIABETES_SCHEMA, HEART_SCHEMA, LIVER_SCHEMA};

/// One of the three supported prediction domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disease {
    Liver,
    Heart,
    Diabetes,
}

/// Everything disease-specific the pipeline needs: the input schema, the
/// model artifact stem and the two result labels.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseProfile {
    pub schema: FeatureSchema,
    /// Artifact file is `<model_stem>_model.json` under the model directory.
    pub model_stem: &'static str,
    pub positive_label: &'static str,
    pub negative_label: &'static str,
}

const LIVER_PROFILE: DiseaseProfile = DiseaseProfile {
    schema: LIVER_SCHEMA,
    model_stem: "liver",
    positive_label: "Likely Liver Disease",
    negative_label: "No Liver Disease",
};

const HEART_PROFILE: DiseaseProfile = DiseaseProfile {
    schema: HEART_SCHEMA,
    model_stem: "heart",
    positive_label: "Likely Heart Disease",
    negative_label: "No Heart Disease",
};

const DIABETES_PROFILE: DiseaseProfile = DiseaseProfile {
    schema: DIABETES_SCHEMA,
    model_stem: "diabetes",
    positive_label: "Likely Diabetic",
    negative_label: "Not Diabetic",
};

impl Disease {
    /// All variants, in registry slot order.
    pub const ALL: [Disease; 3] = [Disease::Liver, Disease::Heart, Disease::Diabetes];

    /// Static profile for this disease.
    #[must_use]
    pub fn profile(&self) -> &'static DiseaseProfile {
        match self {
            Self::Liver => &LIVER_PROFILE,
            Self::Heart => &HEART_PROFILE,
            Self::Diabetes => &DIABETES_PROFILE,
        }
    }

    /// Feature schema this disease's model expects.
    #[must_use]
    pub fn schema(&self) -> FeatureSchema {
        self.profile().schema
    }

    /// Result label for a predicted class. Only the literal class `1` is
    /// positive; anything else maps to the negative label.
    #[must_use]
    pub fn label_for(&self, class: i64) -> &'static str {
        let profile = self.profile();
        if class == 1 {
            profile.positive_label
        } else {
            profile.negative_label
        }
    }

    /// Stable cache/slot index.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Liver => 0,
            Self::Heart => 1,
            Self::Diabetes => 2,
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Liver => write!(f, "Liver"),
            Self::Heart => write!(f, "Heart"),
            Self::Diabetes => write!(f, "Diabetes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_disease() {
        assert_eq!(Disease::Heart.label_for(1), "Likely Heart Disease");
        assert_eq!(Disease::Heart.label_for(0), "No Heart Disease");
        assert_eq!(Disease::Liver.label_for(1), "Likely Liver Disease");
        assert_eq!(Disease::Liver.label_for(0), "No Liver Disease");
        assert_eq!(Disease::Diabetes.label_for(1), "Likely Diabetic");
        assert_eq!(Disease::Diabetes.label_for(0), "Not Diabetic");
    }

    #[test]
    fn test_only_class_one_is_positive() {
        // Multi-class or error sentinels all read as negative.
        for class in [-1, 0, 2, 3, i64::MAX] {
            assert_eq!(Disease::Diabetes.label_for(class), "Not Diabetic");
        }
    }

    #[test]
    fn test_slot_indices_are_distinct() {
        let mut seen = [false; 3];
        for d in Disease::ALL {
            assert!(!seen[d.index()]);
            seen[d.index()] = true;
        }
    }
}
