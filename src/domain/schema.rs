//! Per-disease feature schemas.
//!
//! Field names and their order must exactly match what the corresponding
//! serialized classifier was trained on. Nothing validates this at runtime
//! against the artifact beyond the predictor's own name check, so the tables
//! below are the single source of truth for each disease's input layout.

use serde::{Deserialize, Serialize};

/// How a raw form value becomes a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Any real number, passed through unchanged.
    Numeric,
    /// Integer already selected by the caller (chest-pain type, ST slope,
    /// vessel count, ...). Passed through unchanged.
    Categorical,
    /// "Male" encodes to 1, "Female" to 0.
    Gender,
}

/// One named feature the model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl Field {
    const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::Numeric,
        }
    }

    const fn categorical(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::Categorical,
        }
    }

    const fn gender(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::Gender,
        }
    }
}

/// Ordered list of fields a disease's model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSchema {
    pub fields: &'static [Field],
}

impl FeatureSchema {
    /// Number of features in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in model order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Indian Liver Patient Records layout (10 features).
pub(crate) const LIVER_SCHEMA: FeatureSchema = FeatureSchema {
    fields: &[
        Field::numeric("Age of the patient"),
        Field::gender("Gender of the patient"),
        Field::numeric("Total Bilirubin"),
        Field::numeric("Direct Bilirubin"),
        Field::numeric("Alkphos Alkaline Phosphotase"),
        Field::numeric("Sgpt Alamine Aminotransferase"),
        Field::numeric("Sgot Aspartate Aminotransferase"),
        // "Protiens" spelling comes from the training dataset column.
        Field::numeric("Total Protiens"),
        Field::numeric("ALB Albumin"),
        Field::numeric("A/G Ratio Albumin and Globulin Ratio"),
    ],
};

/// UCI Cleveland heart disease layout (13 features).
pub(crate) const HEART_SCHEMA: FeatureSchema = FeatureSchema {
    fields: &[
        Field::numeric("age"),
        Field::gender("sex"),
        Field::categorical("cp"),
        Field::numeric("trestbps"),
        Field::numeric("chol"),
        Field::categorical("fbs"),
        Field::categorical("restecg"),
        Field::numeric("thalach"),
        Field::categorical("exang"),
        Field::numeric("oldpeak"),
        Field::categorical("slope"),
        Field::categorical("ca"),
        Field::categorical("thal"),
    ],
};

/// Pima Indians diabetes layout (8 features).
pub(crate) const DIABETES_SCHEMA: FeatureSchema = FeatureSchema {
    fields: &[
        Field::numeric("Pregnancies"),
        Field::numeric("Glucose"),
        Field::numeric("BloodPressure"),
        Field::numeric("SkinThickness"),
        Field::numeric("Insulin"),
        Field::numeric("BMI"),
        Field::numeric("DiabetesPedigreeFunction"),
        Field::numeric("Age"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liver_schema_names_and_order() {
        let names: Vec<_> = LIVER_SCHEMA.names().collect();
        assert_eq!(
            names,
            vec![
                "Age of the patient",
                "Gender of the patient",
                "Total Bilirubin",
                "Direct Bilirubin",
                "Alkphos Alkaline Phosphotase",
                "Sgpt Alamine Aminotransferase",
                "Sgot Aspartate Aminotransferase",
                "Total Protiens",
                "ALB Albumin",
                "A/G Ratio Albumin and Globulin Ratio",
            ]
        );
    }

    #[test]
    fn test_heart_schema_names_and_order() {
        let names: Vec<_> = HEART_SCHEMA.names().collect();
        assert_eq!(
            names,
            vec![
                "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang",
                "oldpeak", "slope", "ca", "thal",
            ]
        );
    }

    #[test]
    fn test_diabetes_schema_names_and_order() {
        let names: Vec<_> = DIABETES_SCHEMA.names().collect();
        assert_eq!(
            names,
            vec![
                "Pregnancies",
                "Glucose",
                "BloodPressure",
                "SkinThickness",
                "Insulin",
                "BMI",
                "DiabetesPedigreeFunction",
                "Age",
            ]
        );
    }

    #[test]
    fn test_exactly_one_gender_field_per_gendered_schema() {
        for schema in [LIVER_SCHEMA, HEART_SCHEMA] {
            let genders = schema
                .fields
                .iter()
                .filter(|f| f.kind == ValueKind::Gender)
                .count();
            assert_eq!(genders, 1);
        }
        assert!(DIABETES_SCHEMA
            .fields
            .iter()
            .all(|f| f.kind == ValueKind::Numeric));
    }
}
