//! Raw form inputs and the schema mapper.
//!
//! `build_record` is the only way to obtain an `InputRecord`, so a record's
//! value order always equals its disease's schema order by construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::disease::Disease;
use super::schema::ValueKind;

/// Error mapping raw form values onto a feature schema.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("field {field} expects \"Male\" or \"Female\", got {value:?}")]
    InvalidGender { field: &'static str, value: String },

    #[error("field {0} expects a number")]
    NotNumeric(&'static str),
}

/// A raw scalar as it arrives from the UI boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Mapping from UI field identifiers to raw scalar values.
#[derive(Debug, Clone, Default)]
pub struct RawInputs(HashMap<String, RawValue>);

impl RawInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style insert, convenient in tests and form code.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.0.get(field)
    }
}

/// One request's fully-encoded feature values, ready for inference.
///
/// Created fresh per prediction request and discarded after logging.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    disease: Disease,
    values: Vec<f64>,
}

impl InputRecord {
    #[must_use]
    pub fn disease(&self) -> Disease {
        self.disease
    }

    /// Feature values in schema order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.disease.schema().fields.iter().map(|f| f.name)
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.field_names().zip(self.values.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Map raw form values onto the disease's feature schema.
///
/// Validates presence of every schema field, encodes gender fields
/// (Male → 1, Female → 0) and passes numeric and caller-selected categorical
/// values through unchanged. No range validation happens here; non-negative
/// floors on Age/Pregnancies are the form's responsibility.
///
/// # Errors
/// Returns `MappingError` if a field is missing, a gender value is not
/// "Male"/"Female", or a numeric field carries text.
pub fn build_record(disease: Disease, raw: &RawInputs) -> Result<InputRecord, MappingError> {
    let schema = disease.schema();
    let mut values = Vec::with_capacity(schema.len());

    for field in schema.fields {
        let value = raw
            .get(field.name)
            .ok_or(MappingError::MissingField(field.name))?;

        let encoded = match (field.kind, value) {
            (ValueKind::Gender, RawValue::Text(s)) => match s.as_str() {
                "Male" => 1.0,
                "Female" => 0.0,
                other => {
                    return Err(MappingError::InvalidGender {
                        field: field.name,
                        value: other.to_string(),
                    })
                }
            },
            (ValueKind::Gender, RawValue::Number(n)) => {
                return Err(MappingError::InvalidGender {
                    field: field.name,
                    value: n.to_string(),
                })
            }
            (ValueKind::Numeric | ValueKind::Categorical, RawValue::Number(n)) => *n,
            (ValueKind::Numeric | ValueKind::Categorical, RawValue::Text(_)) => {
                return Err(MappingError::NotNumeric(field.name))
            }
        };

        values.push(encoded);
    }

    Ok(InputRecord { disease, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_heart_inputs() -> RawInputs {
        RawInputs::new()
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
            .with("thal", 2)
    }

    fn full_liver_inputs() -> RawInputs {
        RawInputs::new()
            .with("Age of the patient", 45.0)
            .with("Gender of the patient", "Female")
            .with("Total Bilirubin", 0.9)
            .with("Direct Bilirubin", 0.2)
            .with("Alkphos Alkaline Phosphotase", 190.0)
            .with("Sgpt Alamine Aminotransferase", 25.0)
            .with("Sgot Aspartate Aminotransferase", 30.0)
            .with("Total Protiens", 6.8)
            .with("ALB Albumin", 3.4)
            .with("A/G Ratio Albumin and Globulin Ratio", 1.0)
    }

    #[test]
    fn test_record_order_matches_schema_for_all_diseases() {
        let heart = build_record(Disease::Heart, &full_heart_inputs()).expect("complete inputs");
        let names: Vec<_> = heart.field_names().collect();
        assert_eq!(
            names,
            vec![
                "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang",
                "oldpeak", "slope", "ca", "thal",
            ]
        );
        assert_eq!(heart.len(), 13);

        let liver = build_record(Disease::Liver, &full_liver_inputs()).expect("complete inputs");
        assert_eq!(liver.len(), 10);
        assert_eq!(liver.field_names().next(), Some("Age of the patient"));
    }

    #[test]
    fn test_gender_encoding() {
        let male = build_record(Disease::Heart, &full_heart_inputs()).unwrap();
        assert_eq!(male.values()[1], 1.0);

        let mut raw = full_heart_inputs();
        raw.set("sex", "Female");
        let female = build_record(Disease::Heart, &raw).unwrap();
        assert_eq!(female.values()[1], 0.0);

        let liver = build_record(Disease::Liver, &full_liver_inputs()).unwrap();
        assert_eq!(liver.values()[1], 0.0);
    }

    #[test]
    fn test_heart_sex_comes_from_heart_selector() {
        // The sex encoding must track the Heart form's own selector, even
        // when an unrelated liver gender key is present in the raw inputs.
        let mut raw = full_heart_inputs();
        raw.set("sex", "Female");
        raw.set("Gender of the patient", "Male");
        let record = build_record(Disease::Heart, &raw).unwrap();
        assert_eq!(record.values()[1], 0.0);
    }

    #[test]
    fn test_missing_field_errors() {
        let raw = RawInputs::new()
            .with("age", 61.0)
            .with("sex", "Male")
            .with("cp", 2);
        let err = build_record(Disease::Heart, &raw).unwrap_err();
        assert_eq!(err, MappingError::MissingField("trestbps"));
    }

    #[test]
    fn test_invalid_gender_errors() {
        let mut raw = full_heart_inputs();
        raw.set("sex", "male");
        let err = build_record(Disease::Heart, &raw).unwrap_err();
        assert!(matches!(err, MappingError::InvalidGender { field: "sex", .. }));
    }

    #[test]
    fn test_diabetes_record_is_verbatim() {
        let raw = RawInputs::new()
            .with("Pregnancies", 2.0)
            .with("Glucose", 130.0)
            .with("BloodPressure", 70.0)
            .with("SkinThickness", 20.0)
            .with("Insulin", 85.0)
            .with("BMI", 28.5)
            .with("DiabetesPedigreeFunction", 0.5)
            .with("Age", 33.0);
        let record = build_record(Disease::Diabetes, &raw).unwrap();
        assert_eq!(
            record.values(),
            &[2.0, 130.0, 70.0, 20.0, 85.0, 28.5, 0.5, 33.0]
        );
    }

    #[test]
    fn test_negative_numerics_pass_through() {
        // Fields without a natural lower bound accept any real number.
        let mut raw = full_heart_inputs();
        raw.set("oldpeak", -2.5);
        let record = build_record(Disease::Heart, &raw).unwrap();
        assert_eq!(record.values()[9], -2.5);
    }
}
