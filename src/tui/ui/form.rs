//! Per-disease patient data entry form.
//!
//! Field tables mirror the input widgets of the original data-entry page:
//! free numeric inputs, a Male/Female selector, and integer choice widgets
//! for the coded heart fields. Only Age and Pregnancies carry a non-negative
//! floor; everything else is unvalidated by contract.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{Disease, RawInputs};
use crate::tui::styles::ClinicTheme;

/// How a form field collects its value.
#[derive(Debug, Clone, Copy)]
pub enum FieldInput {
    /// Typed number; `min` is enforced at this boundary only.
    Numeric { min: Option<f64> },
    /// One of a fixed set of integer codes, cycled with ←/→.
    Choice { options: &'static [i64] },
    /// Male/Female selector, cycled with ←/→.
    Gender,
}

/// Static definition of one form field.
#[derive(Debug, Clone, Copy)]
pub struct FormFieldSpec {
    /// Schema feature name this field feeds.
    pub feature: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub input: FieldInput,
}

const fn numeric(feature: &'static str, label: &'static str, hint: &'static str) -> FormFieldSpec {
    FormFieldSpec {
        feature,
        label,
        hint,
        input: FieldInput::Numeric { min: None },
    }
}

const fn non_negative(
    feature: &'static str,
    label: &'static str,
    hint: &'static str,
) -> FormFieldSpec {
    FormFieldSpec {
        feature,
        label,
        hint,
        input: FieldInput::Numeric { min: Some(0.0) },
    }
}

const fn choice(
    feature: &'static str,
    label: &'static str,
    options: &'static [i64],
) -> FormFieldSpec {
    FormFieldSpec {
        feature,
        label,
        hint: "←/→ to change",
        input: FieldInput::Choice { options },
    }
}

const LIVER_FIELDS: &[FormFieldSpec] = &[
    non_negative("Age of the patient", "Age", "years"),
    FormFieldSpec {
        feature: "Gender of the patient",
        label: "Gender",
        hint: "←/→ to change",
        input: FieldInput::Gender,
    },
    numeric("Total Bilirubin", "Total Bilirubin", "mg/dL"),
    numeric("Direct Bilirubin", "Direct Bilirubin", "mg/dL"),
    numeric("Alkphos Alkaline Phosphotase", "Alkaline Phosphotase", "IU/L"),
    numeric("Sgpt Alamine Aminotransferase", "Alamine Aminotransferase", "IU/L"),
    numeric("Sgot Aspartate Aminotransferase", "Aspartate Aminotransferase", "IU/L"),
    numeric("Total Protiens", "Total Proteins", "g/dL"),
    numeric("ALB Albumin", "Albumin", "g/dL"),
    numeric("A/G Ratio Albumin and Globulin Ratio", "A/G Ratio", "ratio"),
];

const HEART_FIELDS: &[FormFieldSpec] = &[
    non_negative("age", "Age", "years"),
    FormFieldSpec {
        feature: "sex",
        label: "Sex",
        hint: "←/→ to change",
        input: FieldInput::Gender,
    },
    choice("cp", "Chest Pain Type", &[0, 1, 2, 3]),
    numeric("trestbps", "Resting Blood Pressure", "mmHg"),
    numeric("chol", "Serum Cholesterol", "mg/dL"),
    choice("fbs", "Fasting Blood Sugar > 120 mg/dl", &[0, 1]),
    choice("restecg", "Resting ECG", &[0, 1, 2]),
    numeric("thalach", "Max Heart Rate Achieved", "bpm"),
    choice("exang", "Exercise Induced Angina", &[0, 1]),
    numeric("oldpeak", "ST Depression", "relative to rest"),
    choice("slope", "Slope of Peak Exercise ST Segment", &[0, 1, 2]),
    choice("ca", "Number of Major Vessels", &[0, 1, 2, 3]),
    choice("thal", "Thalassemia", &[0, 1, 2]),
];

const DIABETES_FIELDS: &[FormFieldSpec] = &[
    non_negative("Pregnancies", "Pregnancies", "count"),
    numeric("Glucose", "Glucose Level", "mg/dL"),
    numeric("BloodPressure", "Blood Pressure", "mmHg"),
    numeric("SkinThickness", "Skin Thickness", "mm"),
    numeric("Insulin", "Insulin Level", "mu U/mL"),
    numeric("BMI", "BMI", "kg/m^2"),
    numeric("DiabetesPedigreeFunction", "Diabetes Pedigree Function", "score"),
    non_negative("Age", "Age", "years"),
];

const GENDER_OPTIONS: [&str; 2] = ["Male", "Female"];

/// Form field definitions for a disease, in schema order.
#[must_use]
pub fn form_fields(disease: Disease) -> &'static [FormFieldSpec] {
    match disease {
        Disease::Liver => LIVER_FIELDS,
        Disease::Heart => HEART_FIELDS,
        Disease::Diabetes => DIABETES_FIELDS,
    }
}

/// One field's live state.
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: &'static FormFieldSpec,
    /// Typed buffer for numeric fields.
    pub value: String,
    /// Selected index for Choice/Gender fields.
    pub choice: usize,
}

impl FormField {
    fn display_value(&self) -> String {
        match self.spec.input {
            FieldInput::Numeric { .. } => self.value.clone(),
            FieldInput::Choice { options } => options[self.choice].to_string(),
            FieldInput::Gender => GENDER_OPTIONS[self.choice].to_string(),
        }
    }
}

/// Per-disease entry form state.
pub struct DiseaseFormState {
    pub disease: Disease,
    pub fields: Vec<FormField>,
    pub selected: usize,
    pub error_message: Option<String>,
}

impl DiseaseFormState {
    #[must_use]
    pub fn new(disease: Disease) -> Self {
        let fields = form_fields(disease)
            .iter()
            .map(|spec| FormField {
                spec,
                value: String::new(),
                choice: 0,
            })
            .collect();
        Self {
            disease,
            fields,
            selected: 0,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = self.fields.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Type into a numeric field. Non-negative fields refuse a minus sign.
    pub fn input_char(&mut self, c: char) {
        let field = &mut self.fields[self.selected];
        if let FieldInput::Numeric { min } = field.spec.input {
            let allow_minus = c == '-' && min.is_none() && field.value.is_empty();
            if c.is_ascii_digit() || c == '.' || allow_minus {
                field.value.push(c);
                self.error_message = None;
            }
        }
    }

    pub fn delete_char(&mut self) {
        if let FieldInput::Numeric { .. } = self.fields[self.selected].spec.input {
            self.fields[self.selected].value.pop();
        }
    }

    pub fn clear_field(&mut self) {
        self.fields[self.selected].value.clear();
    }

    /// Cycle a Choice/Gender field; `forward` for →, backwards for ←.
    pub fn cycle_choice(&mut self, forward: bool) {
        let field = &mut self.fields[self.selected];
        let len = match field.spec.input {
            FieldInput::Choice { options } => options.len(),
            FieldInput::Gender => GENDER_OPTIONS.len(),
            FieldInput::Numeric { .. } => return,
        };
        field.choice = if forward {
            (field.choice + 1) % len
        } else {
            (field.choice + len - 1) % len
        };
        self.error_message = None;
    }

    /// Fill typical values for a quick manual test run.
    pub fn load_sample_data(&mut self) {
        let samples: &[&str] = match self.disease {
            Disease::Liver => &["52", "", "1.1", "0.4", "210", "38", "44", "6.9", "3.2", "0.9"],
            Disease::Heart => &["61", "", "", "140", "240", "", "", "150", "", "1.4", "", "", ""],
            Disease::Diabetes => &["2", "130", "70", "20", "85", "28.5", "0.5", "33"],
        };
        for (field, sample) in self.fields.iter_mut().zip(samples) {
            if let FieldInput::Numeric { .. } = field.spec.input {
                field.value = (*sample).to_string();
            }
        }
    }

    /// Collect the form into raw inputs for the schema mapper.
    ///
    /// # Errors
    /// Returns a display message for an unparsable or below-floor number.
    pub fn to_raw_inputs(&self) -> Result<RawInputs, String> {
        let mut raw = RawInputs::new();
        for field in &self.fields {
            match field.spec.input {
                FieldInput::Numeric { min } => {
                    let value: f64 = field
                        .value
                        .parse()
                        .map_err(|_| format!("{}: invalid number", field.spec.label))?;
                    if let Some(min) = min {
                        if value < min {
                            return Err(format!(
                                "{}: must be at least {}",
                                field.spec.label, min
                            ));
                        }
                    }
                    raw.set(field.spec.feature, value);
                }
                FieldInput::Choice { options } => {
                    raw.set(field.spec.feature, options[field.choice]);
                }
                FieldInput::Gender => {
                    raw.set(field.spec.feature, GENDER_OPTIONS[field.choice]);
                }
            }
        }
        Ok(raw)
    }
}

/// Render the patient data entry form.
pub fn render_form(f: &mut Frame, area: Rect, state: &DiseaseFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0], state);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect, state: &DiseaseFormState) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled(
            format!("{} Disease Prediction", state.disease),
            ClinicTheme::title(),
        ),
        Span::styled(" │ Enter patient details", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &DiseaseFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;
    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected);
    render_field_column(f, columns[1], &state.fields[mid..], mid, state.selected);
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            ClinicTheme::border_focused()
        } else {
            ClinicTheme::border()
        };
        let title_style = if is_selected {
            ClinicTheme::focused()
        } else {
            ClinicTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.spec.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value = field.display_value();
        let value_display = if value.is_empty() {
            Span::styled(field.spec.hint, ClinicTheme::text_muted())
        } else {
            Span::styled(value, ClinicTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", ClinicTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &DiseaseFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", ClinicTheme::danger()),
            Span::styled(err.clone(), ClinicTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", ClinicTheme::key_hint()),
            Span::styled("Navigate ", ClinicTheme::key_desc()),
            Span::styled("[←→] ", ClinicTheme::key_hint()),
            Span::styled("Change ", ClinicTheme::key_desc()),
            Span::styled("[Enter] ", ClinicTheme::key_hint()),
            Span::styled("Predict ", ClinicTheme::key_desc()),
            Span::styled("[S] ", ClinicTheme::key_hint()),
            Span::styled("Sample ", ClinicTheme::key_desc()),
            Span::styled("[Esc] ", ClinicTheme::key_hint()),
            Span::styled("Back", ClinicTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(footer, area);
}
