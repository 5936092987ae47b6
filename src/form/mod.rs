pub mod fields;
pub mod parser;

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use fields::FieldError;

/// Raw field-name to value pairs, as they arrive in a form body.
pub type FormData = HashMap<String, String>;

/// Accepted input formats for the date of birth.
pub const DOB_INPUT_FORMATS: &[&str] = &["%d-%m-%Y"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Email,
    Date,
}

impl FieldKind {
    /// HTML `<input type>` used when rendering the field.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Date => "text",
            FieldKind::Integer => "number",
            FieldKind::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Field declarations of the student form, in display order.
pub const STUDENT_FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: "name", label: "Name", kind: FieldKind::Text },
    FieldSpec { name: "age", label: "Age", kind: FieldKind::Integer },
    FieldSpec { name: "place", label: "Place", kind: FieldKind::Text },
    FieldSpec { name: "email", label: "Email", kind: FieldKind::Email },
    FieldSpec { name: "dob", label: "Dob", kind: FieldKind::Date },
];

/// A fully validated student form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSubmission {
    pub name: String,
    pub age: i64,
    pub place: String,
    pub email: String,
    pub dob: NaiveDate,
}

/// Error messages grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, error: FieldError) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(error.to_string());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Outcome of validating a form: all fields parsed, or the messages for those that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(StudentSubmission),
    Invalid(FieldErrors),
}

/// One field as the input view renders it.
#[derive(Debug, Clone)]
pub struct BoundField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub errors: Vec<String>,
}

/// The student form, either unbound (fresh) or bound to submitted data.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    data: Option<FormData>,
    errors: FieldErrors,
}

impl StudentForm {
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn bind(data: FormData) -> Self {
        Self {
            data: Some(data),
            errors: FieldErrors::default(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// Attach validation errors so they render next to the submitted values.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }

    fn value(&self, field: &str) -> Option<&str> {
        self.data.as_ref()?.get(field).map(String::as_str)
    }

    /// Validate every field independently. An unbound form is invalid without errors.
    pub fn validate(&self) -> Validation {
        if !self.is_bound() {
            return Validation::Invalid(FieldErrors::default());
        }

        let mut errors = FieldErrors::default();

        let name = check(&mut errors, "name", fields::clean_text(self.value("name")));
        let age = check(&mut errors, "age", fields::clean_integer(self.value("age")));
        let place = check(&mut errors, "place", fields::clean_text(self.value("place")));
        let email = check(&mut errors, "email", fields::clean_email(self.value("email")));
        let dob = check(
            &mut errors,
            "dob",
            fields::clean_date(self.value("dob"), DOB_INPUT_FORMATS),
        );

        match (name, age, place, email, dob) {
            (Some(name), Some(age), Some(place), Some(email), Some(dob)) => {
                Validation::Valid(StudentSubmission {
                    name,
                    age,
                    place,
                    email,
                    dob,
                })
            }
            _ => Validation::Invalid(errors),
        }
    }

    pub fn fields(&self) -> Vec<BoundField> {
        STUDENT_FIELDS
            .iter()
            .map(|spec| BoundField {
                name: spec.name,
                label: spec.label,
                input_type: spec.kind.input_type(),
                value: self.value(spec.name).unwrap_or_default().to_string(),
                errors: self.errors.get(spec.name).to_vec(),
            })
            .collect()
    }
}

fn check<T>(errors: &mut FieldErrors, field: &str, result: Result<T, FieldError>) -> Option<T> {
    result.map_err(|e| errors.add(field, e)).ok()
}
