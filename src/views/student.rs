use askama::Template;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method};
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDate;

use crate::error::AppError;
use crate::form::{parser, FormData, StudentForm, StudentSubmission, Validation};

#[derive(Template)]
#[template(path = "student/input.html")]
struct InputTemplate {
    form: StudentForm,
}

#[derive(Template)]
#[template(path = "student/output.html")]
struct OutputTemplate {
    name: String,
    age: i64,
    place: String,
    email: String,
    dob: NaiveDate,
}

impl From<StudentSubmission> for OutputTemplate {
    fn from(s: StudentSubmission) -> Self {
        OutputTemplate {
            name: s.name,
            age: s.age,
            place: s.place,
            email: s.email,
            dob: s.dob,
        }
    }
}

/// Show the student form, or validate a submitted one.
///
/// Only POST binds data. Every other method renders a fresh form and
/// ignores query parameters and body. A rejected submission re-renders the form with the
/// typed values and per-field messages.
pub async fn form_view(
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    if method != Method::POST {
        return render_input(StudentForm::unbound());
    }

    let data = parser::parse_body(&headers, body)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Unreadable form body: {e}");
            FormData::new()
        });

    let form = StudentForm::bind(data);
    match form.validate() {
        Validation::Valid(submission) => {
            tracing::info!(name = %submission.name, "Student form accepted");
            let template = OutputTemplate::from(submission);
            Ok(Html(template.render()?).into_response())
        }
        Validation::Invalid(errors) => {
            tracing::debug!(
                fields = ?errors.field_names().collect::<Vec<_>>(),
                "Student form rejected"
            );
            render_input(form.with_errors(errors))
        }
    }
}

fn render_input(form: StudentForm) -> Result<Response, AppError> {
    tracing::debug!(bound = form.is_bound(), "Rendering student form");
    let template = InputTemplate { form };
    Ok(Html(template.render()?).into_response())
}
