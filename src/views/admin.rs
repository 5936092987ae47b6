use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};

use crate::error::AppError;
use crate::state::SharedState;

struct ModelLink {
    name: String,
    verbose_name_plural: String,
}

#[derive(Template)]
#[template(path = "admin/index.html")]
struct IndexTemplate {
    models: Vec<ModelLink>,
}

#[derive(Template)]
#[template(path = "admin/list.html")]
struct ListTemplate {
    verbose_name_plural: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

pub async fn index_page(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let models = state
        .admin
        .models()
        .map(|admin| ModelLink {
            name: admin.model_name().to_string(),
            verbose_name_plural: admin.verbose_name_plural().to_string(),
        })
        .collect();

    let template = IndexTemplate { models };
    Ok(Html(template.render()?))
}

pub async fn list_page(
    State(state): State<SharedState>,
    Path(model): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state
        .admin
        .get(&model)
        .ok_or_else(|| AppError::NotFound(format!("Model {model} is not registered")))?;

    let template = ListTemplate {
        verbose_name_plural: admin.verbose_name_plural().to_string(),
        columns: admin.list_display().iter().map(|c| c.to_string()).collect(),
        rows: admin.rows(),
    };
    Ok(Html(template.render()?))
}
