pub mod admin;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::admin::{AdminSite, AlreadyRegistered};
use crate::config::Config;
use crate::models::Student;
use crate::state::{AppState, SharedState};

/// Register every admin list view. Runs once at start-up, before the router is built.
pub fn register_admin(site: &mut AdminSite, students: Vec<Student>) -> Result<(), AlreadyRegistered> {
    admin::student::register(site, students)
}

pub fn build_app(config: Config, admin: AdminSite) -> Router {
    let state: SharedState = Arc::new(AppState { admin });

    Router::new()
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_size)),
        )
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
