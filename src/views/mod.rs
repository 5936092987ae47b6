pub mod admin;
pub mod student;

use axum::routing::{any, get};
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Student form
        .route("/", any(student::form_view))
        // Admin
        .route("/admin", get(admin::index_page))
        .route("/admin/{model}", get(admin::list_page))
}
