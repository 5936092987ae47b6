use std::sync::Arc;

use crate::admin::AdminSite;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub admin: AdminSite,
}
