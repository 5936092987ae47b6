pub mod student;

use std::collections::BTreeMap;
use std::sync::Arc;

/// List-view configuration for one record type shown in the admin panel.
pub trait ModelAdmin: Send + Sync {
    /// URL segment and registry key, e.g. `student`.
    fn model_name(&self) -> &str;
    fn verbose_name_plural(&self) -> &str;
    /// Column names shown by the list view, in order.
    fn list_display(&self) -> &[&'static str];
    /// One row per record, one cell per `list_display` column.
    fn rows(&self) -> Vec<Vec<String>>;
}

#[derive(Debug)]
pub struct AlreadyRegistered {
    pub model: String,
}

impl std::fmt::Display for AlreadyRegistered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The model {} is already registered", self.model)
    }
}

impl std::error::Error for AlreadyRegistered {}

#[derive(Default)]
pub struct AdminSite {
    models: BTreeMap<String, Arc<dyn ModelAdmin>>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, admin: Arc<dyn ModelAdmin>) -> Result<(), AlreadyRegistered> {
        let model = admin.model_name().to_string();
        if self.models.contains_key(&model) {
            return Err(AlreadyRegistered { model });
        }
        tracing::debug!(model = %model, "Registered admin model");
        self.models.insert(model, admin);
        Ok(())
    }

    pub fn get(&self, model: &str) -> Option<&Arc<dyn ModelAdmin>> {
        self.models.get(model)
    }

    pub fn models(&self) -> impl Iterator<Item = &Arc<dyn ModelAdmin>> {
        self.models.values()
    }
}
