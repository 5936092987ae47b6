use std::path::Path;

use serde::Deserialize;

/// A student record as listed by the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub number: i64,
    pub name: String,
    pub marks: i64,
}

impl Student {
    /// Display value of a column by field name.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "number" => Some(self.number.to_string()),
            "name" => Some(self.name.clone()),
            "marks" => Some(self.marks.to_string()),
            _ => None,
        }
    }

    /// Load a JSON array of students.
    pub fn load_all(path: &Path) -> Result<Vec<Student>, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        serde_json::from_str(&raw).map_err(|e| format!("Invalid students file {}: {e}", path.display()))
    }
}
