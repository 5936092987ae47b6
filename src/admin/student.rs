use std::sync::Arc;

use crate::models::Student;

use super::{AdminSite, AlreadyRegistered, ModelAdmin};

pub struct StudentAdmin {
    students: Vec<Student>,
}

impl StudentAdmin {
    pub const LIST_DISPLAY: &'static [&'static str] = &["number", "name", "marks"];

    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl ModelAdmin for StudentAdmin {
    fn model_name(&self) -> &str {
        "student"
    }

    fn verbose_name_plural(&self) -> &str {
        "Students"
    }

    fn list_display(&self) -> &[&'static str] {
        Self::LIST_DISPLAY
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.students
            .iter()
            .map(|student| {
                self.list_display()
                    .iter()
                    .map(|column| student.field(column).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Register the student list view. Called once while building the app.
pub fn register(site: &mut AdminSite, students: Vec<Student>) -> Result<(), AlreadyRegistered> {
    site.register(Arc::new(StudentAdmin::new(students)))
}
