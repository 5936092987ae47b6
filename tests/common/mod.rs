use std::net::SocketAddr;

use reqwest::{Client, Response};

use studentforms::admin::AdminSite;
use studentforms::config::Config;
use studentforms::models::Student;

/// A running test server instance bound to a random local port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    /// Submit the student form url-encoded, return the response.
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url("/"))
            .form(data)
            .send()
            .await
            .expect("submit form failed")
    }

    /// GET a path and return (status, body text).
    pub async fn get_text(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (status, body)
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 4096,
        log_level: "warn".to_string(),
        students_file: None,
    }
}

#[allow(dead_code)]
/// Spawn a test app with no student records.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_students(Vec::new()).await
}

#[allow(dead_code)]
/// Spawn a test app whose admin list view shows `students`.
pub async fn spawn_app_with_students(students: Vec<Student>) -> TestApp {
    let mut admin = AdminSite::new();
    studentforms::register_admin(&mut admin, students).expect("admin registration failed");

    let app = studentforms::build_app(test_config(), admin);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}

#[allow(dead_code)]
pub const VALID_FORM: [(&str, &str); 5] = [
    ("name", "Alice"),
    ("age", "20"),
    ("place", "NY"),
    ("email", "a@b.com"),
    ("dob", "01-01-2000"),
];

#[allow(dead_code)]
/// `VALID_FORM` with one field replaced.
pub fn form_with<'a>(field: &str, value: &'a str) -> Vec<(&'static str, &'a str)> {
    VALID_FORM
        .iter()
        .map(|&(k, v)| if k == field { (k, value) } else { (k, v) })
        .collect()
}
