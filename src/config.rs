use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    /// JSON array of students shown in the admin list view.
    pub students_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("STUDENTFORMS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid STUDENTFORMS_HOST: {e}"))?;

        let port: u16 = env_or("STUDENTFORMS_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid STUDENTFORMS_PORT: {e}"))?;

        let max_body_size: usize = env_or("STUDENTFORMS_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid STUDENTFORMS_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("STUDENTFORMS_LOG_LEVEL", "info");

        let students_file = std::env::var("STUDENTFORMS_STUDENTS_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            students_file,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
