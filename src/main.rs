use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use studentforms::admin::AdminSite;
use studentforms::config::Config;
use studentforms::models::Student;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting studentforms");

    let students = match &config.students_file {
        Some(path) => {
            let students = Student::load_all(path)?;
            tracing::info!("Loaded {} students from {}", students.len(), path.display());
            students
        }
        None => Vec::new(),
    };

    let mut admin = AdminSite::new();
    studentforms::register_admin(&mut admin, students)?;

    let addr = SocketAddr::new(config.host, config.port);
    let app = studentforms::build_app(config, admin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
