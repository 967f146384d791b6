/// RTGS Automation backend server
///
/// Main entry point. Resolves configuration, runs the database bootstrap
/// sequence and starts the HTTP server. If any bootstrap step fails the
/// process exits non-zero without accepting traffic.

use rtgs_backend::{
    config::Settings,
    db::{bootstrap, bootstrap::redact_password},
    report::StdoutReporter,
    server::start_server,
};

/// Application entry point
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    // Resolve configuration (defaults, .env file, environment, PORT override)
    let settings = Settings::resolve();
    tracing::info!(
        "🔗 Database: {}",
        redact_password(&settings.database_url)
    );
    tracing::info!("🌐 Binding {}:{}", settings.api_host, settings.api_port);

    // Bring the database to a ready state before serving
    let mut reporter = StdoutReporter;
    if let Err(e) = bootstrap::run(&settings, &mut reporter).await {
        tracing::error!("❌ Database bootstrap failed: {:#}", e);
        std::process::exit(1);
    }

    // Start the server
    start_server(settings).await?;

    Ok(())
}
