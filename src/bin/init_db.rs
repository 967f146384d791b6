/// Standalone PostgreSQL initializer for the RTGS Automation backend
///
/// Runs the same bootstrap sequence as server startup, without starting the
/// server. Safe to re-run: every step is idempotent. Exits non-zero at the
/// first failing step with a step-labeled status line.

use rtgs_backend::{
    config::Settings,
    db::{bootstrap, bootstrap::redact_password},
    report::StdoutReporter,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("🚀 RTGS Automation App - PostgreSQL database initialization");

    let settings = Settings::resolve();
    println!("🔗 Database: {}", redact_password(&settings.database_url));

    let mut reporter = StdoutReporter;
    match bootstrap::run(&settings, &mut reporter).await {
        Ok(()) => {
            println!("🎉 Database initialization completed successfully!");
        }
        Err(_) => {
            // The failing step already printed its labeled diagnostic
            std::process::exit(1);
        }
    }
}
