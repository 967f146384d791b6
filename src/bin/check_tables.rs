/// Database report for the RTGS Automation backend
///
/// Prints connection facts, the tables present in the public schema and row
/// counts for the application tables. Read-only.

use rtgs_backend::{
    config::Settings,
    db::{bootstrap::redact_password, inspect, schema},
    report::{Outcome, Reporter, StdoutReporter},
};
use sqlx::PgPool;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("🔍 RTGS Database Report");

    let settings = Settings::resolve();
    let mut reporter = StdoutReporter;

    let pool = match PgPool::connect(&settings.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            reporter.report(
                "Connect",
                &Outcome::failure(format!(
                    "cannot connect to {}: {}",
                    redact_password(&settings.database_url),
                    e
                )),
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = report(&pool, &mut reporter).await {
        reporter.report("Report", &Outcome::failure(format!("{e:#}")));
        pool.close().await;
        std::process::exit(1);
    }

    pool.close().await;
}

async fn report(pool: &PgPool, reporter: &mut dyn Reporter) -> anyhow::Result<()> {
    let info = inspect::connection_info(pool).await?;
    let version = info.version.split(',').next().unwrap_or(&info.version);
    reporter.report(
        "Connect",
        &Outcome::success_with(format!(
            "database '{}' as '{}' ({})",
            info.database, info.user, version
        )),
    );

    let tables = inspect::list_tables(pool).await?;
    if tables.is_empty() {
        println!("❌ No tables found in the database");
        return Ok(());
    }
    println!("📋 Tables in public schema:");
    for table in &tables {
        println!("   - {}", table);
    }

    println!("📊 Row counts:");
    for (table, count) in inspect::table_counts(pool, schema::TABLES).await? {
        println!("   {:<15}: {} rows", table, count);
    }

    Ok(())
}
