/// Schema objects for the RTGS Automation database
///
/// Declarative DDL for the application tables. Everything uses IF NOT EXISTS
/// so the whole module is safe to run against a live database: existing
/// tables are left untouched.

use anyhow::Result;
use sqlx::PgPool;

/// Application tables, in creation order (parents before children)
pub const TABLES: &[&str] = &["users", "remitters", "beneficiaries", "transactions"];

/// Ensure all declared tables exist
///
/// Idempotent: safe to call on every startup.
pub async fn create_tables(pool: &PgPool) -> Result<()> {
    // Account holders
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            full_name TEXT,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Sending-side bank details, one active record per user
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS remitters (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            account_number TEXT NOT NULL,
            account_name TEXT NOT NULL,
            bank_name TEXT,
            branch_name TEXT,
            ifsc_code TEXT,
            swift_code TEXT,
            pan_number TEXT,
            mobile TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Receiving-side bank details
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS beneficiaries (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            account_number TEXT NOT NULL,
            account_name TEXT NOT NULL,
            bank_name TEXT,
            branch_name TEXT,
            ifsc_code TEXT,
            swift_code TEXT,
            mobile TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // RTGS transfer records
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            remitter_id INTEGER REFERENCES remitters(id),
            beneficiary_id INTEGER REFERENCES beneficiaries(id),
            amount NUMERIC(14, 2) NOT NULL,
            currency TEXT NOT NULL DEFAULT 'INR',
            reference_number TEXT UNIQUE,
            status TEXT NOT NULL DEFAULT 'pending',
            remarks TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Lookup indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_remitters_user ON remitters(user_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_beneficiaries_user ON beneficiaries(user_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions(user_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_transactions_status ON transactions(status)")
        .execute(pool)
        .await?;

    Ok(())
}
