/// Database readiness layer
///
/// Handles the startup bootstrap sequence (ensure database, verify
/// connection, ensure schema) plus the read-only inspection queries used by
/// the reporting tools.

pub mod bootstrap;
pub mod inspect;
pub mod schema;

pub use bootstrap::{admin_url, database_name, redact_password, BootstrapStep};
pub use schema::create_tables;
