//! Schema migrations applied at process startup.
//!
//! The migration set under `crates/db/migrations` is embedded at compile time
//! and applied idempotently; already-applied versions are skipped.

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};

use crate::DbPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// What startup does when applying migrations fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MigrationFailurePolicy {
    /// Log the failure and keep starting. The service may then run against
    /// a stale or missing schema.
    #[default]
    Continue,
    /// Abort startup.
    Fail,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown migration failure policy '{0}' (expected 'continue' or 'fail')")]
pub struct UnknownPolicy(pub String);

impl FromStr for MigrationFailurePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "fail" => Ok(Self::Fail),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Apply pending migrations, handling a failure according to `policy`.
///
/// With [`MigrationFailurePolicy::Continue`] this never returns an error.
pub async fn apply_migrations(
    pool: &DbPool,
    policy: MigrationFailurePolicy,
) -> Result<(), MigrateError> {
    match run_migrations(pool).await {
        Ok(()) => {
            tracing::info!("Database migrations applied");
            Ok(())
        }
        Err(err) => match policy {
            MigrationFailurePolicy::Continue => {
                tracing::error!(error = %err, "An error occurred while migrating the database");
                Ok(())
            }
            MigrationFailurePolicy::Fail => Err(err),
        },
    }
}
