use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod migrate;
pub mod models;
pub mod repositories;
pub mod store;

pub use migrate::{apply_migrations, run_migrations, MigrationFailurePolicy};

pub type DbPool = sqlx::PgPool;

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new().max_connections(20)
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    pool_options().connect(database_url).await
}

/// Create a pool that opens connections on first use.
///
/// Only fails if `database_url` cannot be parsed.
pub fn create_lazy_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    pool_options().connect_lazy(database_url)
}

/// Open the pool startup uses.
///
/// Under [`MigrationFailurePolicy::Fail`] the database must be reachable now.
/// Under [`MigrationFailurePolicy::Continue`] an unreachable database is
/// logged and the service starts with a lazy pool, so requests can succeed
/// once the database comes up.
pub async fn connect(
    database_url: &str,
    policy: MigrationFailurePolicy,
) -> Result<DbPool, sqlx::Error> {
    connect_with(pool_options(), database_url, policy).await
}

async fn connect_with(
    options: PgPoolOptions,
    database_url: &str,
    policy: MigrationFailurePolicy,
) -> Result<DbPool, sqlx::Error> {
    match options.clone().connect(database_url).await {
        Ok(pool) => Ok(pool),
        Err(err) if policy == MigrationFailurePolicy::Continue => {
            tracing::error!(
                error = %err,
                "Database unreachable at startup, continuing with a lazy pool"
            );
            options.connect_lazy(database_url)
        }
        Err(err) => Err(err),
    }
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
