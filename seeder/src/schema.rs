use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

use crate::config::{DatabaseTarget, redact_db_url, split_database_url};
use crate::error::SeedError;

pub const TABLES: [&str; 2] = ["companies", "employees"];

/// Create the target database on its server if it does not exist yet.
///
/// Returns `true` when the database was created by this call. SQLite URLs are
/// a no-op: the file is created on connect through `mode=rwc`.
pub async fn ensure_database(database_url: &str) -> Result<bool, SeedError> {
    let target = split_database_url(database_url)?;
    let Some(name) = target.name.as_deref() else {
        return Ok(false);
    };

    tracing::debug!(server = %redact_db_url(&target.server_url), database = %name, "checking database");
    let server = Database::connect(&target.server_url)
        .await
        .map_err(SeedError::Connect)?;

    let result = create_database_if_missing(&server, &target, name).await;
    if let Err(e) = server.close().await {
        tracing::warn!(error = %e, "failed to close server connection");
    }
    let created = result?;
    if created {
        tracing::info!(database = %name, "created database");
    }
    Ok(created)
}

async fn create_database_if_missing(
    server: &DatabaseConnection,
    target: &DatabaseTarget,
    name: &str,
) -> Result<bool, SeedError> {
    match target.backend {
        DbBackend::MySql => {
            let result = server
                .execute_unprepared(&format!("CREATE DATABASE IF NOT EXISTS `{name}`"))
                .await?;
            Ok(result.rows_affected() > 0)
        }
        DbBackend::Postgres => {
            let existing = server
                .query_one(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    "SELECT 1 FROM pg_database WHERE datname = $1",
                    [name.into()],
                ))
                .await?;
            if existing.is_some() {
                return Ok(false);
            }
            server
                .execute_unprepared(&format!("CREATE DATABASE \"{name}\""))
                .await?;
            Ok(true)
        }
        DbBackend::Sqlite => Ok(false),
    }
}

/// Ensure the `companies` and `employees` tables exist.
///
/// Tables that already exist are left as they are, whatever their shape.
/// Returns the names of the tables created by this call.
pub async fn initialize(db: &DatabaseConnection) -> Result<Vec<&'static str>, SeedError> {
    let manager = SchemaManager::new(db);
    let mut missing = Vec::new();
    for table in TABLES {
        if !manager.has_table(table).await? {
            missing.push(table);
        }
    }

    Migrator::up(db, None).await?;

    for table in &missing {
        tracing::info!(table = %table, "created table");
    }
    tracing::info!("database initialization checked/completed");
    Ok(missing)
}
