//! Stage wrappers. Each stage opens its own connection, runs, and closes the
//! connection again whether the stage succeeded or not.

use sea_orm::{Database, DatabaseConnection};

use crate::config::{SeedConfig, redact_db_url};
use crate::error::SeedError;
use crate::fake::LocalFaker;
use crate::generator::{GenerationReport, Generator};
use crate::report::{self, Summary};
use crate::schema;
use crate::suffix::HttpSuffixLookup;

async fn connect(database_url: &str) -> Result<DatabaseConnection, SeedError> {
    tracing::debug!(database = %redact_db_url(database_url), "connecting");
    Database::connect(database_url)
        .await
        .map_err(SeedError::Connect)
}

/// Close `db`, keeping the stage's own error if it had one.
async fn finish<T>(db: DatabaseConnection, result: Result<T, SeedError>) -> Result<T, SeedError> {
    let closed = db.close().await;
    let value = result?;
    closed?;
    Ok(value)
}

/// Create the database if needed, then its tables.
pub async fn init_stage(config: &SeedConfig) -> Result<Vec<&'static str>, SeedError> {
    schema::ensure_database(&config.database_url).await?;
    let db = connect(&config.database_url).await?;
    let result = schema::initialize(&db).await;
    finish(db, result).await
}

pub async fn generate_stage(config: &SeedConfig) -> Result<GenerationReport, SeedError> {
    let faker = match config.rng_seed {
        Some(seed) => LocalFaker::from_seed(seed),
        None => LocalFaker::from_entropy(),
    };
    let mut generator = Generator::new(config.limits, faker);
    if let Some(suffix) = &config.suffix {
        match HttpSuffixLookup::new(suffix) {
            Ok(lookup) => generator = generator.with_suffix_lookup(Box::new(lookup)),
            Err(e) => {
                tracing::warn!(error = %e, "remote suffix lookup unavailable, using local suffixes")
            }
        }
    }

    let db = connect(&config.database_url).await?;
    let result = generator.run(&db).await;
    finish(db, result).await
}

pub async fn summary_stage(config: &SeedConfig) -> Result<Summary, SeedError> {
    let db = connect(&config.database_url).await?;
    let result = report::summarize(&db, config.limits.max_companies).await;
    finish(db, result).await
}

/// Initializer, generator and reporter, in that order.
///
/// Only an initializer failure halts the run. A generator failure is logged
/// and returned alongside the summary, which is read regardless.
pub async fn run_all(
    config: &SeedConfig,
) -> Result<(Result<GenerationReport, SeedError>, Summary), SeedError> {
    init_stage(config).await?;
    let generation = generate_stage(config).await;
    if let Err(e) = &generation {
        tracing::error!(error = %e, "data generation failed");
    }
    let summary = summary_stage(config).await?;
    Ok((generation, summary))
}
