use clap::{Args, Parser, Subcommand};
use seeder::config::{
    DEFAULT_DATABASE_URL, DEFAULT_EMPLOYEES_PER_COMPANY, DEFAULT_MAX_COMPANIES,
    DEFAULT_SUFFIX_TIMEOUT, DEFAULT_SUFFIX_URL, Limits, SeedConfig, SuffixConfig, redact_db_url,
};
use seeder::pipeline;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "seeder", about = "Seeds a database with synthetic companies and employees")]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct Options {
    /// Target database (sqlite://, mysql:// or postgres://)
    #[arg(long, env = "SEED_DATABASE_URL", default_value = DEFAULT_DATABASE_URL, global = true)]
    database_url: String,

    /// Maximum number of companies the store may hold
    #[arg(long, env = "SEED_MAX_COMPANIES", default_value_t = DEFAULT_MAX_COMPANIES, global = true)]
    max_companies: u64,

    /// Employees each company is topped up to
    #[arg(long, env = "SEED_EMPLOYEES_PER_COMPANY", default_value_t = DEFAULT_EMPLOYEES_PER_COMPANY, global = true)]
    employees_per_company: u64,

    /// Endpoint returning a JSON object with a `suffix` field
    #[arg(long, env = "SEED_SUFFIX_URL", default_value = DEFAULT_SUFFIX_URL, global = true)]
    suffix_url: String,

    #[arg(long, env = "SEED_SUFFIX_TIMEOUT_SECS", default_value_t = DEFAULT_SUFFIX_TIMEOUT.as_secs(), global = true)]
    suffix_timeout_secs: u64,

    /// Never call the suffix endpoint; use local suffixes only
    #[arg(long, env = "SEED_OFFLINE", action = clap::ArgAction::SetTrue, global = true)]
    offline: bool,

    /// Seed for reproducible fake data
    #[arg(long, env = "SEED_RNG_SEED", global = true)]
    rng_seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize, generate, then print the summary (default)
    Run,
    /// Create the database and tables only
    Init,
    /// Generate data only
    Generate,
    /// Print the summary only
    Summary,
}

impl From<Options> for SeedConfig {
    fn from(o: Options) -> Self {
        SeedConfig {
            database_url: o.database_url,
            limits: Limits {
                max_companies: o.max_companies,
                employees_per_company: o.employees_per_company,
            },
            suffix: (!o.offline).then(|| SuffixConfig {
                url: o.suffix_url,
                timeout: Duration::from_secs(o.suffix_timeout_secs),
            }),
            rng_seed: o.rng_seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Init structured logging (respects RUST_LOG; defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SeedConfig::from(cli.options);

    tracing::info!(
        database = %redact_db_url(&config.database_url),
        max_companies = config.limits.max_companies,
        employees_per_company = config.limits.employees_per_company,
        remote_suffix = config.suffix.is_some(),
        "starting seeder"
    );

    let result = match cli.command {
        None | Some(Commands::Run) => run(&config).await,
        Some(Commands::Init) => pipeline::init_stage(&config).await.map(|_| ()),
        Some(Commands::Generate) => pipeline::generate_stage(&config).await.map(|_| ()),
        Some(Commands::Summary) => pipeline::summary_stage(&config).await.map(|summary| {
            println!("{summary}");
        }),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "seeding failed");
        return Err(e.into());
    }
    Ok(())
}

async fn run(config: &SeedConfig) -> Result<(), seeder::error::SeedError> {
    let (generation, summary) = pipeline::run_all(config).await?;
    println!("\nGenerated Companies and Employees:");
    println!("{summary}");
    generation.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_seed_config_defaults() {
        let cli = Cli::try_parse_from(["seeder"]).unwrap();
        assert!(cli.command.is_none());

        let config = SeedConfig::from(cli.options);
        let defaults = SeedConfig::default();
        assert_eq!(config.database_url, defaults.database_url);
        assert_eq!(config.limits, defaults.limits);
        assert_eq!(config.suffix, defaults.suffix);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_cli_offline_disables_suffix_lookup() {
        let cli = Cli::try_parse_from(["seeder", "--offline", "--max-companies", "3", "init"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));

        let config = SeedConfig::from(cli.options);
        assert!(config.suffix.is_none());
        assert_eq!(config.limits.max_companies, 3);
    }
}
