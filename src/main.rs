use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use pitchbase::catalog::ddl::create_schema;
use pitchbase::config::Config;
use pitchbase::db::create_pool;
use pitchbase::error::{LoadError, Result};
use pitchbase::loader::run_all;

/// The feed lifecycle is drop-and-reload: re-running against a populated
/// store is undefined unless tables are recreated first. Code-level switch,
/// deliberately not a CLI flag.
const DROP_EXISTING: bool = true;

#[derive(Parser)]
#[command(name = "pitchbase", version, about = "CSV-to-SQLite ETL for company intelligence exports")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the relational schema, dropping any existing tables first.
    Schema,
    /// Load all ten CSV exports into an already-created schema.
    Load,
    /// Create the schema, then load all CSV exports.
    Run,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    config.init_logging();
    info!("pitchbase starting");

    let result = match cli.command {
        Command::Schema => schema(&config).map(|()| ExitCode::SUCCESS),
        Command::Load => load(&config),
        Command::Run => schema(&config).and_then(|()| load(&config)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}

fn schema(config: &Config) -> Result<()> {
    let pool = create_pool(&config.database.path.to_string_lossy())?;
    create_schema(&pool, DROP_EXISTING)
}

fn load(config: &Config) -> Result<ExitCode> {
    // Opening the pool would create an empty store file and mask the
    // schema-not-ready precondition, so check before connecting.
    if !config.database.path.exists() {
        return Err(LoadError::StoreMissing(config.database.path.clone()).into());
    }
    let pool = create_pool(&config.database.path.to_string_lossy())?;
    let report = run_all(&pool, &config.database.path, &config.ingest.csv_dir)?;
    if report.failures() > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
