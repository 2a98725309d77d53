use anyhow::Result;
use clap::{Parser, Subcommand};
use schoolslug_store::SqliteStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "schoolslug")]
#[command(about = "Slug tooling for school-portal records", long_about = None)]
struct Cli {
    /// Path to the SQLite store. Falls back to the SCHOOLSLUG_DB env var.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a school record with the canonical slug
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: Option<String>,
    },
    /// Resolve a slug to a record (exact, code fallback, or closest match)
    Get {
        slug: String,
    },
    /// List every record as JSON
    List,
    /// Recompute canonical slugs and repair stale rows in batches
    Migrate {
        /// Compute and log every intended change without writing
        #[arg(short = 'd', long = "dry")]
        dry: bool,
    },
}

/// Where the store lives. Explicit only: `--db` flag or `SCHOOLSLUG_DB`.
///
/// There is deliberately no defaulted data-directory fallback; the tool must
/// never run against an implicit store.
fn store_location(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    match std::env::var("SCHOOLSLUG_DB") {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(anyhow::anyhow!(
            "no store configured: pass --db <path> or set SCHOOLSLUG_DB"
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = store_location(cli.db)?;
    let store = SqliteStore::new(&db_path)?;
    tracing::debug!(db = %db_path.display(), "store opened");

    match cli.command {
        Commands::Add { name, code } => commands::add::run(&store, &name, code.as_deref()).await,
        Commands::Get { slug } => commands::get::run(&store, &slug).await,
        Commands::List => commands::list::run(&store).await,
        Commands::Migrate { dry } => commands::migrate::run(&store, dry).await,
    }
}
