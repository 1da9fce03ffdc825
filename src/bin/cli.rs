use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::telemetry::init_tracing;
use trivia_api::transfer::{export_data, import_data};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the schema
    Migrate,
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export the question bank as csv files into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli.db_path.display().to_string();
    let pool = establish_connection(&db_path)
        .await
        .with_context(|| format!("Cannot connect to DB at {db_path}"))?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::Migrate => tracing::info!("Migrations applied"),
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export")?,
        Commands::Import { path } => import_data(&pool, &path).await.context("Cannot import")?,
    }
    Ok(())
}
