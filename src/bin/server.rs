use anyhow::Context;
use clap::Parser;
use trivia_api::config::Settings;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database, overrides configuration
    #[clap(long)]
    db_path: Option<String>,
    /// Address to listen on, overrides configuration
    #[clap(long)]
    listen_addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut settings = Settings::load().context("Failed to load configuration")?;
    if let Some(db_path) = cli.db_path {
        settings.db_path = db_path;
    }
    if let Some(listen_addr) = cli.listen_addr {
        settings.listen_addr = listen_addr;
    }

    let pool = establish_connection(&settings.db_path)
        .await
        .with_context(|| format!("Cannot connect to DB at {}", settings.db_path))?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    run_server(pool, &settings.listen_addr).await
}
