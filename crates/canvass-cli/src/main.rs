use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use canvass_config::CanvassConfig;
use canvass_store::LibsqlStore;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cnv error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = CanvassConfig::load_with_dotenv().context("failed to load configuration")?;
    let db_path = cli
        .db
        .clone()
        .map_or_else(|| config.storage.resolve_db_path(), Into::into);

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let db_path = db_path
        .to_str()
        .context("database path is not valid UTF-8")?
        .to_string();
    let store = Arc::new(
        LibsqlStore::open_local(&db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?,
    );

    match cli.command {
        cli::Commands::Project(action) => {
            commands::project::handle(action, &store, cli.format).await
        }
        cli::Commands::Research(action) => {
            commands::research::handle(action, store, cli.format).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?;
    Ok(())
}
