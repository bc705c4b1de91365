mod cli;

use crate::cli::app::App;
use anyhow::{Context, Result};
use catalog_editor::EditorConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Edit one product catalog record from the terminal
#[derive(Parser, Debug)]
#[command(name = "catalog-editor", version)]
struct Args {
    /// Product to open; omit to start a new product
    #[arg(long)]
    product_id: Option<i32>,

    /// JSON file with editor configuration (defaults come from the environment)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with an empty catalog instead of the sample data
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            EditorConfig::from_json(&json).context("invalid editor configuration")?
        }
        None => EditorConfig::from_env(),
    };

    let mut app = App::open(config, args.product_id, !args.no_seed)
        .await
        .context("failed to open product editor")?;
    app.run().await.context("editor session failed")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_editor=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
