//! states-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite fun fact store, loads the reference dataset and serves the JSON API
//! over HTTP.

mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use states_api::AppState;
use states_core::Dataset;
use states_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::{ServerConfig, expand_tilde};

#[derive(Parser)]
#[command(author, version, about = "US states reference API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let dataset = match &server_cfg.dataset_path {
    Some(path) => {
      let path = expand_tilde(path);
      Dataset::from_path(&path)
        .with_context(|| format!("failed to load dataset from {path:?}"))?
    }
    None => Dataset::embedded().context("failed to load embedded dataset")?,
  };
  tracing::info!(states = dataset.len(), "reference dataset loaded");

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let app = states_api::api_router(AppState::new(store, dataset))
    .layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
