//! Clinica server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) layered under
//! `CLINICA_*` environment variables, opens the SQLite store, seeds the
//! default centers, and serves the JSON API over HTTP.
//!
//! # Migration only
//!
//! ```
//! cargo run -p clinica-api --bin server -- --migrate
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::{Context as _, bail};
use clap::Parser;
use clinica_api::{AppState, ServerConfig};
use clinica_core::{center::default_centers, store::ClinicStore};
use clinica_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Clinica appointment booking server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Create the schema, seed the default centers, and exit.
  #[arg(long)]
  migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CLINICA").try_parsing(true))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  if !cli.migrate && server_cfg.jwt_secret.trim().is_empty() {
    bail!("missing required setting: jwt_secret (set CLINICA_JWT_SECRET)");
  }

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let seeded = store
    .seed_centers(default_centers())
    .await
    .context("failed to seed centers")?;
  if seeded > 0 {
    tracing::info!(count = seeded, "seeded default centers");
  }

  if cli.migrate {
    let centers = store.list_centers().await.context("failed to list centers")?;
    println!("Migration complete");
    println!("   store:   {}", store_path.display());
    println!("   centers: {}", centers.len());
    return Ok(());
  }

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  let state = AppState::new(Arc::new(store), server_cfg);
  let app = clinica_api::router(state);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
