//! corpdir server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the directory JSON API over HTTP.
//! The schema is created or migrated automatically when the store opens.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use corpdir_store_sqlite::SqliteStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "corpdir directory API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml` with
/// `CORPDIR_*` environment overrides. Every field has a default so the
/// server runs with no config file at all.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:       String,
  #[serde(default = "default_port")]
  port:       u16,
  #[serde(default = "default_store_path")]
  store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("corpdir.db") }

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

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CORPDIR"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store_path = resolve_store_path(&server_cfg.store_path);

  // Open the SQLite store; this runs schema setup.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let app = corpdir_api::api_router(Arc::new(store))
    .layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Resolve a `~/`-prefixed store path against `$HOME`.
/// Paths without the prefix (and paths when `$HOME` is unset) pass through.
fn resolve_store_path(path: &Path) -> PathBuf {
  let rest = match path.to_str().and_then(|s| s.strip_prefix("~/")) {
    Some(rest) => rest,
    None => return path.to_path_buf(),
  };
  match std::env::var_os("HOME") {
    Some(home) => PathBuf::from(home).join(rest),
    None => path.to_path_buf(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_path_without_tilde_passes_through() {
    let path = Path::new("/var/lib/corpdir/corpdir.db");
    assert_eq!(resolve_store_path(path), path);
  }

  #[test]
  fn store_path_with_tilde_joins_home() {
    // HOME is set in any environment these tests run in; fall back to the
    // pass-through behaviour if it ever is not.
    let resolved = resolve_store_path(Path::new("~/corpdir.db"));
    match std::env::var_os("HOME") {
      Some(home) => {
        assert_eq!(resolved, PathBuf::from(home).join("corpdir.db"));
      }
      None => assert_eq!(resolved, Path::new("~/corpdir.db")),
    }
  }
}
