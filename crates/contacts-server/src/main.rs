//! contacts-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), layers
//! `CONTACTS_*` environment variables on top, and serves the JSON API over
//! HTTP. All records live in memory and are lost on exit.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use contacts_server::{ServerConfig, app, build_state};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "In-memory contacts server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Preload demo countries and persons, overriding the config file.
  #[arg(long)]
  seed: bool,
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
    .add_source(config::Environment::with_prefix("CONTACTS"))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  server_cfg.seed_demo_data |= cli.seed;

  let state = build_state(&server_cfg).context("failed to seed demo data")?;
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(state))
    .await
    .context("server error")?;

  Ok(())
}
