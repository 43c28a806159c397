//! Process wiring for the contacts HTTP server.
//!
//! Builds the application [`Router`] from a [`ServerConfig`]: fresh in-memory
//! stores, optional demo data, and request tracing.

use axum::Router;
use contacts_api::AppState;
use contacts_core::seed::seed_demo_data;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CONTACTS_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  /// Preload a handful of countries and persons at startup.
  #[serde(default)]
  pub seed_demo_data: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           default_host(),
      port:           default_port(),
      seed_demo_data: false,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Create the stores, seeding them if configured.
pub fn build_state(config: &ServerConfig) -> contacts_core::Result<AppState> {
  let state = AppState::new();
  if config.seed_demo_data {
    let added = seed_demo_data(&state.countries, &state.persons)?;
    tracing::info!(persons = added, "seeded demo data");
  }
  Ok(state)
}

/// The full HTTP application for `state`.
pub fn app(state: AppState) -> Router {
  contacts_api::api_router(state).layer(TraceLayer::new_for_http())
}
