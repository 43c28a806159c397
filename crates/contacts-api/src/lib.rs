//! JSON REST API for the contacts service.
//!
//! Exposes an axum [`Router`] over a [`CountryStore`] and a [`PersonStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", contacts_api::api_router(AppState::new()))
//! ```

pub mod countries;
pub mod error;
pub mod extract;
pub mod persons;

use std::sync::Arc;

use axum::{Router, routing::get};
use contacts_core::{CountryStore, PersonStore};

pub use error::ApiError;

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState {
  pub countries: Arc<CountryStore>,
  /// Resolves country names through the same `countries` store.
  pub persons:   Arc<PersonStore>,
}

impl AppState {
  /// Fresh, empty stores wired together.
  pub fn new() -> Self {
    let countries = Arc::new(CountryStore::new());
    let persons = Arc::new(PersonStore::new(countries.clone()));
    Self { countries, persons }
  }
}

impl Default for AppState {
  fn default() -> Self { Self::new() }
}

/// Build a fully-materialised API router over `state`.
pub fn api_router(state: AppState) -> Router<()> {
  Router::new()
    // Countries
    .route("/countries", get(countries::list).post(countries::create))
    .route("/countries/{id}", get(countries::get_one))
    // Persons
    .route("/persons", get(persons::list).post(persons::create))
    .route("/persons/search-fields", get(persons::search_fields))
    .route(
      "/persons/{id}",
      get(persons::get_one)
        .put(persons::update)
        .delete(persons::delete),
    )
    .with_state(state)
}
