//! Handlers for `/countries` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/countries` | Insertion order |
//! | `POST` | `/countries` | Body: `{"name":"Canada"}`; 409 if the name is taken |
//! | `GET`  | `/countries/{id}` | 404 if not found |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use contacts_core::country::{CountryAddRequest, CountryResponse};
use uuid::Uuid;

use crate::{
  AppState,
  error::ApiError,
  extract::{ApiPath, JsonBody},
};

/// `GET /countries`
pub async fn list(State(state): State<AppState>) -> Json<Vec<CountryResponse>> {
  Json(state.countries.get_all_countries())
}

/// `POST /countries`
pub async fn create(
  State(state): State<AppState>,
  JsonBody(body): JsonBody<CountryAddRequest>,
) -> Result<impl IntoResponse, ApiError> {
  let country = state.countries.add_country(body)?;
  tracing::info!(id = %country.id, name = %country.name, "country added");
  Ok((StatusCode::CREATED, Json(country)))
}

/// `GET /countries/{id}`
pub async fn get_one(
  State(state): State<AppState>,
  ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<CountryResponse>, ApiError> {
  let country = state
    .countries
    .get_country_by_id(Some(id))
    .ok_or_else(|| ApiError::NotFound(format!("country {id} not found")))?;
  Ok(Json(country))
}
