//! Handlers for `/persons` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/persons` | `?searchBy&searchString&sortBy&sortOrder` |
//! | `POST`   | `/persons` | Body: [`PersonAddRequest`]; returns 201 |
//! | `GET`    | `/persons/search-fields` | Fields offered by the search form |
//! | `GET`    | `/persons/{id}` | 404 if not found |
//! | `PUT`    | `/persons/{id}` | Body: [`PersonUpdateRequest`]; the path id wins |
//! | `DELETE` | `/persons/{id}` | 204, or 404 if not found |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use contacts_core::{
  person::{PersonAddRequest, PersonResponse, PersonUpdateRequest},
  query::{SearchField, SortField, SortOrder},
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::{
  AppState,
  error::ApiError,
  extract::{ApiPath, ApiQuery, JsonBody},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  /// Field to search in, e.g. `name` or `country`.
  pub search_by:     Option<String>,
  /// Case-insensitive substring to look for.
  pub search_string: Option<String>,
  /// Defaults to `name`.
  pub sort_by:       Option<String>,
  /// `ASC` or `DESC` in any case; anything else sorts ascending.
  pub sort_order:    Option<String>,
}

/// `GET /persons`: filter first, then sort what is left.
pub async fn list(
  State(state): State<AppState>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Json<Vec<PersonResponse>> {
  let search_by = params.search_by.unwrap_or_default();
  let search_string = params.search_string.unwrap_or_default();
  let sort_by = params
    .sort_by
    .unwrap_or_else(|| SortField::Name.to_string());
  let sort_order = params
    .sort_order
    .as_deref()
    .map(SortOrder::parse_or_default)
    .unwrap_or_default();

  let matching = state.persons.filter_persons(&search_by, &search_string);
  tracing::debug!(
    %search_by,
    %search_string,
    %sort_by,
    %sort_order,
    matches = matching.len(),
    "listing persons"
  );
  Json(
    state
      .persons
      .sort_persons(matching, &sort_by, sort_order),
  )
}

// ─── Search fields ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFieldOption {
  /// Value to pass as `searchBy`.
  pub field: String,
  pub label: String,
}

/// `GET /persons/search-fields`
pub async fn search_fields() -> Json<Vec<SearchFieldOption>> {
  Json(
    SearchField::iter()
      .map(|f| SearchFieldOption {
        field: f.to_string(),
        label: f.label().to_owned(),
      })
      .collect(),
  )
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persons`
pub async fn create(
  State(state): State<AppState>,
  JsonBody(body): JsonBody<PersonAddRequest>,
) -> Result<impl IntoResponse, ApiError> {
  let person = state.persons.add_person(body)?;
  tracing::info!(id = %person.id, "person added");
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /persons/{id}`
pub async fn get_one(
  State(state): State<AppState>,
  ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<PersonResponse>, ApiError> {
  let person = state
    .persons
    .get_person_by_id(Some(id))
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /persons/{id}`: replaces every mutable field.
pub async fn update(
  State(state): State<AppState>,
  ApiPath(id): ApiPath<Uuid>,
  JsonBody(body): JsonBody<PersonUpdateRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
  let request = body.map(|mut b| {
    b.id = id;
    b
  });
  let person = state.persons.update_person(request)?;
  tracing::info!(%id, "person updated");
  Ok(Json(person))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /persons/{id}`
pub async fn delete(
  State(state): State<AppState>,
  ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
  if !state.persons.delete_person(Some(id))? {
    return Err(ApiError::NotFound(format!("person {id} not found")));
  }
  tracing::info!(%id, "person deleted");
  Ok(StatusCode::NO_CONTENT)
}
