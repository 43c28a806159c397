//! Extractors whose rejections are [`ApiError`]s, so malformed bodies, query
//! strings and path segments get the same `{"error": ...}` JSON shape as
//! every other failure.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, OptionalFromRequest, Path, Query, Request},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON body that may be absent.
///
/// A request with no `Content-Type` yields `JsonBody(None)`, which the stores
/// report as a missing request.
#[derive(Debug)]
pub struct JsonBody<T>(pub Option<T>);

impl<S, T> FromRequest<S> for JsonBody<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let body =
      <Json<T> as OptionalFromRequest<S>>::from_request(req, state).await?;
    Ok(Self(body.map(|Json(b)| b)))
  }
}

/// [`Query`] with an [`ApiError`] rejection.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
    Ok(Self(value))
  }
}

/// [`Path`] with an [`ApiError`] rejection.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
  T: DeserializeOwned + Send,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
    Ok(Self(value))
  }
}
