//! Error types for `contacts-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A required request object was not supplied.
  #[error("{0} must be supplied")]
  NullRequest(&'static str),

  /// A field failed its declared rule; carries the first violation's message.
  #[error("{0}")]
  Validation(String),

  #[error("country name already exists: {0}")]
  Duplicate(String),

  #[error("person not found: {0}")]
  NotFound(Uuid),

  #[error("person id must be supplied")]
  NullId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
