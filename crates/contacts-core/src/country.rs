//! Country: the lookup entity persons point at by id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored country. Never updated or removed once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
  pub id:   Uuid,
  pub name: String,
}

impl Country {
  pub fn to_response(&self) -> CountryResponse {
    CountryResponse {
      id:   self.id,
      name: self.name.clone(),
    }
  }
}

/// Input for [`CountryStore::add_country`](crate::store::CountryStore::add_country).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAddRequest {
  pub name: Option<String>,
}

impl CountryAddRequest {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
  pub id:   Uuid,
  pub name: String,
}
