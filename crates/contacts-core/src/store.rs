//! [`CountryStore`] and [`PersonStore`]: the in-memory record collections.
//!
//! Each store owns its collection behind a single lock. Writers hold the
//! write lock for the whole operation; readers clone a snapshot under the
//! read lock. Every mutation is a single push, overwrite, or removal, so a
//! poisoned lock still guards consistent data and is recovered.
//!
//! Both stores are `Send + Sync` and are shared with HTTP handlers via `Arc`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::{
  Error, Result,
  country::{Country, CountryAddRequest, CountryResponse},
  person::{
    Person, PersonAddRequest, PersonResponse, PersonUpdateRequest, local_now,
  },
  query::{self, SortOrder},
  validate::Validate,
};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
  lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
  lock.write().unwrap_or_else(PoisonError::into_inner)
}

// ─── Countries ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CountryStore {
  countries: RwLock<Vec<Country>>,
}

impl CountryStore {
  pub fn new() -> Self { Self::default() }

  /// Add a country with a fresh id.
  ///
  /// Fails if the request is absent, the name is blank, or another country
  /// already has exactly the same name.
  pub fn add_country(
    &self,
    request: Option<CountryAddRequest>,
  ) -> Result<CountryResponse> {
    let request = request.ok_or(Error::NullRequest("country add request"))?;
    request.validate()?;
    let name = request.name.unwrap_or_default();

    let mut countries = write(&self.countries);
    if countries.iter().any(|c| c.name == name) {
      return Err(Error::Duplicate(name));
    }

    let country = Country {
      id: Uuid::new_v4(),
      name,
    };
    let response = country.to_response();
    countries.push(country);
    Ok(response)
  }

  /// Every country, in insertion order.
  pub fn get_all_countries(&self) -> Vec<CountryResponse> {
    read(&self.countries)
      .iter()
      .map(Country::to_response)
      .collect()
  }

  /// Look up a country. Absent and unknown ids both yield `None`.
  pub fn get_country_by_id(&self, id: Option<Uuid>) -> Option<CountryResponse> {
    let id = id?;
    read(&self.countries)
      .iter()
      .find(|c| c.id == id)
      .map(Country::to_response)
  }

  /// Resolve the display name for a weak country reference.
  fn country_name(&self, id: Option<Uuid>) -> Option<String> {
    self.get_country_by_id(id).map(|c| c.name)
  }
}

// ─── Persons ─────────────────────────────────────────────────────────────────

/// Person records, enriched on read with names from a shared
/// [`CountryStore`].
#[derive(Debug)]
pub struct PersonStore {
  persons:   RwLock<Vec<Person>>,
  countries: Arc<CountryStore>,
}

impl PersonStore {
  pub fn new(countries: Arc<CountryStore>) -> Self {
    Self {
      persons: RwLock::default(),
      countries,
    }
  }

  fn to_response(&self, person: &Person) -> PersonResponse {
    let country = self.countries.country_name(person.country_id);
    PersonResponse::from_person(person, country, local_now())
  }

  /// Validate and store a new person under a fresh id.
  pub fn add_person(
    &self,
    request: Option<PersonAddRequest>,
  ) -> Result<PersonResponse> {
    let request = request.ok_or(Error::NullRequest("person add request"))?;
    request.validate()?;

    let person = request.into_person(Uuid::new_v4());
    let response = self.to_response(&person);
    write(&self.persons).push(person);
    Ok(response)
  }

  /// Every person, enriched, in insertion order.
  pub fn get_all_persons(&self) -> Vec<PersonResponse> {
    let snapshot = read(&self.persons).clone();
    snapshot.iter().map(|p| self.to_response(p)).collect()
  }

  /// Look up a person. Absent and unknown ids both yield `None`.
  pub fn get_person_by_id(&self, id: Option<Uuid>) -> Option<PersonResponse> {
    let id = id?;
    let person = read(&self.persons).iter().find(|p| p.id == id).cloned()?;
    Some(self.to_response(&person))
  }

  /// Replace every mutable field of the person named by `request.id`.
  pub fn update_person(
    &self,
    request: Option<PersonUpdateRequest>,
  ) -> Result<PersonResponse> {
    let request = request.ok_or(Error::NullRequest("person update request"))?;
    request.validate()?;

    let id = request.id;
    let updated = {
      let mut persons = write(&self.persons);
      let person = persons
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(Error::NotFound(id))?;
      request.apply_to(person);
      person.clone()
    };
    Ok(self.to_response(&updated))
  }

  /// Remove a person. Returns `false` if no person has that id.
  pub fn delete_person(&self, id: Option<Uuid>) -> Result<bool> {
    let id = id.ok_or(Error::NullId)?;
    let mut persons = write(&self.persons);
    let Some(index) = persons.iter().position(|p| p.id == id) else {
      return Ok(false);
    };
    persons.remove(index);
    Ok(true)
  }

  /// All persons whose `field` contains `search_text`, ignoring case.
  ///
  /// See [`query::filter`] for the pass-through rules.
  pub fn filter_persons(
    &self,
    field: &str,
    search_text: &str,
  ) -> Vec<PersonResponse> {
    query::filter(self.get_all_persons(), field, search_text)
  }

  /// `persons` ordered by `field`. See [`query::sort`].
  pub fn sort_persons(
    &self,
    persons: Vec<PersonResponse>,
    field: &str,
    order: SortOrder,
  ) -> Vec<PersonResponse> {
    query::sort(persons, field, order)
  }

  pub fn len(&self) -> usize { read(&self.persons).len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
