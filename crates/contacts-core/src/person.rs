//! Person: the contact record, its request DTOs and its enriched read model.
//!
//! A [`Person`] is what the store holds. Callers never see it directly: reads
//! return a [`PersonResponse`], which adds the resolved country name and the
//! computed age.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use uuid::Uuid;

/// Average length of a year in days, leap years included.
const DAYS_PER_YEAR: f64 = 365.25;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Date rendering used for display and for searching by date of birth.
pub const DATE_OF_BIRTH_FORMAT: &str = "%d %B %Y";

// ─── Gender ──────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
  Male,
  Female,
  Other,
}

impl<'de> Deserialize<'de> for Gender {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    crate::de::from_str(deserializer, "gender")
  }
}

// ─── Stored record ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  pub id:                  Uuid,
  pub name:                String,
  pub email:               String,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  /// Weak reference; may name a country that does not exist.
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  pub receive_news_letter: bool,
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Input for [`PersonStore::add_person`](crate::store::PersonStore::add_person).
///
/// `name` and `email` are optional here so that a missing value surfaces as a
/// validation message rather than a deserialisation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAddRequest {
  pub name:                Option<String>,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_news_letter: bool,
}

impl PersonAddRequest {
  pub(crate) fn into_person(self, id: Uuid) -> Person {
    Person {
      id,
      name: self.name.unwrap_or_default(),
      email: self.email.unwrap_or_default(),
      date_of_birth: self.date_of_birth,
      gender: self.gender,
      country_id: self.country_id,
      address: self.address,
      receive_news_letter: self.receive_news_letter,
    }
  }
}

/// Input for [`PersonStore::update_person`](crate::store::PersonStore::update_person).
///
/// Every mutable field is replaced; `id` selects the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdateRequest {
  #[serde(default)]
  pub id:                  Uuid,
  pub name:                Option<String>,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_news_letter: bool,
}

impl PersonUpdateRequest {
  /// Overwrite every mutable field of `person`. The id is left untouched.
  pub(crate) fn apply_to(self, person: &mut Person) {
    person.name = self.name.unwrap_or_default();
    person.email = self.email.unwrap_or_default();
    person.date_of_birth = self.date_of_birth;
    person.gender = self.gender;
    person.country_id = self.country_id;
    person.address = self.address;
    person.receive_news_letter = self.receive_news_letter;
  }
}

// ─── Read model ──────────────────────────────────────────────────────────────

/// A person as returned to callers. Never stored, always derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
  pub id:                  Uuid,
  pub name:                String,
  pub email:               String,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  /// Name of the country `country_id` resolves to, if any.
  pub country:             Option<String>,
  pub address:             Option<String>,
  pub receive_news_letter: bool,
  /// Whole years since `date_of_birth`, rounded to the nearest year.
  pub age:                 Option<i64>,
}

impl PersonResponse {
  /// Build the read model for `person`, computing age relative to `now`.
  pub fn from_person(
    person: &Person,
    country: Option<String>,
    now: NaiveDateTime,
  ) -> Self {
    Self {
      id: person.id,
      name: person.name.clone(),
      email: person.email.clone(),
      date_of_birth: person.date_of_birth,
      gender: person.gender,
      country_id: person.country_id,
      country,
      address: person.address.clone(),
      receive_news_letter: person.receive_news_letter,
      age: person.date_of_birth.map(|dob| age_at(dob, now)),
    }
  }

  pub fn to_update_request(&self) -> PersonUpdateRequest {
    PersonUpdateRequest {
      id:                  self.id,
      name:                Some(self.name.clone()),
      email:               Some(self.email.clone()),
      date_of_birth:       self.date_of_birth,
      gender:              self.gender,
      country_id:          self.country_id,
      address:             self.address.clone(),
      receive_news_letter: self.receive_news_letter,
    }
  }

  /// `date_of_birth` rendered as e.g. `05 March 1990`.
  pub fn formatted_date_of_birth(&self) -> Option<String> {
    self
      .date_of_birth
      .map(|dob| dob.format(DATE_OF_BIRTH_FORMAT).to_string())
  }
}

impl fmt::Display for PersonResponse {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} <{}> [{}]", self.name, self.email, self.id)?;
    if let Some(dob) = self.formatted_date_of_birth() {
      write!(f, ", born {dob}")?;
    }
    if let Some(gender) = self.gender {
      write!(f, ", {gender}")?;
    }
    if let Some(country) = &self.country {
      write!(f, ", {country}")?;
    }
    if let Some(address) = &self.address {
      write!(f, ", {address}")?;
    }
    write!(f, ", newsletter: {}", self.receive_news_letter)
  }
}

/// Age in years of someone born on `date_of_birth`, as of `now`.
///
/// The birth date is taken at midnight; the elapsed time is divided by
/// [`DAYS_PER_YEAR`] and rounded to the nearest year, halves to even.
pub fn age_at(date_of_birth: NaiveDate, now: NaiveDateTime) -> i64 {
  let born = date_of_birth.and_time(NaiveTime::MIN);
  let days = (now - born).num_seconds() as f64 / SECONDS_PER_DAY;
  (days / DAYS_PER_YEAR).round_ties_even() as i64
}

/// The local wall-clock time used for age computation.
pub(crate) fn local_now() -> NaiveDateTime { Local::now().naive_local() }

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn sample() -> Person {
    Person {
      id:                  Uuid::new_v4(),
      name:                "Ann".into(),
      email:               "ann@example.com".into(),
      date_of_birth:       Some(date(1990, 3, 5)),
      gender:              Some(Gender::Female),
      country_id:          None,
      address:             Some("1 Main St".into()),
      receive_news_letter: true,
    }
  }

  #[test]
  fn age_rounds_to_nearest_year() {
    let dob = date(2000, 1, 1);
    let at = |y, m, d| date(y, m, d).and_time(NaiveTime::MIN);
    assert_eq!(age_at(dob, at(2010, 1, 1)), 10);
    // Before the half-year mark rounds down.
    assert_eq!(age_at(dob, at(2010, 6, 1)), 10);
    // Past the half-year mark rounds up.
    assert_eq!(age_at(dob, at(2010, 8, 1)), 11);
  }

  #[test]
  fn age_rounds_exact_halves_to_even() {
    let dob = date(2000, 1, 1);
    let born = dob.and_time(NaiveTime::MIN);
    // 10.5 and 11.5 years of 365.25 days, to the second.
    let at = |years: f64| {
      born + chrono::Duration::seconds((years * 365.25 * 86_400.0) as i64)
    };
    assert_eq!(age_at(dob, at(10.5)), 10);
    assert_eq!(age_at(dob, at(11.5)), 12);
  }

  #[test]
  fn age_absent_without_date_of_birth() {
    let mut person = sample();
    person.date_of_birth = None;
    let resp = PersonResponse::from_person(&person, None, local_now());
    assert_eq!(resp.age, None);
    assert_eq!(resp.formatted_date_of_birth(), None);
  }

  #[test]
  fn date_of_birth_formats_with_full_month() {
    let resp = PersonResponse::from_person(&sample(), None, local_now());
    assert_eq!(resp.formatted_date_of_birth().as_deref(), Some("05 March 1990"));
  }

  #[test]
  fn gender_parses_case_insensitively() {
    assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!("OTHER".parse::<Gender>().unwrap(), Gender::Other);
    assert!("unknown".parse::<Gender>().is_err());
    assert_eq!(Gender::Male.to_string(), "Male");
  }

  #[test]
  fn gender_deserialises_in_any_case_and_serialises_canonically() {
    for raw in ["\"female\"", "\"FEMALE\"", "\"Female\""] {
      let gender: Gender = serde_json::from_str(raw).unwrap();
      assert_eq!(gender, Gender::Female);
    }
    assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"Female\"");

    let err = serde_json::from_str::<Gender>("\"robot\"").unwrap_err();
    assert!(err.to_string().contains("unknown gender"), "{err}");
  }

  #[test]
  fn add_request_accepts_lowercase_gender() {
    let req: PersonAddRequest = serde_json::from_str(
      r#"{"name":"Ann","email":"ann@example.com","gender":"other"}"#,
    )
    .unwrap();
    assert_eq!(req.gender, Some(Gender::Other));
  }

  #[test]
  fn update_request_copies_every_mutable_field() {
    let person = sample();
    let resp =
      PersonResponse::from_person(&person, Some("Canada".into()), local_now());
    let req = resp.to_update_request();

    let mut target = person.clone();
    target.name = "someone else".into();
    target.receive_news_letter = false;
    req.apply_to(&mut target);
    assert_eq!(target, person);
  }

  #[test]
  fn response_serialises_camel_case() {
    let resp = PersonResponse::from_person(&sample(), None, local_now());
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["dateOfBirth"], "1990-03-05");
    assert_eq!(json["gender"], "Female");
    assert_eq!(json["receiveNewsLetter"], true);
  }

  #[test]
  fn display_includes_resolved_country() {
    let resp =
      PersonResponse::from_person(&sample(), Some("Canada".into()), local_now());
    let line = resp.to_string();
    assert!(line.starts_with("Ann <ann@example.com>"), "{line}");
    assert!(line.contains("born 05 March 1990"), "{line}");
    assert!(line.contains("Canada"), "{line}");
  }
}
