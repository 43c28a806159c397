//! Demo records for a freshly started, empty service.
//!
//! Records go through the public add operations, so they are validated and
//! assigned ids exactly like client-submitted data.

use chrono::NaiveDate;

use crate::{
  Result,
  country::CountryAddRequest,
  person::{Gender, PersonAddRequest},
  store::{CountryStore, PersonStore},
};

const COUNTRIES: &[&str] = &["USA", "Canada", "United Kingdom", "India", "Australia"];

struct DemoPerson {
  name:       &'static str,
  email:      &'static str,
  born:       (i32, u32, u32),
  gender:     Gender,
  country:    &'static str,
  address:    &'static str,
  newsletter: bool,
}

const PERSONS: &[DemoPerson] = &[
  DemoPerson {
    name:       "Marguerite Holloway",
    email:      "mholloway@example.com",
    born:       (1987, 4, 12),
    gender:     Gender::Female,
    country:    "Canada",
    address:    "48 Rideau Street, Ottawa",
    newsletter: true,
  },
  DemoPerson {
    name:       "Desmond Achebe",
    email:      "d.achebe@example.org",
    born:       (1979, 11, 3),
    gender:     Gender::Male,
    country:    "United Kingdom",
    address:    "7 Albion Row, Leeds",
    newsletter: false,
  },
  DemoPerson {
    name:       "Priya Raghunathan",
    email:      "priya.r@example.in",
    born:       (1994, 2, 27),
    gender:     Gender::Female,
    country:    "India",
    address:    "221 MG Road, Bengaluru",
    newsletter: true,
  },
  DemoPerson {
    name:       "Tomas Whitcombe",
    email:      "tomas@example.com.au",
    born:       (2001, 8, 19),
    gender:     Gender::Male,
    country:    "Australia",
    address:    "15 Harbour Lane, Hobart",
    newsletter: false,
  },
  DemoPerson {
    name:       "Jordan Ellery",
    email:      "jellery@example.com",
    born:       (1968, 6, 30),
    gender:     Gender::Other,
    country:    "USA",
    address:    "900 Pine Avenue, Portland",
    newsletter: true,
  },
];

/// Load the demo countries and persons. Returns how many persons were added.
///
/// Fails with [`Error::Duplicate`](crate::Error::Duplicate) if any demo
/// country name is already taken.
pub fn seed_demo_data(
  countries: &CountryStore,
  persons: &PersonStore,
) -> Result<usize> {
  let added = COUNTRIES
    .iter()
    .map(|name| countries.add_country(Some(CountryAddRequest::new(*name))))
    .collect::<Result<Vec<_>>>()?;

  for demo in PERSONS {
    let country_id = added
      .iter()
      .find(|c| c.name == demo.country)
      .map(|c| c.id);
    let (y, m, d) = demo.born;
    persons.add_person(Some(PersonAddRequest {
      name: Some(demo.name.to_owned()),
      email: Some(demo.email.to_owned()),
      date_of_birth: NaiveDate::from_ymd_opt(y, m, d),
      gender: Some(demo.gender),
      country_id,
      address: Some(demo.address.to_owned()),
      receive_news_letter: demo.newsletter,
    }))?;
  }

  Ok(PERSONS.len())
}
