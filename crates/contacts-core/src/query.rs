//! Search and sort over enriched person records.
//!
//! Field names arrive as free text from query strings. Both field enums parse
//! case-insensitively and also accept the legacy identifiers (`PersonName`,
//! `CountryID`, ...) that older front-ends still send. An unrecognised field
//! leaves the list untouched rather than failing.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::person::{Gender, PersonResponse};

// ─── Search ──────────────────────────────────────────────────────────────────

/// A person field that can be searched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SearchField {
  #[strum(to_string = "name", serialize = "PersonName")]
  Name,
  #[strum(to_string = "email")]
  Email,
  #[strum(to_string = "dateOfBirth")]
  DateOfBirth,
  #[strum(to_string = "gender")]
  Gender,
  #[strum(to_string = "country", serialize = "CountryID")]
  Country,
  #[strum(to_string = "address")]
  Address,
}

impl SearchField {
  /// Human-readable label for a search drop-down.
  pub fn label(self) -> &'static str {
    match self {
      Self::Name => "Person Name",
      Self::Email => "Email",
      Self::DateOfBirth => "Date of Birth",
      Self::Gender => "Gender",
      Self::Country => "Country",
      Self::Address => "Address",
    }
  }

  /// The searchable text of this field on `person`, if it has any.
  fn text(self, person: &PersonResponse) -> Option<String> {
    match self {
      Self::Name => Some(person.name.clone()),
      Self::Email => Some(person.email.clone()),
      Self::DateOfBirth => person.formatted_date_of_birth(),
      Self::Gender => person.gender.map(|g| g.to_string()),
      Self::Country => person.country.clone(),
      Self::Address => person.address.clone(),
    }
  }

  /// `needle` must already be lowercased.
  ///
  /// A person with no value for this field always matches.
  fn matches(self, person: &PersonResponse, needle: &str) -> bool {
    match self.text(person) {
      None => true,
      Some(text) if text.is_empty() => true,
      Some(text) => text.to_lowercase().contains(needle),
    }
  }
}

/// Keep the persons whose `field` contains `search_text`, ignoring case.
///
/// Returns `persons` unchanged when either argument is empty or `field` is
/// not a known [`SearchField`].
pub fn filter(
  persons: Vec<PersonResponse>,
  field: &str,
  search_text: &str,
) -> Vec<PersonResponse> {
  if field.is_empty() || search_text.is_empty() {
    return persons;
  }
  let Ok(field) = field.parse::<SearchField>() else {
    return persons;
  };

  let needle = search_text.to_lowercase();
  persons
    .into_iter()
    .filter(|p| field.matches(p, &needle))
    .collect()
}

// ─── Sort ────────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Display,
  EnumString,
  Serialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

impl SortOrder {
  /// Parse a raw query value, falling back to [`SortOrder::Asc`] when it is
  /// empty or unrecognised.
  pub fn parse_or_default(raw: &str) -> Self { raw.parse().unwrap_or_default() }
}

impl<'de> Deserialize<'de> for SortOrder {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    crate::de::from_str(deserializer, "sort order")
  }
}

/// A person field that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortField {
  #[strum(to_string = "name", serialize = "PersonName")]
  Name,
  #[strum(to_string = "email")]
  Email,
  #[strum(to_string = "dateOfBirth")]
  DateOfBirth,
  #[strum(to_string = "age")]
  Age,
  #[strum(to_string = "gender")]
  Gender,
  #[strum(to_string = "country")]
  Country,
  #[strum(to_string = "address")]
  Address,
  #[strum(to_string = "receiveNewsLetter")]
  ReceiveNewsLetter,
}

impl SortField {
  /// Ascending comparison. Absent values order first.
  fn compare(self, a: &PersonResponse, b: &PersonResponse) -> Ordering {
    match self {
      Self::Name => cmp_ignore_case(&a.name, &b.name),
      Self::Email => cmp_ignore_case(&a.email, &b.email),
      Self::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
      Self::Age => a.age.cmp(&b.age),
      Self::Gender => {
        cmp_opt_ignore_case(a.gender.map(gender_name), b.gender.map(gender_name))
      }
      Self::Country => {
        cmp_opt_ignore_case(a.country.as_deref(), b.country.as_deref())
      }
      Self::Address => {
        cmp_opt_ignore_case(a.address.as_deref(), b.address.as_deref())
      }
      Self::ReceiveNewsLetter => {
        a.receive_news_letter.cmp(&b.receive_news_letter)
      }
    }
  }
}

fn gender_name(gender: Gender) -> &'static str { gender.into() }

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
  a.chars()
    .flat_map(char::to_lowercase)
    .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_opt_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => cmp_ignore_case(a, b),
    (a, b) => a.is_some().cmp(&b.is_some()),
  }
}

/// Order `persons` by `field`. The sort is stable in both directions.
///
/// Returns `persons` unchanged when `field` is empty or not a known
/// [`SortField`].
pub fn sort(
  mut persons: Vec<PersonResponse>,
  field: &str,
  order: SortOrder,
) -> Vec<PersonResponse> {
  if field.is_empty() {
    return persons;
  }
  let Ok(field) = field.parse::<SortField>() else {
    return persons;
  };

  persons.sort_by(|a, b| {
    let ord = field.compare(a, b);
    match order {
      SortOrder::Asc => ord,
      SortOrder::Desc => ord.reverse(),
    }
  });
  persons
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use uuid::Uuid;

  use super::*;

  fn person(name: &str) -> PersonResponse {
    PersonResponse {
      id:                  Uuid::new_v4(),
      name:                name.into(),
      email:               format!("{}@example.com", name.to_lowercase()),
      date_of_birth:       None,
      gender:              None,
      country_id:          None,
      country:             None,
      address:             None,
      receive_news_letter: false,
      age:                 None,
    }
  }

  fn names(list: &[PersonResponse]) -> Vec<&str> {
    list.iter().map(|p| p.name.as_str()).collect()
  }

  #[test]
  fn field_names_parse_with_legacy_aliases() {
    assert_eq!("name".parse::<SearchField>().unwrap(), SearchField::Name);
    assert_eq!("PersonName".parse::<SearchField>().unwrap(), SearchField::Name);
    assert_eq!("CountryID".parse::<SearchField>().unwrap(), SearchField::Country);
    assert_eq!(
      "DATEOFBIRTH".parse::<SearchField>().unwrap(),
      SearchField::DateOfBirth
    );
    assert_eq!(
      "ReceiveNewsLetter".parse::<SortField>().unwrap(),
      SortField::ReceiveNewsLetter
    );
    assert!("age".parse::<SearchField>().is_err());
  }

  #[test]
  fn sort_order_parses_either_case() {
    assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    assert_eq!(SortOrder::default(), SortOrder::Asc);
    for raw in ["\"desc\"", "\"Desc\"", "\"DESC\""] {
      let order: SortOrder = serde_json::from_str(raw).unwrap();
      assert_eq!(order, SortOrder::Desc);
    }
  }

  #[test]
  fn sort_order_falls_back_to_ascending() {
    assert_eq!(SortOrder::parse_or_default("Desc"), SortOrder::Desc);
    assert_eq!(SortOrder::parse_or_default(""), SortOrder::Asc);
    assert_eq!(SortOrder::parse_or_default("sideways"), SortOrder::Asc);
  }

  #[test]
  fn filter_is_case_insensitive_substring() {
    let list = vec![person("Ann"), person("Bob"), person("JOANNA")];
    let out = filter(list, "name", "an");
    assert_eq!(names(&out), ["Ann", "JOANNA"]);
  }

  #[test]
  fn filter_passes_through_on_empty_or_unknown_input() {
    let list = vec![person("Ann"), person("Bob")];
    assert_eq!(filter(list.clone(), "", "an").len(), 2);
    assert_eq!(filter(list.clone(), "name", "").len(), 2);
    assert_eq!(filter(list, "shoeSize", "an").len(), 2);
  }

  #[test]
  fn filter_keeps_persons_without_a_value() {
    let mut with = person("Ann");
    with.address = Some("12 Elm Road".into());
    let mut other = person("Bob");
    other.address = Some("4 Oak Lane".into());
    let without = person("Cy");
    let mut empty = person("Di");
    empty.address = Some(String::new());

    let out = filter(vec![with, other, without, empty], "address", "ELM");
    assert_eq!(names(&out), ["Ann", "Cy", "Di"]);
  }

  #[test]
  fn filter_by_email_matches_any_part_of_the_address() {
    let ann = person("Ann");
    let mut bob = person("Bob");
    bob.email = "bob@Contoso.org".into();

    let out = filter(vec![ann.clone(), bob.clone()], "email", "CONTOSO");
    assert_eq!(names(&out), ["Bob"]);
    let out = filter(vec![ann, bob], "email", "ann@");
    assert_eq!(names(&out), ["Ann"]);
  }

  #[test]
  fn filter_by_date_of_birth_uses_month_name() {
    let mut march = person("Ann");
    march.date_of_birth = NaiveDate::from_ymd_opt(1990, 3, 5);
    let mut june = person("Bob");
    june.date_of_birth = NaiveDate::from_ymd_opt(1985, 6, 20);

    let out = filter(vec![march, june], "dateOfBirth", "march");
    assert_eq!(names(&out), ["Ann"]);
  }

  #[test]
  fn filter_by_gender_matches_display_name() {
    let mut f = person("Ann");
    f.gender = Some(Gender::Female);
    let mut m = person("Bob");
    m.gender = Some(Gender::Male);

    // "male" is a substring of "Female".
    let out = filter(vec![f.clone(), m.clone()], "gender", "male");
    assert_eq!(names(&out), ["Ann", "Bob"]);
    let out = filter(vec![f, m], "gender", "fem");
    assert_eq!(names(&out), ["Ann"]);
  }

  #[test]
  fn sort_by_name_ignores_case() {
    let list = vec![person("bob"), person("Ann"), person("carl")];
    let asc = sort(list.clone(), "name", SortOrder::Asc);
    assert_eq!(names(&asc), ["Ann", "bob", "carl"]);
    let desc = sort(list, "name", SortOrder::Desc);
    assert_eq!(names(&desc), ["carl", "bob", "Ann"]);
  }

  #[test]
  fn sort_by_email_ignores_case() {
    let mut a = person("A");
    a.email = "zed@example.com".into();
    let mut b = person("B");
    b.email = "Amy@example.com".into();
    let mut c = person("C");
    c.email = "bea@example.com".into();
    let list = vec![a, b, c];

    assert_eq!(names(&sort(list.clone(), "email", SortOrder::Asc)), ["B", "C", "A"]);
    assert_eq!(names(&sort(list, "email", SortOrder::Desc)), ["A", "C", "B"]);
  }

  #[test]
  fn sort_by_gender_uses_display_name() {
    let mut m = person("M");
    m.gender = Some(Gender::Male);
    let mut f = person("F");
    f.gender = Some(Gender::Female);
    let mut o = person("O");
    o.gender = Some(Gender::Other);
    let n = person("N");
    let list = vec![m, o, n, f];

    // Female < Male < Other, absent first.
    assert_eq!(
      names(&sort(list.clone(), "gender", SortOrder::Asc)),
      ["N", "F", "M", "O"]
    );
    assert_eq!(
      names(&sort(list, "gender", SortOrder::Desc)),
      ["O", "M", "F", "N"]
    );
  }

  #[test]
  fn sort_by_address_ignores_case_with_absent_first() {
    let mut a = person("A");
    a.address = Some("elm street".into());
    let b = person("B");
    let mut c = person("C");
    c.address = Some("Birch Road".into());
    let list = vec![a, b, c];

    assert_eq!(
      names(&sort(list.clone(), "address", SortOrder::Asc)),
      ["B", "C", "A"]
    );
    assert_eq!(
      names(&sort(list, "address", SortOrder::Desc)),
      ["A", "C", "B"]
    );
  }

  #[test]
  fn sort_is_stable_in_both_directions() {
    let mut a = person("A");
    a.receive_news_letter = true;
    let b = person("B");
    let mut c = person("C");
    c.receive_news_letter = true;
    let d = person("D");
    let list = vec![a, b, c, d];

    let asc = sort(list.clone(), "receiveNewsLetter", SortOrder::Asc);
    assert_eq!(names(&asc), ["B", "D", "A", "C"]);
    let desc = sort(list, "receiveNewsLetter", SortOrder::Desc);
    assert_eq!(names(&desc), ["A", "C", "B", "D"]);
  }

  #[test]
  fn sort_puts_absent_values_first_when_ascending() {
    let mut a = person("A");
    a.country = Some("canada".into());
    let b = person("B");
    let mut c = person("C");
    c.country = Some("Brazil".into());

    let asc = sort(vec![a.clone(), b.clone(), c.clone()], "country", SortOrder::Asc);
    assert_eq!(names(&asc), ["B", "C", "A"]);
    let desc = sort(vec![a, b, c], "country", SortOrder::Desc);
    assert_eq!(names(&desc), ["A", "C", "B"]);
  }

  #[test]
  fn sort_by_age_and_date_of_birth() {
    let mut young = person("Young");
    young.date_of_birth = NaiveDate::from_ymd_opt(2001, 1, 1);
    young.age = Some(25);
    let mut old = person("Old");
    old.date_of_birth = NaiveDate::from_ymd_opt(1950, 1, 1);
    old.age = Some(76);

    let list = vec![young, old];
    assert_eq!(names(&sort(list.clone(), "age", SortOrder::Asc)), ["Young", "Old"]);
    assert_eq!(
      names(&sort(list, "dateOfBirth", SortOrder::Asc)),
      ["Old", "Young"]
    );
  }

  #[test]
  fn sort_passes_through_on_empty_or_unknown_field() {
    let list = vec![person("bob"), person("Ann")];
    assert_eq!(names(&sort(list.clone(), "", SortOrder::Desc)), ["bob", "Ann"]);
    assert_eq!(names(&sort(list, "height", SortOrder::Asc)), ["bob", "Ann"]);
  }
}
