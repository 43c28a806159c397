//! Declarative field validation for request DTOs.
//!
//! Each request type lists its rules in declaration order; the first rule
//! that fails produces [`Error::Validation`] carrying that rule's message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
  Error, Result,
  country::CountryAddRequest,
  person::{PersonAddRequest, PersonUpdateRequest},
};

/// The WHATWG HTML "valid e-mail address" grammar.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
  )
  .expect("valid email regex")
});

pub const COUNTRY_NAME_BLANK: &str = "Country name cannot be blank.";
pub const ID_BLANK: &str = "ID cannot be blank.";
pub const PERSON_NAME_BLANK: &str = "Person name cannot be blank.";
pub const EMAIL_BLANK: &str = "Email cannot be blank.";
pub const EMAIL_INVALID: &str =
  "Email address should be a valid email address.";

/// A request type with declared per-field rules.
pub trait Validate {
  /// Check every rule in order and report the first violation.
  fn validate(&self) -> Result<()>;
}

/// `true` when `value` is absent, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
  value.is_none_or(|v| v.trim().is_empty())
}

pub fn is_valid_email(value: &str) -> bool { EMAIL_RE.is_match(value) }

fn required(value: Option<&str>, message: &str) -> Result<()> {
  if is_blank(value) {
    return Err(Error::Validation(message.to_owned()));
  }
  Ok(())
}

fn email(value: Option<&str>) -> Result<()> {
  required(value, EMAIL_BLANK)?;
  match value {
    Some(v) if is_valid_email(v) => Ok(()),
    _ => Err(Error::Validation(EMAIL_INVALID.to_owned())),
  }
}

impl Validate for CountryAddRequest {
  fn validate(&self) -> Result<()> {
    required(self.name.as_deref(), COUNTRY_NAME_BLANK)
  }
}

impl Validate for PersonAddRequest {
  fn validate(&self) -> Result<()> {
    required(self.name.as_deref(), PERSON_NAME_BLANK)?;
    email(self.email.as_deref())
  }
}

impl Validate for PersonUpdateRequest {
  fn validate(&self) -> Result<()> {
    if self.id.is_nil() {
      return Err(Error::Validation(ID_BLANK.to_owned()));
    }
    required(self.name.as_deref(), PERSON_NAME_BLANK)?;
    email(self.email.as_deref())
  }
}
