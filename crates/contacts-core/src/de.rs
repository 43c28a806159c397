//! Deserialisation of enums through their case-insensitive `FromStr`.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

/// Read a string and parse it with `T`'s `FromStr`.
///
/// `what` names the value in the error message, e.g. `unknown gender "x"`.
pub(crate) fn from_str<'de, D, T>(
  deserializer: D,
  what: &'static str,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: FromStr,
{
  let raw = String::deserialize(deserializer)?;
  raw
    .parse()
    .map_err(|_| de::Error::custom(format!("unknown {what} {raw:?}")))
}
