//! Core types and in-memory stores for the contacts service.
//!
//! This crate is deliberately free of HTTP dependencies. The API and server
//! crates depend on it; it depends on nothing of theirs.

pub mod country;
mod de;
pub mod error;
pub mod person;
pub mod query;
pub mod seed;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use store::{CountryStore, PersonStore};
