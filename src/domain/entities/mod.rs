//! Domain entities.

mod mapping;

pub use mapping::{NewMapping, UrlMapping};
