//! Domain layer: the mapping entity and the store contract.

pub mod entities;
pub mod repositories;
