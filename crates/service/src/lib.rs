//! Service layer: one service per entity, each a thin wrapper over its
//! repository trait.
//! - Separates HTTP handling from data access.
//! - Reuses entity definitions and inputs from the `models` crate.
//! - Turns unresolved identifiers into `ServiceError::NotFound`.

pub mod errors;
pub mod student;
pub mod department;
pub mod course;
pub mod enrollment;
#[cfg(test)]
pub mod test_support;
