//! sea-orm entities for the student-management schema, plus the per-entity
//! create / read / update / delete / count / exists operations.

pub mod errors;
pub mod db;
pub mod student;
pub mod department;
pub mod course;
pub mod enrollment;

#[cfg(test)]
mod tests;
