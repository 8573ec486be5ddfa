pub mod repository;
pub mod service;

pub use repository::{EnrollmentRepository, SeaOrmEnrollmentRepository};
pub use service::EnrollmentService;
