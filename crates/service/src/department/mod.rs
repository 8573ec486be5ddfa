pub mod repository;
pub mod service;

pub use repository::{DepartmentRepository, SeaOrmDepartmentRepository};
pub use service::DepartmentService;
