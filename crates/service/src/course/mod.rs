pub mod repository;
pub mod service;

pub use repository::{CourseRepository, SeaOrmCourseRepository};
pub use service::CourseService;
