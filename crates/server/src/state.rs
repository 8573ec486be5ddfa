use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    course::{CourseService, SeaOrmCourseRepository},
    department::{DepartmentService, SeaOrmDepartmentRepository},
    enrollment::{EnrollmentService, SeaOrmEnrollmentRepository},
    student::{SeaOrmStudentRepository, StudentService},
};

/// Router state: one service per resource, all sharing the same pool.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<StudentService<SeaOrmStudentRepository>>,
    pub departments: Arc<DepartmentService<SeaOrmDepartmentRepository>>,
    pub courses: Arc<CourseService<SeaOrmCourseRepository>>,
    pub enrollments: Arc<EnrollmentService<SeaOrmEnrollmentRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            students: Arc::new(StudentService::new(Arc::new(SeaOrmStudentRepository { db: db.clone() }))),
            departments: Arc::new(DepartmentService::new(Arc::new(SeaOrmDepartmentRepository { db: db.clone() }))),
            courses: Arc::new(CourseService::new(Arc::new(SeaOrmCourseRepository { db: db.clone() }))),
            enrollments: Arc::new(EnrollmentService::new(Arc::new(SeaOrmEnrollmentRepository { db }))),
        }
    }
}
