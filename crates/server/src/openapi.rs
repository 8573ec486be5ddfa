use chrono::NaiveDate;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDoc {
    pub id_student: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDoc {
    pub id_department: Option<i32>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDoc {
    pub id_course: Option<i32>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub credit: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDoc { Active, Completed }

/// Requests only need `idStudent` / `idCourse` inside the nested objects.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDoc {
    pub id_enrollment: Option<i32>,
    pub enrollment_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub status: Option<StatusDoc>,
    pub student: Option<StudentDoc>,
    pub course: Option<CourseDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::get_one,
        crate::routes::students::create,
        crate::routes::students::update,
        crate::routes::students::remove,
        crate::routes::departments::list,
        crate::routes::departments::get_one,
        crate::routes::departments::create,
        crate::routes::departments::update,
        crate::routes::departments::remove,
        crate::routes::courses::list,
        crate::routes::courses::get_one,
        crate::routes::courses::create,
        crate::routes::courses::update,
        crate::routes::courses::remove,
        crate::routes::enrollments::list,
        crate::routes::enrollments::get_one,
        crate::routes::enrollments::create,
        crate::routes::enrollments::update,
        crate::routes::enrollments::remove,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            DepartmentDoc,
            CourseDoc,
            StatusDoc,
            EnrollmentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students"),
        (name = "departments"),
        (name = "courses"),
        (name = "enrollments")
    )
)]
pub struct ApiDoc;
