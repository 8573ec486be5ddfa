use std::net::SocketAddr;

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(&body).send().await?)
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.put(self.url(path)).json(&body).send().await?)
    }

    async fn get(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    async fn delete(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}

/// Each test gets its own in-memory database and ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app = routes::build_router(AppState::new(db), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

async fn create_student(app: &TestApp) -> anyhow::Result<i64> {
    let res = app
        .post("/students/createStudent", json!({"firstName": "John", "lastName": "Doe", "email": "john.doe@example.com"}))
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    body["idStudent"].as_i64().ok_or_else(|| anyhow::anyhow!("missing idStudent in {body}"))
}

async fn create_course(app: &TestApp) -> anyhow::Result<i64> {
    let res = app
        .post("/courses/createCourse", json!({"name": "DevSecOps", "code": "DSO-101", "credit": 6}))
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    body["idCourse"].as_i64().ok_or_else(|| anyhow::anyhow!("missing idCourse in {body}"))
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/health").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/api-docs/openapi.json").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["paths"]["/students/getAllStudents"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_student_crud() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_student(&app).await?;

    let res = app.get(&format!("/students/getStudent/{id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["email"], "john.doe@example.com");

    let res = app
        .put("/students/updateStudent", json!({"idStudent": id, "firstName": "Jane", "lastName": "Smith"}))
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["firstName"], "Jane");
    assert_eq!(body["email"], "john.doe@example.com");

    let res = app.get("/students/getAllStudents").await?;
    let all: Vec<Value> = res.json().await?;
    assert_eq!(all.len(), 1);

    let res = app.delete(&format!("/students/deleteStudent/{id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());

    let res = app.get(&format!("/students/getStudent/{id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_ids_are_404() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.get("/students/getStudent/999").await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["detail"], "Student not found with id: 999");

    let res = app.put("/courses/updateCourse", json!({"idCourse": 999, "name": "Ghost"})).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = app.delete("/Depatment/deleteDepartment/999").await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = app.get("/Enrollment/getEnrollment/999").await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_update_without_id_is_400() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.put("/students/updateStudent", json!({"firstName": "Nobody"})).await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Bad Request");
    Ok(())
}

#[tokio::test]
async fn e2e_department_paths_share_storage() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .post("/Depatment/createDepartment", json!({"name": "Computer Science", "location": "Building A", "phone": "+216 71 000 000", "head": "Dr. Smith"}))
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["idDepartment"].as_i64().ok_or_else(|| anyhow::anyhow!("missing idDepartment"))?;

    let res = app.get(&format!("/departments/getDepartment/{id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["head"], "Dr. Smith");

    let res = app.put("/departments/updateDepartment", json!({"idDepartment": id, "location": "Building B"})).await?;
    let body: Value = res.json().await?;
    assert_eq!(body["location"], "Building B");
    assert_eq!(body["name"], "Computer Science");
    Ok(())
}

#[tokio::test]
async fn e2e_enrollment_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let student_id = create_student(&app).await?;
    let course_id = create_course(&app).await?;

    let res = app
        .post(
            "/Enrollment/createEnrollment",
            json!({
                "enrollmentDate": "2024-09-01",
                "grade": "A",
                "status": "ACTIVE",
                "student": {"idStudent": student_id},
                "course": {"idCourse": course_id}
            }),
        )
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["idEnrollment"].as_i64().ok_or_else(|| anyhow::anyhow!("missing idEnrollment"))?;
    assert_eq!(created["student"]["firstName"], "John");
    assert_eq!(created["course"]["code"], "DSO-101");
    assert_eq!(created["enrollmentDate"], "2024-09-01");

    // 被选课记录引用的学生不可删除
    let res = app.delete(&format!("/students/deleteStudent/{student_id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let res = app.get(&format!("/students/getStudent/{student_id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = app
        .put("/enrollments/updateEnrollment", json!({"idEnrollment": id, "grade": "B+", "status": "COMPLETED"}))
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["grade"], "B+");
    assert_eq!(body["status"], "COMPLETED");
    assert_eq!(body["student"]["idStudent"], student_id);

    let res = app.get("/enrollments/getAllEnrollment").await?;
    let all: Vec<Value> = res.json().await?;
    assert_eq!(all.len(), 1);

    let res = app.delete(&format!("/Enrollment/deleteEnrollment/{id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = app.delete(&format!("/students/deleteStudent/{student_id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_enrollment_with_unknown_course_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let student_id = create_student(&app).await?;
    let res = app
        .post(
            "/enrollments/createEnrollment",
            json!({"student": {"idStudent": student_id}, "course": {"idCourse": 999}}),
        )
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], "Course not found with id: 999");
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_bodies_are_rejected_as_json() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.post("/students/createStudent", json!({"firstName": 5})).await?;
    assert!(res.status().is_client_error(), "got {}", res.status());
    let body: Value = res.json().await?;
    assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));

    let res = app
        .client
        .post(app.url("/students/createStudent"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Bad Request");

    let res = app
        .post("/enrollments/createEnrollment", json!({"enrollmentDate": "yesterday"}))
        .await?;
    assert!(res.status().is_client_error(), "got {}", res.status());

    // Nothing was stored
    let all: Vec<Value> = app.get("/students/getAllStudents").await?.json().await?;
    assert!(all.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_bad_path_ids_are_400_with_json_body() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.get("/students/getStudent/99999999999").await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Bad Request");

    let res = app.delete("/courses/deleteCourse/abc").await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn e2e_referenced_course_delete_is_409() -> anyhow::Result<()> {
    let app = start_server().await?;
    let student_id = create_student(&app).await?;
    let course_id = create_course(&app).await?;
    let res = app
        .post(
            "/enrollments/createEnrollment",
            json!({"student": {"idStudent": student_id}, "course": {"idCourse": course_id}}),
        )
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = app.delete(&format!("/courses/deleteCourse/{course_id}")).await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Conflict");
    Ok(())
}
