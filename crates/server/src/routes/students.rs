use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::student::{self, StudentInput};

use crate::errors::JsonApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllStudents", get(list))
        .route("/getStudent/:id", get(get_one))
        .route("/createStudent", post(create))
        .route("/updateStudent", put(update))
        .route("/deleteStudent/:id", delete(remove))
}

#[utoipa::path(get, path = "/students/getAllStudents", tag = "students",
    responses((status = 200, description = "All students", body = [crate::openapi::StudentDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<student::Model>>, JsonApiError> {
    Ok(Json(state.students.list().await?))
}

#[utoipa::path(get, path = "/students/getStudent/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses((status = 200, description = "OK", body = crate::openapi::StudentDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<student::Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.students.get(id).await?))
}

#[utoipa::path(post, path = "/students/createStudent", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses((status = 200, description = "OK", body = crate::openapi::StudentDoc)))]
pub async fn create(State(state): State<AppState>, input: Result<Json<StudentInput>, JsonRejection>) -> Result<Json<student::Model>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.students.create(input).await?))
}

#[utoipa::path(put, path = "/students/updateStudent", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses((status = 200, description = "OK", body = crate::openapi::StudentDoc), (status = 400, description = "Missing idStudent"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, input: Result<Json<StudentInput>, JsonRejection>) -> Result<Json<student::Model>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.students.update(input).await?))
}

#[utoipa::path(delete, path = "/students/deleteStudent/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"), (status = 409, description = "Still enrolled")))]
pub async fn remove(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.students.delete(id).await?;
    Ok(StatusCode::OK)
}
