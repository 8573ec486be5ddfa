use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::course::{self, CourseInput};

use crate::errors::JsonApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllCourses", get(list))
        .route("/getCourse/:id", get(get_one))
        .route("/createCourse", post(create))
        .route("/updateCourse", put(update))
        .route("/deleteCourse/:id", delete(remove))
}

#[utoipa::path(get, path = "/courses/getAllCourses", tag = "courses",
    responses((status = 200, description = "OK", body = [crate::openapi::CourseDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<course::Model>>, JsonApiError> {
    Ok(Json(state.courses.list().await?))
}

#[utoipa::path(get, path = "/courses/getCourse/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course id")),
    responses((status = 200, description = "OK", body = crate::openapi::CourseDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<course::Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.courses.get(id).await?))
}

#[utoipa::path(post, path = "/courses/createCourse", tag = "courses",
    request_body = crate::openapi::CourseDoc,
    responses((status = 200, description = "OK", body = crate::openapi::CourseDoc)))]
pub async fn create(State(state): State<AppState>, input: Result<Json<CourseInput>, JsonRejection>) -> Result<Json<course::Model>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.courses.create(input).await?))
}

#[utoipa::path(put, path = "/courses/updateCourse", tag = "courses",
    request_body = crate::openapi::CourseDoc,
    responses((status = 200, description = "OK", body = crate::openapi::CourseDoc), (status = 400, description = "Missing idCourse"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, input: Result<Json<CourseInput>, JsonRejection>) -> Result<Json<course::Model>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.courses.update(input).await?))
}

#[utoipa::path(delete, path = "/courses/deleteCourse/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"), (status = 409, description = "Still enrolled")))]
pub async fn remove(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.courses.delete(id).await?;
    Ok(StatusCode::OK)
}
