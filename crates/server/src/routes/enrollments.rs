use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::enrollment::{EnrollmentDetails, EnrollmentInput};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Mounted under both `/Enrollment` and `/enrollments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllEnrollment", get(list))
        .route("/getEnrollment/:id", get(get_one))
        .route("/createEnrollment", post(create))
        .route("/updateEnrollment", put(update))
        .route("/deleteEnrollment/:id", delete(remove))
}

#[utoipa::path(get, path = "/enrollments/getAllEnrollment", tag = "enrollments",
    responses((status = 200, description = "OK", body = [crate::openapi::EnrollmentDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EnrollmentDetails>>, JsonApiError> {
    Ok(Json(state.enrollments.list().await?))
}

#[utoipa::path(get, path = "/enrollments/getEnrollment/{id}", tag = "enrollments",
    params(("id" = i32, Path, description = "Enrollment id")),
    responses((status = 200, description = "OK", body = crate::openapi::EnrollmentDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<EnrollmentDetails>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.enrollments.get(id).await?))
}

#[utoipa::path(post, path = "/enrollments/createEnrollment", tag = "enrollments",
    request_body = crate::openapi::EnrollmentDoc,
    responses((status = 200, description = "OK", body = crate::openapi::EnrollmentDoc), (status = 400, description = "Missing student or course"), (status = 404, description = "Unknown student or course")))]
pub async fn create(State(state): State<AppState>, input: Result<Json<EnrollmentInput>, JsonRejection>) -> Result<Json<EnrollmentDetails>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.enrollments.create(input).await?))
}

#[utoipa::path(put, path = "/enrollments/updateEnrollment", tag = "enrollments",
    request_body = crate::openapi::EnrollmentDoc,
    responses((status = 200, description = "OK", body = crate::openapi::EnrollmentDoc), (status = 400, description = "Missing idEnrollment"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, input: Result<Json<EnrollmentInput>, JsonRejection>) -> Result<Json<EnrollmentDetails>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.enrollments.update(input).await?))
}

#[utoipa::path(delete, path = "/enrollments/deleteEnrollment/{id}", tag = "enrollments",
    params(("id" = i32, Path, description = "Enrollment id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.enrollments.delete(id).await?;
    Ok(StatusCode::OK)
}
