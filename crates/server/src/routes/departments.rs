use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use models::department::{self, DepartmentInput};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Mounted under both `/Depatment` and `/departments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllDepartment", get(list))
        .route("/getDepartment/:id", get(get_one))
        .route("/createDepartment", post(create))
        .route("/updateDepartment", put(update))
        .route("/deleteDepartment/:id", delete(remove))
}

#[utoipa::path(get, path = "/departments/getAllDepartment", tag = "departments",
    responses((status = 200, description = "OK", body = [crate::openapi::DepartmentDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<department::Model>>, JsonApiError> {
    Ok(Json(state.departments.list().await?))
}

#[utoipa::path(get, path = "/departments/getDepartment/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department id")),
    responses((status = 200, description = "OK", body = crate::openapi::DepartmentDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<department::Model>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.departments.get(id).await?))
}

#[utoipa::path(post, path = "/departments/createDepartment", tag = "departments",
    request_body = crate::openapi::DepartmentDoc,
    responses((status = 200, description = "OK", body = crate::openapi::DepartmentDoc)))]
pub async fn create(State(state): State<AppState>, input: Result<Json<DepartmentInput>, JsonRejection>) -> Result<Json<department::Model>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.departments.create(input).await?))
}

#[utoipa::path(put, path = "/departments/updateDepartment", tag = "departments",
    request_body = crate::openapi::DepartmentDoc,
    responses((status = 200, description = "OK", body = crate::openapi::DepartmentDoc), (status = 400, description = "Missing idDepartment"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, input: Result<Json<DepartmentInput>, JsonRejection>) -> Result<Json<department::Model>, JsonApiError> {
    let Json(input) = input?;
    Ok(Json(state.departments.update(input).await?))
}

#[utoipa::path(delete, path = "/departments/deleteDepartment/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.departments.delete(id).await?;
    Ok(StatusCode::OK)
}
