//! Teacher Routes - Profile Management
//!
//! HTTP handlers that delegate to TeacherService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use faculty::TeacherId;

use crate::error::ApiError;
use crate::models::{
    ErrorResponse, JsonObject, MessageResponse, TeacherRequest, TeacherResponse,
};
use crate::AppState;

/// Parse the `{id}` path segment
fn parse_id(raw: &str) -> Result<TeacherId, ApiError> {
    raw.trim()
        .parse::<TeacherId>()
        .map_err(|_| ApiError::InvalidIdentifier(raw.to_string()))
}

/// List all Teachers
#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "List of all Teachers", body = Vec<TeacherResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherResponse>>, ApiError> {
    let teachers = state.teacher_service.list_all().await?;
    Ok(Json(teachers.into_iter().map(TeacherResponse::from).collect()))
}

/// Create new Teacher
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = TeacherRequest,
    responses(
        (status = 201, description = "Teacher created", body = TeacherResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject<TeacherRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let Json(JsonObject(payload)) = payload?;
    let teacher = state.teacher_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(teacher.into())))
}

/// Get Teacher by ID
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher found", body = TeacherResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let teacher = state.teacher_service.get_by_id(id).await?;
    Ok(Json(teacher.into()))
}

/// Replace Teacher
///
/// Every field except `id` is overwritten by the body.
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = TeacherRequest,
    responses(
        (status = 200, description = "Teacher replaced", body = TeacherResponse),
        (status = 400, description = "Invalid id or malformed body", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<JsonObject<TeacherRequest>>, JsonRejection>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    // Existence is reported before body problems
    state.teacher_service.get_by_id(id).await?;
    let Json(JsonObject(payload)) = payload?;
    let teacher = state.teacher_service.replace(id, payload.into()).await?;
    Ok(Json(teacher.into()))
}

/// Delete Teacher
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teacher"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    state.teacher_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Teacher deleted")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/api/teachers/:id",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}
