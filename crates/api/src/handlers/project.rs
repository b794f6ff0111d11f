//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::project::{CreateProject, Project, UpdateProject, PROJECT_ENTITY};
use catalog_core::types::{parse_project_id, ProjectId};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::query::CategoryFilterParams;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = CreateProject::from_input(into_object(body)?)?;
    let project = state.store.create(input).await?;
    tracing::info!(id = project.id, "Created project");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CategoryFilterParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list(params.category.as_deref()).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = resolve_id(&raw_id)?;
    let project = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| not_found(&raw_id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// The body is validated before the lookup, so an invalid body is a 400
/// even when the id is unknown.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Project>> {
    let input = UpdateProject::from_input(into_object(body)?)?;
    let id = resolve_id(&raw_id)?;
    let project = state
        .store
        .update(id, input)
        .await?
        .ok_or_else(|| not_found(&raw_id))?;
    tracing::info!(id, "Updated project");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = resolve_id(&raw_id)?;
    if state.store.delete(id).await? {
        tracing::info!(id, "Deleted project");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&raw_id))
    }
}

/// Parse a path id. A malformed id cannot match any project, so it is
/// reported as not found rather than as a bad request.
fn resolve_id(raw_id: &str) -> AppResult<ProjectId> {
    parse_project_id(raw_id).ok_or_else(|| not_found(raw_id))
}

fn not_found(raw_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PROJECT_ENTITY,
        id: raw_id.to_string(),
    })
}

fn into_object(body: Value) -> AppResult<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}
