//! Framework handlers: list, read, create, update, delete, search.

use crate::error::AppError;
use crate::extractors::{JsonBody, SearchQuery};
use crate::model::FrameworkDto;
use crate::response::{created, ok};
use crate::routes::FRAMEWORKS_PATH;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.service.list_all().await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state
        .service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("framework {}", id)))?;
    Ok(ok(row))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FrameworkDto>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.service.create(body).await?;
    let location = format!("{}/{}", FRAMEWORKS_PATH, row.id.unwrap_or_default());
    Ok(created(location, row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<FrameworkDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state
        .service
        .edit(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("framework {}", id)))?;
    Ok(ok(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state
        .service
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("framework {}", id)))?;
    Ok(ok(row))
}

pub async fn search(
    State(state): State<AppState>,
    SearchQuery(filter): SearchQuery,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.service.search(&filter).await?;
    Ok(ok(rows))
}
