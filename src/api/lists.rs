//! Custom list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        custom_list::{CreateCustomList, CustomList},
        import_report::ImportReport,
    },
    services::normalize::Row,
};

/// Import request: rows as parsed by the caller's CSV reader
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportRequest {
    /// One mapping of column name to raw text per spreadsheet row
    pub rows: Vec<Row>,
}

/// List all custom lists
#[utoipa::path(
    get,
    path = "/lists",
    tag = "lists",
    responses(
        (status = 200, description = "All custom lists", body = Vec<CustomList>)
    )
)]
pub async fn list_lists(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<CustomList>>> {
    let lists = state.services.lists.list().await?;
    Ok(Json(lists))
}

/// Get a custom list by ID
#[utoipa::path(
    get,
    path = "/lists/{id}",
    tag = "lists",
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "The list", body = CustomList),
        (status = 404, description = "List not found")
    )
)]
pub async fn get_list(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CustomList>> {
    let list = state.services.lists.get_by_id(id).await?;
    Ok(Json(list))
}

/// Create a custom list
#[utoipa::path(
    post,
    path = "/lists",
    tag = "lists",
    request_body = CreateCustomList,
    responses(
        (status = 201, description = "List created", body = CustomList),
        (status = 400, description = "Invalid name"),
        (status = 409, description = "A list with that name already exists")
    )
)]
pub async fn create_list(
    State(state): State<crate::AppState>,
    Json(body): Json<CreateCustomList>,
) -> AppResult<(StatusCode, Json<CustomList>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let list = state.services.lists.create(&body.name).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Import rows into a custom list
#[utoipa::path(
    post,
    path = "/lists/{id}/import",
    tag = "lists",
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Per-row import report", body = ImportReport),
        (status = 404, description = "List not found"),
        (status = 502, description = "Metadata lookup service unreachable")
    )
)]
pub async fn import_rows(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ImportRequest>,
) -> AppResult<Json<ImportReport>> {
    let report = state.services.lists.import_rows(id, &body.rows).await?;
    Ok(Json(report))
}
