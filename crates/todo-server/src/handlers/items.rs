//! Item routes.

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use todo_core::entities::Item;
use todo_core::responses::{CreateResponse, DeleteResponse, NOT_FOUND_MESSAGE, UpdateResponse};
use todo_db::StoreError;

use crate::error::AppError;
use crate::form::{CreateForm, UpdateForm};
use crate::state::AppState;

/// Split a store error into a caller-facing rejection or a server failure.
fn rejection(error: StoreError) -> Result<(StatusCode, String), AppError> {
    match error {
        StoreError::NotFound { .. } => Ok((StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())),
        StoreError::InvalidId(e) => Ok((StatusCode::BAD_REQUEST, e.to_string())),
        other => Err(other.into()),
    }
}

/// `POST /todo`
pub async fn create_item(
    State(state): State<AppState>,
    Query(query): Query<CreateForm>,
    body: Option<Form<CreateForm>>,
) -> Result<Json<CreateResponse>, AppError> {
    let form = match body {
        Some(Form(body)) => body.or(query),
        None => query,
    };
    let id = state.store.create(form.description()).await?;
    Ok(Json(CreateResponse { id }))
}

/// `POST /todo/:id`
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<UpdateForm>,
    body: Option<Form<UpdateForm>>,
) -> Result<(StatusCode, Json<UpdateResponse>), AppError> {
    let form = match body {
        Some(Form(body)) => body.or(query),
        None => query,
    };
    match state.store.set_completion(&id, form.completed()).await {
        Ok(()) => Ok((StatusCode::OK, Json(UpdateResponse::success()))),
        Err(error) => {
            let (status, message) = rejection(error)?;
            Ok((status, Json(UpdateResponse::failure(message))))
        }
    }
}

/// `DELETE /todo/:id`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), AppError> {
    match state.store.delete(&id).await {
        Ok(()) => Ok((StatusCode::OK, Json(DeleteResponse::success()))),
        Err(error) => {
            let (status, message) = rejection(error)?;
            Ok((status, Json(DeleteResponse::failure(message))))
        }
    }
}

/// `GET /todo-completed`
pub async fn completed_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    Ok(Json(state.store.list(true).await?))
}

/// `GET /todo-incomplete`
pub async fn incomplete_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<Item>>, AppError> {
    Ok(Json(state.store.list(false).await?))
}
