//! User CRUD handlers.

use crate::config::DeleteResponse;
use crate::error::{AppError, ErrorBody, StoreError, USER_NOT_FOUND};
use crate::extractors::JsonBody;
use crate::model::{NewUser, User, UserChanges};
use crate::response::plain;
use crate::service::{coerce_id, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body of `PUT /api/users/{id}`.
#[derive(Deserialize, ToSchema)]
pub struct ReplaceUser {
    pub data: UserChanges,
}

/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses((status = 200, description = "Every user, in insertion order", body = [User]))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/users/:id
///
/// An id that is not an integer reads as "no such user".
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user, or an id that is not an integer; body is `{}`")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = coerce_id(&raw_id).ok_or(AppError::Missing)?;
    state.store.find(id).await?.map(Json).ok_or(AppError::Missing)
}

/// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 200, description = "The created user", body = User),
        (status = 400, description = "name or email missing or not text", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<User>, AppError> {
    let new_user = RequestValidator::new_user(&body)?;
    let user = state.store.create(new_user).await?;
    tracing::info!(id = user.id, "user created");
    Ok(Json(user))
}

/// PATCH /api/users/:id
///
/// Merge semantics: falsy fields are ignored, so they cannot clear a value.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id to update")),
    request_body = UserChanges,
    responses(
        (status = 200, description = "The merged user", body = User),
        (status = 400, description = "name or email is not text", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<User>, AppError> {
    let changes = RequestValidator::merge_changes(&body)?;
    let id = coerce_id(&raw_id).ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.into()))?;
    let user = state.store.update(id, changes).await?;
    Ok(Json(user))
}

/// PUT /api/users/:id
///
/// Replaces the fields given under `data`. Responses are plain text.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id to update")),
    request_body = ReplaceUser,
    responses(
        (status = 200, description = "Confirmation sentence", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid id or missing data", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    )
)]
pub async fn replace_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let (id, changes) = RequestValidator::replace_changes(&raw_id, &body)?;
    match state.store.update(id, changes).await {
        Ok(_) => Ok(plain(StatusCode::OK, format!("User with id {} updated", id))),
        Err(StoreError::NotFound(_)) => Err(AppError::Plain(
            StatusCode::NOT_FOUND,
            format!("User with id {} not found", id),
        )),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /api/users/:id
///
/// Response shape follows the configured [`DeleteResponse`].
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id to delete")),
    responses(
        (status = 200, description = "Deleted user (record mode) or confirmation sentence (message mode)", body = User),
        (status = 404, description = "User not found: `{error}` (record mode) or sentence (message mode)", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let deleted = match coerce_id(&raw_id) {
        Some(id) => match state.store.delete(id).await {
            Ok(user) => Some(user),
            Err(StoreError::NotFound(_)) => None,
            Err(e) => return Err(e.into()),
        },
        None => None,
    };
    if let Some(user) = &deleted {
        tracing::info!(id = user.id, "user deleted");
    }
    match (state.settings.delete_response, deleted) {
        (DeleteResponse::Record, Some(user)) => Ok(Json(user).into_response()),
        (DeleteResponse::Record, None) => Err(AppError::NotFound(USER_NOT_FOUND.into())),
        (DeleteResponse::Message, Some(_)) => {
            Ok(plain(StatusCode::OK, format!("User with id {} deleted", raw_id)))
        }
        (DeleteResponse::Message, None) => Err(AppError::Plain(
            StatusCode::NOT_FOUND,
            format!("User with id {} not found", raw_id),
        )),
    }
}
