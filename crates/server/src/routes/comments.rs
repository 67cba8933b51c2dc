use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::{Comment, CommentDraft, CommentPatch};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// List the whole collection in insertion order
#[utoipa::path(get, path = "/api/comments", tag = "comments", responses((status = 200, description = "Full collection", body = [crate::openapi::CommentDoc]), (status = 500, description = "Storage failure")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = state.comments.list().await?;
    Ok(Json(comments))
}

/// Fetch one comment by id
#[utoipa::path(get, path = "/api/comments/{id}", tag = "comments", params(("id" = String, Path, description = "Comment id")), responses((status = 200, description = "The comment", body = crate::openapi::CommentDoc), (status = 404, description = "Unknown id")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Comment>, ApiError> {
    let comment = state.comments.get(&id).await?;
    Ok(Json(comment))
}

/// Create a comment; responds with a plain-text confirmation carrying the minted id
#[utoipa::path(post, path = "/api/comments", tag = "comments", request_body = crate::openapi::CommentDraftDoc, responses((status = 201, description = "Created", body = String), (status = 400, description = "Missing required field"), (status = 422, description = "Duplicate comment"), (status = 500, description = "Storage failure")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<CommentDraft>,
) -> Result<(StatusCode, String), ApiError> {
    let comment = state.comments.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        format!("Comment id:{} has been added!", comment.id),
    ))
}

/// Shallow-merge a partial payload into the record addressed by its `id` field
#[utoipa::path(patch, path = "/api/comments", tag = "comments", request_body = crate::openapi::CommentPatchDoc, responses((status = 200, description = "Merged comment", body = crate::openapi::CommentDoc), (status = 404, description = "Unknown id")))]
pub async fn update(
    State(state): State<ServerState>,
    Json(patch): Json<CommentPatch>,
) -> Result<Json<Comment>, ApiError> {
    let merged = state.comments.update(patch).await?;
    Ok(Json(merged))
}

/// Remove a comment and return it
#[utoipa::path(delete, path = "/api/comments/{id}", tag = "comments", params(("id" = String, Path, description = "Comment id")), responses((status = 200, description = "Removed comment", body = crate::openapi::CommentDoc), (status = 404, description = "Unknown id")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Comment>, ApiError> {
    let removed = state.comments.delete(&id).await?;
    Ok(Json(removed))
}
