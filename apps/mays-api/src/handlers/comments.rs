//! Comment endpoints.

use actix_web::{HttpResponse, http::header, web};

use mays_core::projection::comment_dto;
use mays_core::service::{CommentPatch, NewComment};
use mays_shared::dto::{CommentDto, CommentUpdateRequest, NewCommentRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/comments
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let comments = state.comments.list_all().await?;
    let body: Vec<CommentDto> = comments.iter().map(comment_dto).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/comments/post/{post_id}
pub async fn list_by_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.list_by_post(&path).await?;
    let body: Vec<CommentDto> = comments.iter().map(comment_dto).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/comments/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let details = state.comments.get(&path).await?;

    Ok(HttpResponse::Ok().json(comment_dto(&details)))
}

/// POST /api/comments
///
/// Author and date come from the caller and the clock, never from the body.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewCommentRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    tracing::debug!(user = %identity.user_name, post_id = %body.post_id, "Creating comment");

    let details = state
        .comments
        .create(
            identity.actor(),
            NewComment {
                post_id: body.post_id,
                content: body.content,
                is_spoiler: body.is_spoiler,
            },
        )
        .await?;

    let dto = comment_dto(&details);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/comments/{}", dto.id)))
        .json(dto))
}

/// PUT /api/comments/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<CommentUpdateRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    state
        .comments
        .update(
            identity.actor(),
            &path,
            CommentPatch {
                content: body.content,
                is_spoiler: body.is_spoiler,
            },
        )
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/comments/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.comments.delete(identity.actor(), &path).await?;

    Ok(HttpResponse::NoContent().finish())
}
