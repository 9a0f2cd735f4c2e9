//! Like endpoints.

use actix_web::{HttpResponse, web};

use mays_core::projection::like_dto;
use mays_shared::dto::{LikeCountResponse, LikeDto, NewLikeRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/likes/post/{post_id}
pub async fn list_by_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let likes = state.likes.list_by_post(&path).await?;
    let body: Vec<LikeDto> = likes.iter().map(like_dto).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/likes/post/{post_id}/count
pub async fn count(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let count = state.likes.count(&post_id).await?;

    Ok(HttpResponse::Ok().json(LikeCountResponse { post_id, count }))
}

/// POST /api/likes
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewLikeRequest>,
) -> AppResult<HttpResponse> {
    let like = state.likes.like(identity.actor(), &body.post_id).await?;

    Ok(HttpResponse::Created().json(like_dto(&like)))
}

/// DELETE /api/likes/post/{post_id}
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.likes.unlike(identity.actor(), &path).await?;

    Ok(HttpResponse::NoContent().finish())
}
