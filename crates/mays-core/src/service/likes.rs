use std::sync::Arc;

use crate::domain::Like;
use crate::error::DomainError;
use crate::policy::ActingUser;
use crate::ports::{BaseRepository, LikeRepository};

const LIKE: &str = "like";

/// Likes on posts. A user likes a given post at most once; storage enforces it.
#[derive(Clone)]
pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(likes: Arc<dyn LikeRepository>) -> Self {
        Self { likes }
    }

    pub async fn like(&self, actor: &ActingUser, post_id: &str) -> Result<Like, DomainError> {
        actor.require_writer(LIKE)?;
        let user_id = actor.require_id()?;

        let saved = self.likes.insert(Like::new(user_id, post_id)).await?;

        tracing::debug!(post_id = %post_id, "Post liked");
        Ok(saved)
    }

    pub async fn unlike(&self, actor: &ActingUser, post_id: &str) -> Result<(), DomainError> {
        actor.require_writer(LIKE)?;
        let user_id = actor.require_id()?;

        let like = self
            .likes
            .find_by_user_and_post(user_id, post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: LIKE,
                id: post_id.to_string(),
            })?;

        self.likes.delete(like.id).await?;

        tracing::debug!(post_id = %post_id, "Post unliked");
        Ok(())
    }

    pub async fn list_by_post(&self, post_id: &str) -> Result<Vec<Like>, DomainError> {
        Ok(self.likes.list_by_post(post_id).await?)
    }

    pub async fn count(&self, post_id: &str) -> Result<u64, DomainError> {
        Ok(self.likes.count_by_post(post_id).await?)
    }
}
