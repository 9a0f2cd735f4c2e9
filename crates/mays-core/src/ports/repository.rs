use async_trait::async_trait;

use crate::domain::{Comment, Like, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID, reporting absence as `None`.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User lookups. Accounts are owned by the identity provider.
#[async_trait]
pub trait UserRepository: BaseRepository<User, String> {
    /// Load every user whose id is in `ids`. Unknown ids are skipped.
    async fn find_many(&self, ids: &[String]) -> Result<Vec<User>, RepoError>;
}

#[async_trait]
pub trait PostRepository: BaseRepository<Post, String> {
    /// Load every post whose id is in `ids`. Unknown ids are skipped.
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Post>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, String> {
    /// All comments, or only those on `post_id` when given.
    async fn list(&self, post_id: Option<&str>) -> Result<Vec<Comment>, RepoError>;

    async fn exists(&self, id: &str) -> Result<bool, RepoError>;

    /// Persist the editable fields of `comment`.
    ///
    /// A write that matches no row is a `RepoError::Conflict`.
    async fn update(&self, comment: &Comment) -> Result<(), RepoError>;
}

#[async_trait]
pub trait LikeRepository: BaseRepository<Like, String> {
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<Like>, RepoError>;

    async fn count_by_post(&self, post_id: &str) -> Result<u64, RepoError>;

    async fn find_by_user_and_post(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Option<Like>, RepoError>;
}
