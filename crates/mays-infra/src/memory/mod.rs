//! In-memory store - used when no database is configured, and in tests.
//!
//! All tables sit behind a single async `RwLock` so the referential checks
//! done on insert see a consistent snapshot. Data is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mays_core::domain::{Comment, Like, Post, User};
use mays_core::error::RepoError;
use mays_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostRepository, UserRepository,
};

#[cfg(test)]
mod tests;

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    posts: HashMap<String, Post>,
    comments: HashMap<String, Comment>,
    likes: HashMap<String, Like>,
}

impl Tables {
    fn require_user(&self, id: &str) -> Result<(), RepoError> {
        if self.users.contains_key(id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!("unknown reference: user {id}")))
        }
    }

    fn require_post(&self, id: &str) -> Result<(), RepoError> {
        if self.posts.contains_key(id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!("unknown reference: post {id}")))
        }
    }

    fn remove_post_cascade(&mut self, post_id: &str) {
        self.comments.retain(|_, c| c.post_id != post_id);
        self.likes.retain(|_, l| l.post_id != post_id);
    }
}

/// Shared storage behind the in-memory repositories.
#[derive(Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn duplicate(table: &str, id: &str) -> RepoError {
    RepoError::Constraint(format!("duplicate entry: {table} {id}"))
}

pub struct InMemoryUserRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryUserRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<User, String> for InMemoryUserRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<User>, RepoError> {
        Ok(self.db.tables.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.db.tables.write().await;
        if tables.users.contains_key(&user.id) {
            return Err(duplicate("user", &user.id));
        }
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(duplicate("user email", &user.email));
        }
        tables.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut tables = self.db.tables.write().await;
        tables.users.remove(&id).ok_or(RepoError::NotFound)?;

        let owned_posts: Vec<String> = tables
            .posts
            .values()
            .filter(|p| p.author_id == id)
            .map(|p| p.id.clone())
            .collect();
        for post_id in owned_posts {
            tables.posts.remove(&post_id);
            tables.remove_post_cascade(&post_id);
        }
        tables.comments.retain(|_, c| c.author_id != id);
        tables.likes.retain(|_, l| l.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_many(&self, ids: &[String]) -> Result<Vec<User>, RepoError> {
        let tables = self.db.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.users.get(id).cloned())
            .collect())
    }
}

pub struct InMemoryPostRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryPostRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, String> for InMemoryPostRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        Ok(self.db.tables.read().await.posts.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.db.tables.write().await;
        if tables.posts.contains_key(&post.id) {
            return Err(duplicate("post", &post.id));
        }
        tables.require_user(&post.author_id)?;
        tables.posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut tables = self.db.tables.write().await;
        tables.posts.remove(&id).ok_or(RepoError::NotFound)?;
        tables.remove_post_cascade(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Post>, RepoError> {
        let tables = self.db.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.posts.get(id).cloned())
            .collect())
    }
}

pub struct InMemoryCommentRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryCommentRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Comment, String> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Comment>, RepoError> {
        Ok(self.db.tables.read().await.comments.get(&id).cloned())
    }

    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.db.tables.write().await;
        if tables.comments.contains_key(&comment.id) {
            return Err(duplicate("comment", &comment.id));
        }
        tables.require_post(&comment.post_id)?;
        tables.require_user(&comment.author_id)?;
        tables.comments.insert(comment.id.clone(), comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut tables = self.db.tables.write().await;
        tables
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list(&self, post_id: Option<&str>) -> Result<Vec<Comment>, RepoError> {
        let tables = self.db.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| post_id.is_none_or(|p| c.post_id == p))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn exists(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.db.tables.read().await.comments.contains_key(id))
    }

    async fn update(&self, comment: &Comment) -> Result<(), RepoError> {
        let mut tables = self.db.tables.write().await;
        let stored = tables.comments.get_mut(&comment.id).ok_or_else(|| {
            RepoError::Conflict(format!(
                "comment {} was modified or removed before the update was saved",
                comment.id
            ))
        })?;
        stored.content = comment.content.clone();
        stored.is_spoiler = comment.is_spoiler;
        Ok(())
    }
}

pub struct InMemoryLikeRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryLikeRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Like, String> for InMemoryLikeRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Like>, RepoError> {
        Ok(self.db.tables.read().await.likes.get(&id).cloned())
    }

    async fn insert(&self, like: Like) -> Result<Like, RepoError> {
        let mut tables = self.db.tables.write().await;
        if tables.likes.contains_key(&like.id) {
            return Err(duplicate("like", &like.id));
        }
        if tables
            .likes
            .values()
            .any(|l| l.user_id == like.user_id && l.post_id == like.post_id)
        {
            return Err(duplicate("like on post", &like.post_id));
        }
        tables.require_post(&like.post_id)?;
        tables.require_user(&like.user_id)?;
        tables.likes.insert(like.id.clone(), like.clone());
        Ok(like)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut tables = self.db.tables.write().await;
        tables
            .likes
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<Like>, RepoError> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .likes
            .values()
            .filter(|l| l.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn count_by_post(&self, post_id: &str) -> Result<u64, RepoError> {
        let tables = self.db.tables.read().await;
        Ok(tables.likes.values().filter(|l| l.post_id == post_id).count() as u64)
    }

    async fn find_by_user_and_post(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Option<Like>, RepoError> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .likes
            .values()
            .find(|l| l.user_id == user_id && l.post_id == post_id)
            .cloned())
    }
}
