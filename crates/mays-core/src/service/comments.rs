use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::{Comment, CommentDetails, Post, User};
use crate::error::DomainError;
use crate::policy::ActingUser;
use crate::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

const COMMENT: &str = "comment";

/// Fields a client supplies when creating a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: String,
    pub content: String,
    pub is_spoiler: bool,
}

/// The editable part of a comment.
#[derive(Debug, Clone)]
pub struct CommentPatch {
    pub content: String,
    pub is_spoiler: bool,
}

/// CRUD over comments, guarded by the ownership policy.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comments,
            posts,
            users,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<CommentDetails>, DomainError> {
        let comments = self.comments.list(None).await?;
        self.with_relations(comments).await
    }

    /// Comments on `post_id`. An unknown post simply has no comments.
    pub async fn list_by_post(&self, post_id: &str) -> Result<Vec<CommentDetails>, DomainError> {
        let comments = self.comments.list(Some(post_id)).await?;
        self.with_relations(comments).await
    }

    pub async fn get(&self, id: &str) -> Result<CommentDetails, DomainError> {
        let comment = self
            .comments
            .find_by_id(id.to_string())
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: COMMENT,
                id: id.to_string(),
            })?;

        let mut joined = self.with_relations(vec![comment]).await?;
        joined.pop().ok_or_else(|| DomainError::LookupFailed {
            entity_type: COMMENT,
            id: id.to_string(),
        })
    }

    /// Overwrite content and spoiler flag of a comment the actor wrote.
    ///
    /// An unknown id is an invalid target rather than a missing resource.
    pub async fn update(
        &self,
        actor: &ActingUser,
        id: &str,
        patch: CommentPatch,
    ) -> Result<(), DomainError> {
        actor.require_writer(COMMENT)?;

        if !self.comments.exists(id).await? {
            return Err(DomainError::InvalidTarget {
                entity_type: COMMENT,
                id: id.to_string(),
            });
        }

        let mut comment = self.load_exactly_one(id).await?;

        if let Err(e) = actor.require_owner(COMMENT, &comment.author_id) {
            tracing::warn!(comment_id = %id, "Rejected update by non-author");
            return Err(e);
        }

        comment.content = patch.content;
        comment.is_spoiler = patch.is_spoiler;

        // A conflict here is surfaced unretried.
        self.comments.update(&comment).await?;

        tracing::info!(comment_id = %id, "Comment updated");
        Ok(())
    }

    /// Create a comment authored by the actor, dated now.
    ///
    /// The post reference is not checked here; storage rejects unknown posts.
    pub async fn create(
        &self,
        actor: &ActingUser,
        new: NewComment,
    ) -> Result<CommentDetails, DomainError> {
        actor.require_writer(COMMENT)?;

        let author_id = actor.require_id()?;
        let author = self
            .users
            .find_by_id(author_id.to_string())
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let comment = Comment::new(new.post_id, &author.id, new.content, new.is_spoiler);
        let saved = self.comments.insert(comment).await?;

        tracing::info!(
            comment_id = %saved.id,
            post_id = %saved.post_id,
            "Comment created"
        );

        let post = self.posts.find_by_id(saved.post_id.clone()).await?;
        Ok(CommentDetails {
            comment: saved,
            post,
            author: Some(author),
        })
    }

    /// Delete a comment the actor wrote.
    ///
    /// The row must be loaded before ownership can be checked, so a missing
    /// id fails the lookup instead of reporting a plain not-found.
    pub async fn delete(&self, actor: &ActingUser, id: &str) -> Result<(), DomainError> {
        let comment = self.load_exactly_one(id).await?;

        if let Err(e) = actor.require_owner(COMMENT, &comment.author_id) {
            tracing::warn!(comment_id = %id, "Rejected delete by non-author");
            return Err(e);
        }

        self.comments.delete(comment.id).await?;

        tracing::info!(comment_id = %id, "Comment deleted");
        Ok(())
    }

    async fn load_exactly_one(&self, id: &str) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id.to_string())
            .await?
            .ok_or_else(|| DomainError::LookupFailed {
                entity_type: COMMENT,
                id: id.to_string(),
            })
    }

    /// Attach posts and authors with one batch lookup each.
    async fn with_relations(
        &self,
        comments: Vec<Comment>,
    ) -> Result<Vec<CommentDetails>, DomainError> {
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<String> = comments
            .iter()
            .map(|c| c.post_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let author_ids: Vec<String> = comments
            .iter()
            .map(|c| c.author_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let posts: HashMap<String, Post> = self
            .posts
            .find_many(&post_ids)
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        let authors: HashMap<String, User> = self
            .users
            .find_many(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| CommentDetails {
                post: posts.get(&comment.post_id).cloned(),
                author: authors.get(&comment.author_id).cloned(),
                comment,
            })
            .collect())
    }
}
