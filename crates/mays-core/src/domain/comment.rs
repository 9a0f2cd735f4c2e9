use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Post, User};

/// Comment entity - a user's reply to a post.
///
/// `author_id` is fixed at creation. Only `content` and `is_spoiler` change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub is_spoiler: bool,
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Create a comment with a fresh id, dated now.
    pub fn new(
        post_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
        is_spoiler: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            post_id: post_id.into(),
            author_id: author_id.into(),
            content: content.into(),
            is_spoiler,
            date: Utc::now(),
        }
    }
}

/// A comment together with its post and author, when those could be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDetails {
    pub comment: Comment,
    pub post: Option<Post>,
    pub author: Option<User>,
}
