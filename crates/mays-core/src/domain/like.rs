use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Like entity - a user's endorsement of a post.
///
/// `id` and `user_id` are internal; only `post_id` is ever shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
}

impl Like {
    pub fn new(user_id: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            post_id: post_id.into(),
        }
    }
}
