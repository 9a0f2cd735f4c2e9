use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - the identity that authors comments and likes posts.
///
/// Accounts are managed by the identity provider; this service only reads
/// them. `email` is identity metadata and is never projected to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamp.
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: user_name.into(),
            email: email.into(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
