use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a piece of shared content, optionally with an attached file.
///
/// Posts are authored elsewhere; comments and likes only reference them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub file_path: Option<String>,
    pub file_type: Option<String>,
    pub is_spoiler: bool,
}

impl Post {
    /// Create a text-only post dated now.
    pub fn new(
        author_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.into(),
            title: title.into(),
            date: Utc::now(),
            content: content.into(),
            file_path: None,
            file_type: None,
            is_spoiler: false,
        }
    }

    pub fn with_file(mut self, path: impl Into<String>, file_type: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self.file_type = Some(file_type.into());
        self
    }
}
