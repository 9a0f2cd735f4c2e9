//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a user: only the name and avatar ever leave the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_name: Option<String>,
    pub avatar: Option<String>,
}

/// Post as embedded in a comment. Every field is nullable so a comment whose
/// post could not be loaded still projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Option<String>,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub file_path: Option<String>,
    pub file_type: Option<String>,
    pub is_spoiler: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_spoiler: bool,
    pub post: PostDto,
    pub author: UserDto,
}

/// Body of `POST /api/comments`.
///
/// Any `id`, `date` or `author` sent by the client is dropped on the floor:
/// those are always assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentRequest {
    pub post_id: String,
    pub content: String,
    #[serde(default)]
    pub is_spoiler: bool,
}

/// Body of `PUT /api/comments/{id}`. Only these two fields are editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    pub content: String,
    #[serde(default)]
    pub is_spoiler: bool,
}

/// A like as clients see it: the liked post and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDto {
    pub post_id: String,
}

/// Body of `POST /api/likes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLikeRequest {
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountResponse {
    pub post_id: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_ignores_server_assigned_fields() {
        let body = r#"{
            "id": "forged",
            "postId": "p-1",
            "content": "hello",
            "date": "1999-01-01T00:00:00Z",
            "author": { "userName": "mallory" }
        }"#;

        let req: NewCommentRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.post_id, "p-1");
        assert_eq!(req.content, "hello");
        assert!(!req.is_spoiler);
    }

    #[test]
    fn test_comment_dto_uses_camel_case() {
        let dto = CommentDto {
            id: "c-1".to_string(),
            date: Utc::now(),
            content: "hi".to_string(),
            is_spoiler: true,
            post: PostDto::default(),
            author: UserDto::default(),
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["isSpoiler"], true);
        assert!(json["post"]["filePath"].is_null());
        assert!(json["author"]["userName"].is_null());
    }
}
