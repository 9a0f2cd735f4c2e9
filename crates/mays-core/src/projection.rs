//! Projection of entities to their client-safe DTOs.

use mays_shared::dto::{CommentDto, LikeDto, PostDto, UserDto};

use crate::domain::{CommentDetails, Like, Post, User};

pub fn comment_dto(details: &CommentDetails) -> CommentDto {
    let comment = &details.comment;
    CommentDto {
        id: comment.id.clone(),
        date: comment.date,
        content: comment.content.clone(),
        is_spoiler: comment.is_spoiler,
        post: post_dto(details.post.as_ref()),
        author: user_dto(details.author.as_ref()),
    }
}

/// A missing post projects to an object of nulls.
pub fn post_dto(post: Option<&Post>) -> PostDto {
    match post {
        Some(post) => PostDto {
            id: Some(post.id.clone()),
            title: Some(post.title.clone()),
            date: Some(post.date),
            content: Some(post.content.clone()),
            file_path: post.file_path.clone(),
            file_type: post.file_type.clone(),
            is_spoiler: Some(post.is_spoiler),
        },
        None => PostDto::default(),
    }
}

pub fn user_dto(user: Option<&User>) -> UserDto {
    match user {
        Some(user) => UserDto {
            user_name: Some(user.user_name.clone()),
            avatar: user.avatar.clone(),
        },
        None => UserDto::default(),
    }
}

pub fn like_dto(like: &Like) -> LikeDto {
    LikeDto {
        post_id: like.post_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Comment;

    #[test]
    fn test_comment_projects_post_and_author() {
        let author = User::new("ana", "ana@example.com").with_avatar("ana.png");
        let post = Post::new(&author.id, "Title", "Body").with_file("/f/a.mp4", "video");
        let comment = Comment::new(&post.id, &author.id, "nice", true);

        let dto = comment_dto(&CommentDetails {
            comment: comment.clone(),
            post: Some(post.clone()),
            author: Some(author),
        });

        assert_eq!(dto.id, comment.id);
        assert_eq!(dto.content, "nice");
        assert!(dto.is_spoiler);
        assert_eq!(dto.post.id.as_deref(), Some(post.id.as_str()));
        assert_eq!(dto.post.file_type.as_deref(), Some("video"));
        assert_eq!(dto.post.is_spoiler, Some(false));
        assert_eq!(dto.author.user_name.as_deref(), Some("ana"));
        assert_eq!(dto.author.avatar.as_deref(), Some("ana.png"));
    }

    #[test]
    fn test_missing_relations_project_to_nulls() {
        let comment = Comment::new("gone", "also-gone", "orphan", false);

        let dto = comment_dto(&CommentDetails {
            comment,
            post: None,
            author: None,
        });

        assert_eq!(dto.post, PostDto::default());
        assert_eq!(dto.author, UserDto::default());
    }

    #[test]
    fn test_author_email_is_not_exposed() {
        let user = User::new("bo", "secret@example.com");

        let json = serde_json::to_value(user_dto(Some(&user))).unwrap();

        assert_eq!(json, serde_json::json!({ "userName": "bo", "avatar": null }));
    }

    #[test]
    fn test_like_exposes_only_post_id() {
        let like = Like::new("u-1", "p-1");

        assert_eq!(
            like_dto(&like),
            LikeDto {
                post_id: "p-1".to_string()
            }
        );
    }
}
