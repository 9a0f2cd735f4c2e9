use std::sync::Arc;

use mays_core::domain::{Comment, Post, User};
use mays_core::error::{DomainError, RepoError};
use mays_core::policy::ActingUser;
use mays_core::ports::{BaseRepository, CommentRepository};
use mays_core::service::{CommentPatch, CommentService, LikeService, NewComment};

use super::InMemoryDatabase;
use crate::Repositories;

struct Fixture {
    repos: Repositories,
    comments: CommentService,
    likes: LikeService,
    author: User,
    other: User,
    post: Post,
}

impl Fixture {
    async fn new() -> Self {
        let repos = Repositories::in_memory(InMemoryDatabase::new());

        let author = repos
            .users
            .insert(User::new("ana", "ana@example.com").with_avatar("ana.png"))
            .await
            .unwrap();
        let other = repos
            .users
            .insert(User::new("bo", "bo@example.com"))
            .await
            .unwrap();
        let post = repos
            .posts
            .insert(Post::new(&other.id, "First", "Hello world"))
            .await
            .unwrap();

        Self {
            comments: repos.comment_service(),
            likes: repos.like_service(),
            repos,
            author,
            other,
            post,
        }
    }

    fn actor(user: &User) -> ActingUser {
        ActingUser::new(&user.id, &["user"])
    }

    async fn comment_by(&self, user: &User, content: &str) -> Comment {
        self.comments
            .create(
                &Self::actor(user),
                NewComment {
                    post_id: self.post.id.clone(),
                    content: content.to_string(),
                    is_spoiler: false,
                },
            )
            .await
            .unwrap()
            .comment
    }
}

#[tokio::test]
async fn test_comment_insert_requires_existing_post_and_author() {
    let fx = Fixture::new().await;

    let orphan = Comment::new("no-such-post", &fx.author.id, "x", false);
    let result = fx.repos.comments.insert(orphan).await;
    assert!(matches!(result, Err(RepoError::Constraint(_))));

    let ghost = Comment::new(&fx.post.id, "no-such-user", "x", false);
    let result = fx.repos.comments.insert(ghost).await;
    assert!(matches!(result, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_update_of_vanished_comment_is_conflict() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "soon gone").await;

    fx.repos.comments.delete(comment.id.clone()).await.unwrap();
    let result = fx.repos.comments.update(&comment).await;

    assert!(matches!(result, Err(RepoError::Conflict(_))));
}

#[tokio::test]
async fn test_deleting_post_removes_its_comments() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "on a doomed post").await;

    fx.repos.posts.delete(fx.post.id.clone()).await.unwrap();

    assert!(!fx.repos.comments.exists(&comment.id).await.unwrap());
}

#[tokio::test]
async fn test_get_returns_joined_comment() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "first!").await;

    let details = fx.comments.get(&comment.id).await.unwrap();

    assert_eq!(details.comment.id, comment.id);
    assert_eq!(details.post.as_ref().map(|p| p.id.as_str()), Some(fx.post.id.as_str()));
    assert_eq!(
        details.author.as_ref().map(|u| u.user_name.as_str()),
        Some("ana")
    );
}

#[tokio::test]
async fn test_get_unknown_comment_is_not_found() {
    let fx = Fixture::new().await;

    let result = fx.comments.get("missing").await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_stamps_author_and_date() {
    let fx = Fixture::new().await;
    let before = chrono::Utc::now();

    let created = fx
        .comments
        .create(
            &Fixture::actor(&fx.author),
            NewComment {
                post_id: fx.post.id.clone(),
                content: "mine".to_string(),
                is_spoiler: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.comment.author_id, fx.author.id);
    assert!(created.comment.date >= before);
    assert!(created.comment.is_spoiler);
    assert_eq!(created.author.map(|u| u.id), Some(fx.author.id.clone()));
    assert!(created.post.is_some());
}

#[tokio::test]
async fn test_create_without_known_user_is_unauthorized() {
    let fx = Fixture::new().await;
    let new = NewComment {
        post_id: fx.post.id.clone(),
        content: "who am I".to_string(),
        is_spoiler: false,
    };

    let no_claim = fx
        .comments
        .create(&ActingUser::without_id(&["user"]), new.clone())
        .await;
    let unknown = fx
        .comments
        .create(&ActingUser::new("stranger", &["user"]), new)
        .await;

    assert!(matches!(no_claim, Err(DomainError::Unauthorized)));
    assert!(matches!(unknown, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_create_requires_writer_role() {
    let fx = Fixture::new().await;

    let result = fx
        .comments
        .create(
            &ActingUser::new(&fx.author.id, &["guest"]),
            NewComment {
                post_id: fx.post.id.clone(),
                content: "nope".to_string(),
                is_spoiler: false,
            },
        )
        .await;

    assert!(matches!(result, Err(DomainError::Forbidden(_))));
}

#[tokio::test]
async fn test_create_on_unknown_post_is_rejected_by_storage() {
    let fx = Fixture::new().await;

    let result = fx
        .comments
        .create(
            &Fixture::actor(&fx.author),
            NewComment {
                post_id: "no-such-post".to_string(),
                content: "lost".to_string(),
                is_spoiler: false,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Repo(RepoError::Constraint(_)))
    ));
}

#[tokio::test]
async fn test_author_update_is_visible() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "draft").await;

    fx.comments
        .update(
            &Fixture::actor(&fx.author),
            &comment.id,
            CommentPatch {
                content: "x".to_string(),
                is_spoiler: true,
            },
        )
        .await
        .unwrap();

    let after = fx.comments.get(&comment.id).await.unwrap().comment;
    assert_eq!(after.content, "x");
    assert!(after.is_spoiler);
    assert_eq!(after.date, comment.date);
    assert_eq!(after.author_id, comment.author_id);
}

#[tokio::test]
async fn test_non_author_update_is_forbidden_and_harmless() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "original").await;

    let result = fx
        .comments
        .update(
            &Fixture::actor(&fx.other),
            &comment.id,
            CommentPatch {
                content: "defaced".to_string(),
                is_spoiler: true,
            },
        )
        .await;

    assert!(matches!(result, Err(DomainError::Forbidden(_))));
    let after = fx.comments.get(&comment.id).await.unwrap().comment;
    assert_eq!(after.content, "original");
    assert!(!after.is_spoiler);
}

#[tokio::test]
async fn test_update_without_id_claim_is_forbidden() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "original").await;

    let result = fx
        .comments
        .update(
            &ActingUser::without_id(&["admin"]),
            &comment.id,
            CommentPatch {
                content: "x".to_string(),
                is_spoiler: false,
            },
        )
        .await;

    assert!(matches!(result, Err(DomainError::Forbidden(_))));
}

#[tokio::test]
async fn test_update_unknown_comment_is_invalid_target() {
    let fx = Fixture::new().await;

    let result = fx
        .comments
        .update(
            &Fixture::actor(&fx.author),
            "missing",
            CommentPatch {
                content: "x".to_string(),
                is_spoiler: false,
            },
        )
        .await;

    assert!(matches!(result, Err(DomainError::InvalidTarget { .. })));
}

#[tokio::test]
async fn test_author_delete_removes_comment() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "bye").await;

    fx.comments
        .delete(&Fixture::actor(&fx.author), &comment.id)
        .await
        .unwrap();

    assert!(matches!(
        fx.comments.get(&comment.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_non_author_delete_leaves_comment() {
    let fx = Fixture::new().await;
    let comment = fx.comment_by(&fx.author, "stay").await;

    let result = fx
        .comments
        .delete(&Fixture::actor(&fx.other), &comment.id)
        .await;

    assert!(matches!(result, Err(DomainError::Forbidden(_))));
    assert!(fx.comments.get(&comment.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_unknown_comment_fails_lookup() {
    let fx = Fixture::new().await;

    let result = fx
        .comments
        .delete(&Fixture::actor(&fx.author), "missing")
        .await;

    assert!(matches!(result, Err(DomainError::LookupFailed { .. })));
}

#[tokio::test]
async fn test_list_by_post_is_subset_of_list_all() {
    let fx = Fixture::new().await;
    let second_post = fx
        .repos
        .posts
        .insert(Post::new(&fx.author.id, "Second", "More"))
        .await
        .unwrap();

    fx.comment_by(&fx.author, "a").await;
    fx.comment_by(&fx.other, "b").await;
    fx.comments
        .create(
            &Fixture::actor(&fx.other),
            NewComment {
                post_id: second_post.id.clone(),
                content: "c".to_string(),
                is_spoiler: false,
            },
        )
        .await
        .unwrap();

    let all = fx.comments.list_all().await.unwrap();
    let on_first = fx.comments.list_by_post(&fx.post.id).await.unwrap();

    assert_eq!(all.len(), 3);
    let mut expected: Vec<String> = all
        .iter()
        .filter(|d| d.comment.post_id == fx.post.id)
        .map(|d| d.comment.id.clone())
        .collect();
    let mut actual: Vec<String> = on_first.iter().map(|d| d.comment.id.clone()).collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 2);
}

#[tokio::test]
async fn test_list_by_unknown_post_is_empty() {
    let fx = Fixture::new().await;
    fx.comment_by(&fx.author, "a").await;

    let listed = fx.comments.list_by_post("nowhere").await.unwrap();

    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_attaches_post_and_author() {
    let fx = Fixture::new().await;
    fx.comment_by(&fx.author, "a").await;

    let listed = fx.comments.list_all().await.unwrap();

    assert_eq!(listed.len(), 1);
    assert!(listed[0].author.is_some());
    assert!(listed[0].post.is_some());
}

#[tokio::test]
async fn test_like_once_per_user() {
    let fx = Fixture::new().await;
    let actor = Fixture::actor(&fx.author);

    fx.likes.like(&actor, &fx.post.id).await.unwrap();
    let again = fx.likes.like(&actor, &fx.post.id).await;

    assert!(matches!(
        again,
        Err(DomainError::Repo(RepoError::Constraint(_)))
    ));
    assert_eq!(fx.likes.count(&fx.post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_unlike_removes_only_own_like() {
    let fx = Fixture::new().await;
    let ana = Fixture::actor(&fx.author);
    let bo = Fixture::actor(&fx.other);

    fx.likes.like(&ana, &fx.post.id).await.unwrap();
    fx.likes.like(&bo, &fx.post.id).await.unwrap();
    fx.likes.unlike(&ana, &fx.post.id).await.unwrap();

    let remaining = fx.likes.list_by_post(&fx.post.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].user_id, fx.other.id);

    let again = fx.likes.unlike(&ana, &fx.post.id).await;
    assert!(matches!(again, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_like_unknown_post_is_rejected() {
    let fx = Fixture::new().await;

    let result = fx
        .likes
        .like(&Fixture::actor(&fx.author), "no-such-post")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Repo(RepoError::Constraint(_)))
    ));
}

#[tokio::test]
async fn test_services_share_one_store() {
    let db = InMemoryDatabase::new();
    let a = Repositories::in_memory(Arc::clone(&db));
    let b = Repositories::in_memory(db);

    let user = a.users.insert(User::new("cy", "cy@example.com")).await.unwrap();

    assert!(b.users.find_by_id(user.id).await.unwrap().is_some());
}
