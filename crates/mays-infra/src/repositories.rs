use std::sync::Arc;

use mays_core::ports::{CommentRepository, LikeRepository, PostRepository, UserRepository};
use mays_core::service::{CommentService, LikeService};

use crate::memory::{
    InMemoryCommentRepository, InMemoryDatabase, InMemoryLikeRepository, InMemoryPostRepository,
    InMemoryUserRepository,
};

/// One set of repositories over a single backing store.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

impl Repositories {
    pub fn in_memory(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new(db.clone())),
            posts: Arc::new(InMemoryPostRepository::new(db.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(db.clone())),
            likes: Arc::new(InMemoryLikeRepository::new(db)),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn sea_orm(conn: sea_orm::DbConn) -> Self {
        use crate::database::{
            SeaOrmCommentRepository, SeaOrmLikeRepository, SeaOrmPostRepository,
            SeaOrmUserRepository,
        };

        let conn = Arc::new(conn);
        Self {
            users: Arc::new(SeaOrmUserRepository::new(Arc::clone(&conn))),
            posts: Arc::new(SeaOrmPostRepository::new(Arc::clone(&conn))),
            comments: Arc::new(SeaOrmCommentRepository::new(Arc::clone(&conn))),
            likes: Arc::new(SeaOrmLikeRepository::new(conn)),
        }
    }

    pub fn comment_service(&self) -> CommentService {
        CommentService::new(self.comments.clone(), self.posts.clone(), self.users.clone())
    }

    pub fn like_service(&self) -> LikeService {
        LikeService::new(self.likes.clone())
    }
}
