//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use mays_core::domain::{Comment, Like, Post, User};
use mays_core::error::RepoError;
use mays_core::ports::{CommentRepository, LikeRepository, PostRepository, UserRepository};

use super::base::{SeaOrmRepository, map_db_err};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

pub type SeaOrmCommentRepository = SeaOrmRepository<CommentEntity>;

pub type SeaOrmLikeRepository = SeaOrmRepository<LikeEntity>;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_many(&self, ids: &[String]) -> Result<Vec<User>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = UserEntity::find()
            .filter(user::Column::Id.is_in(ids.iter().cloned()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Post>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = PostEntity::find()
            .filter(post::Column::Id.is_in(ids.iter().cloned()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn list(&self, post_id: Option<&str>) -> Result<Vec<Comment>, RepoError> {
        let mut query = CommentEntity::find();
        if let Some(post_id) = post_id {
            query = query.filter(comment::Column::PostId.eq(post_id));
        }

        let result = query
            .order_by_asc(comment::Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn exists(&self, id: &str) -> Result<bool, RepoError> {
        let count = CommentEntity::find_by_id(id.to_string())
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn update(&self, comment: &Comment) -> Result<(), RepoError> {
        tracing::debug!(comment_id = %comment.id, "Updating comment");

        let result = CommentEntity::update_many()
            .col_expr(comment::Column::Content, Expr::value(comment.content.clone()))
            .col_expr(comment::Column::IsSpoiler, Expr::value(comment.is_spoiler))
            .filter(comment::Column::Id.eq(comment.id.as_str()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::Conflict(format!(
                "comment {} was modified or removed before the update was saved",
                comment.id
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl LikeRepository for SeaOrmLikeRepository {
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<Like>, RepoError> {
        let result = LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_by_post(&self, post_id: &str) -> Result<u64, RepoError> {
        LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn find_by_user_and_post(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Option<Like>, RepoError> {
        let result = LikeEntity::find()
            .filter(like::Column::UserId.eq(user_id))
            .filter(like::Column::PostId.eq(post_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}
