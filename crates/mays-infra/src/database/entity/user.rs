//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for mays_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
            email: model.email,
            avatar: model.avatar,
            created_at: model.created_at.into(),
        }
    }
}

impl From<mays_core::domain::User> for ActiveModel {
    fn from(user: mays_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            user_name: Set(user.user_name),
            email: Set(user.email),
            avatar: Set(user.avatar),
            created_at: Set(user.created_at.into()),
        }
    }
}
