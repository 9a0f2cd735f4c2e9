//! SeaORM-backed storage.

mod connections;

#[cfg(feature = "postgres")]
mod base;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod repositories;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::connect;

#[cfg(feature = "postgres")]
pub use repositories::{
    SeaOrmCommentRepository, SeaOrmLikeRepository, SeaOrmPostRepository, SeaOrmUserRepository,
};
