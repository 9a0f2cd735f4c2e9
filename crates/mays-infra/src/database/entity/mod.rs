//! SeaORM entities, one per table.

pub mod comment;
pub mod like;
pub mod post;
pub mod user;
