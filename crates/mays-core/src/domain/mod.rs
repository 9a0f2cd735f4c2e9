//! Domain entities - the core business objects.

mod comment;
mod like;
mod post;
mod user;

pub use comment::{Comment, CommentDetails};
pub use like::Like;
pub use post::Post;
pub use user::User;
