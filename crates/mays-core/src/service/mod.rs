//! Application services. Each takes the acting user explicitly and reaches
//! storage only through repository ports.

mod comments;
mod likes;

pub use comments::{CommentPatch, CommentService, NewComment};
pub use likes::LikeService;
