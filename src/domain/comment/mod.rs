pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ArticleComment, NewArticleComment};
pub use repository::{CommentReadRepository, CommentWriteRepository};
pub use value_objects::{CommentBody, CommentId};
