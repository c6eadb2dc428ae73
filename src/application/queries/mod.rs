pub mod articles;
pub mod comments;

pub use articles::{ArticleQueryService, GetArticleByIdQuery};
pub use comments::{CommentQueryService, GetCommentByIdQuery, ListCommentsByArticleQuery};
