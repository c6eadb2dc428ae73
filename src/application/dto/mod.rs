pub mod articles;
pub mod comments;

pub use articles::ArticleDto;
pub use comments::ArticleCommentDto;
