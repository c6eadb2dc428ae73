pub mod articles;
pub mod comments;

pub use articles::{
    ArticleCommandService, CreateArticleCommand, CreateArticleCommandBuilder,
    DeleteArticleCommand, UpdateArticleCommand,
};
pub use comments::{CommentCommandService, CreateCommentCommand, DeleteCommentCommand};
