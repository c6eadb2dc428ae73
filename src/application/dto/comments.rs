use crate::domain::comment::ArticleComment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCommentDto {
    pub id: i64,
    pub article_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<ArticleComment> for ArticleCommentDto {
    fn from(comment: ArticleComment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            content: comment.content.into_inner(),
            created_at: comment.created_at,
            created_by: comment.created_by.into_inner(),
            modified_at: comment.modified_at,
            modified_by: comment.modified_by.into_inner(),
        }
    }
}
