// src/domain/comment/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::audit::AuditActor;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use chrono::{DateTime, Utc};

/// A comment always belongs to exactly one article; `article_id` is never
/// nullable and is validated against the article store on creation.
#[derive(Debug, Clone)]
pub struct ArticleComment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub content: CommentBody,
    pub created_at: DateTime<Utc>,
    pub created_by: AuditActor,
    pub modified_at: DateTime<Utc>,
    pub modified_by: AuditActor,
}

#[derive(Debug, Clone)]
pub struct NewArticleComment {
    pub article_id: ArticleId,
    pub content: CommentBody,
    pub created_at: DateTime<Utc>,
    pub created_by: AuditActor,
    pub modified_at: DateTime<Utc>,
    pub modified_by: AuditActor,
}
