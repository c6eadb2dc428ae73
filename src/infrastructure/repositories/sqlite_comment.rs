use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::audit::AuditActor;
use crate::domain::comment::{
    ArticleComment, CommentBody, CommentId, CommentReadRepository, CommentWriteRepository,
    NewArticleComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCommentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

const COMMENT_COLUMNS: &str =
    "id, article_id, content, created_at, created_by, modified_at, modified_by";

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<CommentRow> for ArticleComment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(ArticleComment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            content: CommentBody::new(row.content)?,
            created_at: row.created_at,
            created_by: AuditActor::new(row.created_by)?,
            modified_at: row.modified_at,
            modified_by: AuditActor::new(row.modified_by)?,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentWriteRepository {
    async fn insert(&self, comment: NewArticleComment) -> DomainResult<ArticleComment> {
        let NewArticleComment {
            article_id,
            content,
            created_at,
            created_by,
            modified_at,
            modified_by,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO article_comments (article_id, content, created_at, created_by, modified_at, modified_by)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, article_id, content, created_at, created_by, modified_at, modified_by",
        )
        .bind(i64::from(article_id))
        .bind(content.as_str())
        .bind(created_at)
        .bind(created_by.as_str())
        .bind(modified_at)
        .bind(modified_by.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleComment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM article_comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<ArticleComment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM article_comments WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleComment::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ArticleComment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM article_comments"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleComment::try_from).collect()
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM article_comments WHERE article_id = ?"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleComment::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM article_comments")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total as u64)
    }

    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(1) FROM article_comments WHERE article_id = ?")
                .bind(i64::from(article_id))
                .fetch_one(&*self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(total as u64)
    }
}
