use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, Hashtag, NewArticle,
};
use crate::domain::audit::AuditActor;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

const ARTICLE_COLUMNS: &str =
    "id, title, content, hashtag, created_at, created_by, modified_at, modified_by";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            hashtag: row.hashtag.map(Hashtag::new).transpose()?,
            created_at: row.created_at,
            created_by: AuditActor::new(row.created_by)?,
            modified_at: row.modified_at,
            modified_by: AuditActor::new(row.modified_by)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            hashtag,
            created_at,
            created_by,
            modified_at,
            modified_by,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, hashtag, created_at, created_by, modified_at, modified_by)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id, title, content, hashtag, created_at, created_by, modified_at, modified_by",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(hashtag.as_ref().map(Hashtag::as_str))
        .bind(created_at)
        .bind(created_by.as_str())
        .bind(modified_at)
        .bind(modified_by.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            hashtag,
            modified_at,
            modified_by,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles
             SET title = COALESCE(?, title),
                 content = COALESCE(?, content),
                 hashtag = COALESCE(?, hashtag),
                 modified_at = ?,
                 modified_by = ?
             WHERE id = ?
             RETURNING id, title, content, hashtag, created_at, created_by, modified_at, modified_by",
        )
        .bind(title.as_ref().map(ArticleTitle::as_str))
        .bind(content.as_ref().map(ArticleContent::as_str))
        .bind(hashtag.as_ref().map(Hashtag::as_str))
        .bind(modified_at)
        .bind(modified_by.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // Owned comments go first so the article row can be removed without
        // tripping the foreign key; both statements share one transaction.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let comments = sqlx::query("DELETE FROM article_comments WHERE article_id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;

        tracing::debug!(
            article_id = i64::from(id),
            comments_removed = comments.rows_affected(),
            "deleted article and its comments"
        );
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM articles")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total as u64)
    }
}
