// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleCommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentId, CommentReadRepository},
    },
};

pub struct CommentQueryService {
    read_repo: Arc<dyn CommentReadRepository>,
}

pub struct GetCommentByIdQuery {
    pub id: i64,
}

pub struct ListCommentsByArticleQuery {
    pub article_id: i64,
}

impl CommentQueryService {
    pub fn new(read_repo: Arc<dyn CommentReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_comment_by_id(
        &self,
        query: GetCommentByIdQuery,
    ) -> ApplicationResult<ArticleCommentDto> {
        let id = CommentId::new(query.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(comment.into())
    }

    pub async fn list_comments(&self) -> ApplicationResult<Vec<ArticleCommentDto>> {
        let comments = self.read_repo.list().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn list_comments_by_article(
        &self,
        query: ListCommentsByArticleQuery,
    ) -> ApplicationResult<Vec<ArticleCommentDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        let comments = self.read_repo.list_by_article(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn count_comments(&self) -> ApplicationResult<u64> {
        Ok(self.read_repo.count().await?)
    }

    pub async fn count_comments_by_article(&self, article_id: i64) -> ApplicationResult<u64> {
        let article_id = ArticleId::new(article_id)?;
        Ok(self.read_repo.count_by_article(article_id).await?)
    }
}
