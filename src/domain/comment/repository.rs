use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::entity::{ArticleComment, NewArticleComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewArticleComment) -> DomainResult<ArticleComment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<ArticleComment>>;
    async fn list(&self) -> DomainResult<Vec<ArticleComment>>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}
