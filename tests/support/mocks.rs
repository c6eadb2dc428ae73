// tests/support/mocks.rs
use async_trait::async_trait;
use board_core::application::ports::time::Clock;
use board_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use board_core::domain::comment::{
    ArticleComment, CommentId, CommentReadRepository, CommentWriteRepository, NewArticleComment,
};
use board_core::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

/// Clock pinned to a known instant so audit fields are assertable.
pub struct FixedClock {
    pub now: DateTime<Utc>,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Backing state shared by the article and comment mocks so that article
/// deletion can honour the cascade contract.
#[derive(Default)]
pub struct InMemoryStore {
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<ArticleComment>>,
    next_article_id: AtomicI64,
    next_comment_id: AtomicI64,
}

#[derive(Clone)]
pub struct InMemoryArticleRepo {
    store: Arc<InMemoryStore>,
}

impl InMemoryArticleRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.store.next_article_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            hashtag: article.hashtag,
            created_at: article.created_at,
            created_by: article.created_by,
            modified_at: article.modified_at,
            modified_by: article.modified_by,
        };
        self.store.articles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.store.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(hashtag) = update.hashtag {
            article.hashtag = Some(hashtag);
        }
        article.modified_at = update.modified_at;
        article.modified_by = update.modified_by;

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.store.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|article| article.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }

        self.store
            .comments
            .lock()
            .unwrap()
            .retain(|comment| comment.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .store
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.store.articles.lock().unwrap().clone())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.store.articles.lock().unwrap().len() as u64)
    }
}

#[derive(Clone)]
pub struct InMemoryCommentRepo {
    store: Arc<InMemoryStore>,
}

impl InMemoryCommentRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewArticleComment) -> DomainResult<ArticleComment> {
        let parent_exists = self
            .store
            .articles
            .lock()
            .unwrap()
            .iter()
            .any(|article| article.id == comment.article_id);
        if !parent_exists {
            return Err(DomainError::Validation(
                "referenced article does not exist".into(),
            ));
        }

        let id = self.store.next_comment_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = ArticleComment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            content: comment.content,
            created_at: comment.created_at,
            created_by: comment.created_by,
            modified_at: comment.modified_at,
            modified_by: comment.modified_by,
        };
        self.store.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut comments = self.store.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|comment| comment.id != id);
        if comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryCommentRepo {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<ArticleComment>> {
        Ok(self
            .store
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ArticleComment>> {
        Ok(self.store.comments.lock().unwrap().clone())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>> {
        Ok(self
            .store
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.store.comments.lock().unwrap().len() as u64)
    }

    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self
            .store
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .count() as u64)
    }
}
