// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle, Hashtag};
use crate::domain::audit::AuditActor;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub hashtag: Option<Hashtag>,
    pub created_at: DateTime<Utc>,
    pub created_by: AuditActor,
    pub modified_at: DateTime<Utc>,
    pub modified_by: AuditActor,
}

impl Article {
    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>, actor: AuditActor) {
        self.title = title;
        self.touch(now, actor);
    }

    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>, actor: AuditActor) {
        self.content = content;
        self.touch(now, actor);
    }

    pub fn set_hashtag(&mut self, hashtag: Hashtag, now: DateTime<Utc>, actor: AuditActor) {
        self.hashtag = Some(hashtag);
        self.touch(now, actor);
    }

    fn touch(&mut self, now: DateTime<Utc>, actor: AuditActor) {
        self.modified_at = now;
        self.modified_by = actor;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub hashtag: Option<Hashtag>,
    pub created_at: DateTime<Utc>,
    pub created_by: AuditActor,
    pub modified_at: DateTime<Utc>,
    pub modified_by: AuditActor,
}

/// Partial update: `None` fields are left untouched, the modified_* audit
/// columns are always rewritten.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub hashtag: Option<Hashtag>,
    pub modified_at: DateTime<Utc>,
    pub modified_by: AuditActor,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, modified_at: DateTime<Utc>, modified_by: AuditActor) -> Self {
        Self {
            id,
            title: None,
            content: None,
            hashtag: None,
            modified_at,
            modified_by,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_hashtag(mut self, hashtag: Hashtag) -> Self {
        self.hashtag = Some(hashtag);
        self
    }
}
