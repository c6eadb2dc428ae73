// src/application/commands/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
            ArticleWriteRepository, Hashtag, NewArticle,
        },
        audit::AuditActor,
    },
};

pub struct ArticleCommandService {
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub created_by: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    hashtag: Option<String>,
    created_by: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn hashtag(mut self, hashtag: impl Into<String>) -> Self {
        self.hashtag = Some(hashtag.into());
        self
    }

    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            hashtag: self.hashtag,
            created_by: self.created_by.ok_or("created_by is required")?,
        })
    }
}

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
    pub modified_by: String,
}

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let hashtag = command.hashtag.map(Hashtag::new).transpose()?;
        let actor = AuditActor::new(command.created_by)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content,
            hashtag,
            created_at: now,
            created_by: actor.clone(),
            modified_at: now,
            modified_by: actor,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }

    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title_opt = command.title.map(ArticleTitle::new).transpose()?;
        let content_opt = command.content.map(ArticleContent::new).transpose()?;
        let hashtag_opt = command.hashtag.map(Hashtag::new).transpose()?;
        let actor = AuditActor::new(command.modified_by)?;
        let now = self.clock.now();

        let mut update = ArticleUpdate::new(id, now, actor.clone());
        if let Some(title) = title_opt {
            article.set_title(title.clone(), now, actor.clone());
            update = update.with_title(title);
        }
        if let Some(content) = content_opt {
            article.set_content(content.clone(), now, actor.clone());
            update = update.with_content(content);
        }
        if let Some(hashtag) = hashtag_opt {
            article.set_hashtag(hashtag.clone(), now, actor.clone());
            update = update.with_hashtag(hashtag);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
