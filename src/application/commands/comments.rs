// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleCommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        audit::AuditActor,
        comment::{CommentBody, CommentId, CommentReadRepository, CommentWriteRepository, NewArticleComment},
    },
};

pub struct CommentCommandService {
    write_repo: Arc<dyn CommentWriteRepository>,
    read_repo: Arc<dyn CommentReadRepository>,
    article_read_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_read_repo,
            clock,
        }
    }
}

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub content: String,
    pub created_by: String,
}

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<ArticleCommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let content = CommentBody::new(command.content)?;
        let actor = AuditActor::new(command.created_by)?;

        // A dangling parent reference is a validation failure, not a missing
        // resource: the comment being created does not exist yet.
        self.article_read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::validation("referenced article does not exist")
            })?;

        let now = self.clock.now();
        let new_comment = NewArticleComment {
            article_id,
            content,
            created_at: now,
            created_by: actor.clone(),
            modified_at: now,
            modified_by: actor,
        };

        let created = self.write_repo.insert(new_comment).await?;
        Ok(created.into())
    }

    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
