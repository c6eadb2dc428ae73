// tests/support/helpers.rs
use board_core::application::commands::{CreateArticleCommand, CreateCommentCommand};
use board_core::application::ports::time::Clock;
use board_core::application::services::ApplicationServices;
use board_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use board_core::domain::comment::{CommentReadRepository, CommentWriteRepository};
use board_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCommentReadRepository,
        SqliteCommentWriteRepository,
    },
    time::SystemClock,
};
use once_cell::sync::Lazy;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::Arc;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init()
        .ok();
});

/// Fresh in-memory database with migrations applied, wired into the full
/// service stack. In-memory SQLite scopes the database to one connection, so
/// the pool is capped at a single connection.
pub async fn setup() -> (Arc<SqlitePool>, ApplicationServices) {
    Lazy::force(&TRACING);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("enable foreign keys");

    database::run_migrations(&pool).await.expect("run migrations");
    let pool = Arc::new(pool);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let comment_write_repo: Arc<dyn CommentWriteRepository> =
        Arc::new(SqliteCommentWriteRepository::new(Arc::clone(&pool)));
    let comment_read_repo: Arc<dyn CommentReadRepository> =
        Arc::new(SqliteCommentReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        comment_write_repo,
        comment_read_repo,
        clock,
    );

    (pool, services)
}

/// Creates `count` articles and returns their ids in creation order.
pub async fn seed_articles(services: &ApplicationServices, count: u32) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count as usize);
    for n in 1..=count {
        let command = CreateArticleCommand::builder()
            .title(format!("Article {n}"))
            .content(format!("Content of article {n}."))
            .hashtag(format!("#tag{}", n % 10))
            .created_by("seed")
            .build()
            .expect("complete create command");

        let created = services
            .article_commands
            .create_article(command)
            .await
            .expect("seed article");
        ids.push(created.id);
    }
    ids
}

pub async fn seed_comments(services: &ApplicationServices, article_id: i64, count: u32) {
    for n in 1..=count {
        let command = CreateCommentCommand {
            article_id,
            content: format!("Comment {n}."),
            created_by: "seed".into(),
        };
        services
            .comment_commands
            .create_comment(command)
            .await
            .expect("seed comment");
    }
}
