// src/bin/seed_db.rs
//
// Migrates the configured database and fills it with the sample data set:
// SEED_ARTICLES articles (default 100) plus SEED_COMMENTS comments on the
// first of them (default 3).
use anyhow::Result;
use board_core::application::commands::{CreateArticleCommand, CreateCommentCommand};
use board_core::application::ports::time::Clock;
use board_core::application::services::ApplicationServices;
use board_core::config::AppConfig;
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
use std::{env, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SEED_ACTOR: &str = "seed";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
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

    let article_total = env_count("SEED_ARTICLES", 100);
    let comment_total = env_count("SEED_COMMENTS", 3);

    let mut first_article_id = None;
    for n in 1..=article_total {
        let command = CreateArticleCommand::builder()
            .title(format!("Sample article {n}"))
            .content(format!("Body of sample article {n}."))
            .hashtag(format!("#sample{}", n % 10))
            .created_by(SEED_ACTOR)
            .build()
            .map_err(anyhow::Error::msg)?;

        let created = services.article_commands.create_article(command).await?;
        first_article_id.get_or_insert(created.id);
    }

    if let Some(article_id) = first_article_id {
        for n in 1..=comment_total {
            let command = CreateCommentCommand {
                article_id,
                content: format!("Sample comment {n}."),
                created_by: SEED_ACTOR.into(),
            };
            services.comment_commands.create_comment(command).await?;
        }
    }

    tracing::info!(
        articles = article_total,
        comments = comment_total,
        "seeded database"
    );
    Ok(())
}

fn env_count(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
