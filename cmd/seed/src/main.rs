//! Fills a development database with a demo user, a thread and a comment.
//!
//! Safe to re-run: an existing `dicoding` user is left alone.

use anyhow::Context;
use auth_adapters::Argon2PasswordHash;
use configs::Settings;
use domains::{
    CommentRepository, DomainError, NewComment, NewThread, PasswordHash, RegisterUser, ThreadRepository,
    UserRepository,
};
use secrecy::ExposeSecret;
use storage_adapters::postgres::{self, PgCommentRepository, PgThreadRepository, PgUserRepository};
use storage_adapters::uuid_id_generator;

const DEMO_USERNAME: &str = "dicoding";
const DEMO_PASSWORD: &str = "secret";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = Settings::load().context("loading settings")?;
    let pool = postgres::connect(settings.database.url.expose_secret(), 2)
        .await
        .context("connecting to PostgreSQL")?;
    postgres::run_migrations(&pool).await.context("running migrations")?;

    let ids = uuid_id_generator();
    let users = PgUserRepository::new(pool.clone(), ids.clone());
    let threads = PgThreadRepository::new(pool.clone(), ids.clone());
    let comments = PgCommentRepository::new(pool, ids);

    match users.verify_available_username(DEMO_USERNAME).await {
        Ok(()) => {}
        Err(DomainError::Invariant(_)) => {
            tracing::info!(username = DEMO_USERNAME, "demo user exists, nothing to seed");
            return Ok(());
        }
        Err(err) => return Err(err).context("checking demo user"),
    }

    let password = Argon2PasswordHash::new().hash(DEMO_PASSWORD).await?;
    let user = users
        .add_user(&RegisterUser {
            username: DEMO_USERNAME.into(),
            password,
            fullname: "Dicoding Indonesia".into(),
        })
        .await?;

    let thread = threads
        .add_thread(
            &NewThread {
                title: "Selamat datang".into(),
                body: "Thread pertama di forum ini.".into(),
            },
            &user.id,
        )
        .await?;

    comments
        .add_thread_comment(
            &thread.id,
            &NewComment {
                content: "Komentar pertama.".into(),
            },
            &user.id,
        )
        .await?;

    tracing::info!(user_id = %user.id, thread_id = %thread.id, "seeded demo data");
    Ok(())
}
