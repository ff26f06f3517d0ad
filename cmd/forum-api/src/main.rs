//! # forum-api
//!
//! Assembles the server: settings, logging, the PostgreSQL pool, the
//! identity adapters and the axum router.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::http::middleware::{
    cors_layer, propagate_request_id_layer, set_request_id_layer, trace_layer,
};
use api_adapters::http::{router, AppState, Ports};
use auth_adapters::{Argon2PasswordHash, JwtTokenManager};
use configs::{LogSettings, Settings};
use secrecy::ExposeSecret;
use storage_adapters::postgres::{
    self, PgAuthenticationRepository, PgCommentRepository, PgThreadRepository, PgUserRepository,
};
use storage_adapters::uuid_id_generator;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings.log);

    let pool = postgres::connect(settings.database.url.expose_secret(), settings.database.max_connections)
        .await
        .context("connecting to PostgreSQL")?;
    postgres::run_migrations(&pool).await.context("running migrations")?;
    tracing::info!("database ready");

    let auth = &settings.auth;
    let ids = uuid_id_generator();
    let state = AppState::new(Ports {
        thread_repository: Arc::new(PgThreadRepository::new(pool.clone(), ids.clone())),
        comment_repository: Arc::new(PgCommentRepository::new(pool.clone(), ids.clone())),
        user_repository: Arc::new(PgUserRepository::new(pool.clone(), ids)),
        authentication_repository: Arc::new(PgAuthenticationRepository::new(pool)),
        password_hash: Arc::new(Argon2PasswordHash::new()),
        token_manager: Arc::new(JwtTokenManager::new(
            auth.access_token_key.expose_secret().as_bytes(),
            auth.refresh_token_key.expose_secret().as_bytes(),
            auth.access_token_age(),
            auth.refresh_token_age(),
        )),
    });

    let app = router(state)
        .layer(cors_layer(&settings.server.allow_origins))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(set_request_id_layer());

    let address = settings.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, "forum api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("forum api stopped");
    Ok(())
}

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
