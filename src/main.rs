use anyhow::Result;
use axum::{ServiceExt, body::Body};
use inkpost::application::{
    ports::{markdown::MarkdownRenderer, time::Clock},
    services::ApplicationServices,
};
use inkpost::config::AppConfig;
use inkpost::domain::post::PostRepository;
use inkpost::infrastructure::{
    database, markdown::PulldownMarkdownRenderer, repositories::PostgresPostRepository,
    time::SystemClock,
};
use inkpost::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config);

    tracing::info!(
        env = %config.env(),
        http_port = config.http_port(),
        "starting inkpost"
    );

    let pool = database::init_pool(config.database_dsn(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool));
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(PulldownMarkdownRenderer::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&post_repo),
        Arc::clone(&renderer),
        Arc::clone(&clock),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.request_timeout());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.env().is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
