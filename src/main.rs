use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use proposal_desk::adapters::http::api_router;
use proposal_desk::adapters::{
    InMemoryProposalRepository, JwtIdentityProvider, JwtSettings, PostgresProposalRepository,
};
use proposal_desk::application::ImportProposalHandler;
use proposal_desk::config::{AppConfig, DatabaseConfig, ServerConfig};
use proposal_desk::ports::{IdentityProvider, ProposalRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config.server)?;

    let repository = connect_repository(&config.database).await?;

    let identity: Arc<dyn IdentityProvider> = Arc::new(JwtIdentityProvider::new(
        JwtSettings::new(config.auth.jwt_secret.clone(), config.auth.audience.clone())
            .with_leeway(config.auth.leeway_secs),
    ));

    let importer =
        ImportProposalHandler::new(config.import.policy, config.import.max_payload_bytes);

    let app = api_router(repository, identity, importer)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "Starting proposal-desk");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .context("parsing log filter")?;

    let registry = tracing_subscriber::registry().with(filter);
    if server.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
    Ok(())
}

async fn connect_repository(
    database: &DatabaseConfig,
) -> anyhow::Result<Arc<dyn ProposalRepository>> {
    if !database.is_configured() {
        tracing::warn!("No database URL configured, proposals are kept in memory");
        return Ok(Arc::new(InMemoryProposalRepository::new()));
    }

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .max_lifetime(database.max_lifetime())
        .connect(&database.url)
        .await
        .context("connecting to PostgreSQL")?;

    if database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("running migrations")?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresProposalRepository::new(pool)))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
