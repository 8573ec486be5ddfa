use std::{env, net::SocketAddr};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{self, DatabaseConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Allowed origins from config; an empty list falls back to permissive.
pub fn build_cors(origins: &[String]) -> Result<CorsLayer, StartupError> {
    if origins.is_empty() {
        return Ok(CorsLayer::very_permissive());
    }
    let parsed = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| StartupError::InvalidConfig(format!("bad CORS origin: {o}"))))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new().allow_origin(AllowOrigin::list(parsed)).allow_methods(Any).allow_headers(Any))
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(server: Option<&ServerConfig>) -> Result<SocketAddr, StartupError> {
    let (host, port) = match server {
        Some(s) => (s.host.clone(), s.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {host}:{port}: {e}")))
}

/// Public entry: connect, migrate, and serve the HTTP API until shutdown
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!(error = %e, "config.toml unavailable; using environment");
            None
        }
    };

    let db = match &cfg {
        Some(c) => db::connect_with_config(&DatabaseConfig::from(&c.database)).await?,
        None => db::connect_with_config(&DatabaseConfig::from_env()).await?,
    };
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    let origins = cfg
        .as_ref()
        .map(|c| c.server.cors_origins.clone())
        .unwrap_or_else(|| ServerConfig::default().cors_origins);
    let cors = build_cors(&origins)?;
    let app: Router = routes::build_router(AppState::new(db), cors);

    let addr = load_bind_addr(cfg.as_ref().map(|c| &c.server))?;
    info!(%addr, "starting student management server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
