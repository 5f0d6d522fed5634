//! Backend entry-point: loads settings, wires the profile store and serves
//! the REST endpoints, health probes and OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use profile_backend::inbound::http::health::HealthState;
use profile_backend::outbound::persistence::DbPool;
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr, settings.route_prefix());
    if let Some(url) = settings.database_url() {
        let pool = DbPool::new(settings.pool_config(url))
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    info!(
        %bind_addr,
        route_prefix = settings.route_prefix(),
        "profile service listening"
    );

    let shutdown_health = health_state.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for shutdown signal");
            return;
        }
        shutdown_health.mark_unhealthy();
        info!("shutdown requested; draining connections");
        handle.stop(true).await;
    });

    server.await?;
    // Workers own the last references to the store; once they are gone the
    // pool is closed.
    info!("server stopped; profile store released");
    Ok(())
}
