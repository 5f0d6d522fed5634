//! Builders for the HTTP state backing the profile routes.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use profile_backend::inbound::http::state::HttpState;
use profile_backend::outbound::memory::InMemoryProfileRepository;
use profile_backend::outbound::persistence::DieselProfileRepository;

use super::ServerConfig;

/// Wire the profile service to PostgreSQL when a pool is configured,
/// otherwise to a process-local store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("profile store: postgres");
            HttpState::from_repository(Arc::new(DieselProfileRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; profiles are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryProfileRepository::new()))
        }
    };
    web::Data::new(state)
}
