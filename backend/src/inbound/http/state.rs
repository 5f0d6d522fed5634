//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ProfileService;
use crate::domain::ports::{ProfileCommand, ProfileQuery, ProfileRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub profile: Arc<dyn ProfileQuery>,
    pub profile_commands: Arc<dyn ProfileCommand>,
}

impl HttpState {
    /// Construct state from separate query and command ports.
    pub fn new(profile: Arc<dyn ProfileQuery>, profile_commands: Arc<dyn ProfileCommand>) -> Self {
        Self {
            profile,
            profile_commands,
        }
    }

    /// Wire both ports to a single profile service over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use profile_backend::inbound::http::state::HttpState;
    /// use profile_backend::outbound::memory::InMemoryProfileRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryProfileRepository::new()));
    /// let _query = state.profile.clone();
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: ProfileRepository + 'static,
    {
        let service = Arc::new(ProfileService::new(repository));
        Self::new(service.clone(), service)
    }
}
