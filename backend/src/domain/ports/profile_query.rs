//! Driving port for profile reads.
//!
//! Inbound adapters use this port to load the current profile without
//! importing persistence details.

use async_trait::async_trait;

use crate::domain::{Error, UserProfile};

/// Domain use-case port for reading profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Return the most recently created profile, or `None` when the store is
    /// empty.
    async fn latest_profile(&self) -> Result<Option<UserProfile>, Error>;
}
