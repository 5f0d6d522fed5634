//! Driven port for profile persistence.
//!
//! The [`ProfileRepository`] trait is the only way the domain touches stored
//! profiles. Adapters translate between their storage representation and
//! [`UserProfile`]; they carry no business rules.

use async_trait::async_trait;

use crate::domain::{ProfileDraft, ProfileFields, ProfileId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile repository adapters.
    pub enum ProfileRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "profile repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "profile repository query failed: {message}",
        /// An update or delete targeted an identifier with no stored record.
        MissingRecord { id: i32 } => "profile {id} does not exist",
        /// The store rejected the write because a unique value already exists.
        Duplicate { message: String } => "profile violates a uniqueness constraint: {message}",
    }
}

/// Port for profile storage and retrieval.
///
/// Every call is a single round trip to the store. No call is retried and the
/// port offers no way to group calls atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile with the largest identifier, if any exist.
    async fn find_latest(&self) -> Result<Option<UserProfile>, ProfileRepositoryError>;

    /// Fetch a profile by identifier.
    async fn find_by_id(&self, id: ProfileId)
    -> Result<Option<UserProfile>, ProfileRepositoryError>;

    /// Fetch the first profile whose email equals `email` or whose phone
    /// equals `phone`.
    async fn find_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError>;

    /// Insert a new profile; the store assigns the identifier.
    async fn create(&self, draft: &ProfileDraft) -> Result<UserProfile, ProfileRepositoryError>;

    /// Overwrite the present `fields` of an existing profile and return the
    /// stored record. Missing fields keep their stored values.
    ///
    /// Returns [`ProfileRepositoryError::MissingRecord`] when `id` is unknown.
    async fn update(
        &self,
        id: ProfileId,
        fields: &ProfileFields,
    ) -> Result<UserProfile, ProfileRepositoryError>;

    /// Remove a profile.
    ///
    /// Returns [`ProfileRepositoryError::MissingRecord`] when `id` is unknown.
    async fn delete(&self, id: ProfileId) -> Result<(), ProfileRepositoryError>;
}
