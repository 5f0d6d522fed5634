//! Driving port for profile mutations.

use async_trait::async_trait;

use crate::domain::{Error, ProfileDraft, ProfileFields, ProfileId, UserProfile};

/// Request to update an existing profile or create a new one.
///
/// `id` is the raw value supplied by the caller. A positive value selects the
/// update path; anything else (absent, zero or negative) selects create.
/// Fields may be missing: an update keeps the stored values for them, a
/// create cannot proceed without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertProfileRequest {
    pub id: Option<i64>,
    pub fields: ProfileFields,
}

impl UpsertProfileRequest {
    /// Request that always takes the create path.
    pub fn create(draft: ProfileDraft) -> Self {
        Self {
            id: None,
            fields: draft.into(),
        }
    }

    /// Request that targets the given identifier.
    pub fn update(id: i64, fields: impl Into<ProfileFields>) -> Self {
        Self {
            id: Some(id),
            fields: fields.into(),
        }
    }

    /// Identifier selected for the update path, if the request takes it.
    pub fn update_target(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }
}

/// Domain use-case port for creating, updating and deleting profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Update the supplied fields of the profile named by `request.id`, or
    /// create a new one after a duplicate email/phone check.
    async fn upsert_profile(&self, request: UpsertProfileRequest) -> Result<UserProfile, Error>;

    /// Delete an existing profile.
    async fn delete_profile(&self, id: ProfileId) -> Result<(), Error>;
}
