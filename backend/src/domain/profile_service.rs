//! Profile domain service.
//!
//! Implements the profile driving ports over any [`ProfileRepository`]. Every
//! store failure is caught here and turned into an [`Error`] carrying a
//! caller-safe message, so each use-case yields exactly one outcome.
//!
//! Updates write only the fields the caller supplied. A create needs all
//! three fields; a missing one is a save failure, as the store would reject
//! the insert.
//!
//! The create path checks for an existing email or phone before inserting.
//! That check and the insert are separate store calls with no lock between
//! them, so two concurrent creates with the same contact details can both
//! succeed unless the store itself enforces uniqueness. A uniqueness
//! violation reported by the store is treated like a failed pre-check.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    ProfileCommand, ProfileQuery, ProfileRepository, ProfileRepositoryError, UpsertProfileRequest,
};
use crate::domain::{
    DUPLICATE_USER_MESSAGE, Error, NOT_FOUND_MESSAGE, ProfileFields, ProfileId,
    READ_FAILED_MESSAGE, SAVE_FAILED_MESSAGE, TraceId, UserProfile, delete_failed_error,
};

/// Profile service implementing [`ProfileQuery`] and [`ProfileCommand`].
#[derive(Clone)]
pub struct ProfileService<R> {
    profile_repo: Arc<R>,
}

impl<R> ProfileService<R> {
    /// Create a new service over the given store handle.
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }
}

fn current_trace_id() -> Option<String> {
    TraceId::current().map(|id| id.to_string())
}

fn read_failed(err: &ProfileRepositoryError) -> Error {
    error!(error = %err, trace_id = ?current_trace_id(), "failed to read latest profile");
    Error::internal(READ_FAILED_MESSAGE)
}

fn save_failed(err: &ProfileRepositoryError) -> Error {
    error!(error = %err, trace_id = ?current_trace_id(), "failed to save profile");
    Error::internal(SAVE_FAILED_MESSAGE)
}

fn delete_failed(id: ProfileId, err: &ProfileRepositoryError) -> Error {
    error!(
        error = %err,
        profile_id = %id,
        trace_id = ?current_trace_id(),
        "failed to delete profile"
    );
    delete_failed_error(id)
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    async fn update_existing(
        &self,
        raw_id: i64,
        fields: &ProfileFields,
    ) -> Result<UserProfile, Error> {
        let id = ProfileId::try_from(raw_id).map_err(|err| {
            error!(
                error = %err,
                requested_id = raw_id,
                trace_id = ?current_trace_id(),
                "failed to save profile"
            );
            Error::internal(SAVE_FAILED_MESSAGE)
        })?;

        let profile = self
            .profile_repo
            .update(id, fields)
            .await
            .map_err(|err| save_failed(&err))?;
        info!(profile_id = %profile.id, "profile updated");
        Ok(profile)
    }

    async fn create_unique(&self, fields: ProfileFields) -> Result<UserProfile, Error> {
        let draft = fields.into_draft().map_err(|missing_field| {
            error!(
                missing_field,
                trace_id = ?current_trace_id(),
                "failed to save profile"
            );
            Error::internal(SAVE_FAILED_MESSAGE)
        })?;

        let existing = self
            .profile_repo
            .find_by_contact(&draft.email, &draft.phone)
            .await
            .map_err(|err| save_failed(&err))?;

        if let Some(existing) = existing {
            debug!(existing_id = %existing.id, "rejected profile with duplicate email or phone");
            return Err(Error::invalid_request(DUPLICATE_USER_MESSAGE));
        }

        match self.profile_repo.create(&draft).await {
            Ok(profile) => {
                info!(profile_id = %profile.id, "profile created");
                Ok(profile)
            }
            Err(ProfileRepositoryError::Duplicate { message }) => {
                debug!(%message, "store rejected profile with duplicate email or phone");
                Err(Error::invalid_request(DUPLICATE_USER_MESSAGE))
            }
            Err(err) => Err(save_failed(&err)),
        }
    }
}

#[async_trait]
impl<R> ProfileQuery for ProfileService<R>
where
    R: ProfileRepository,
{
    async fn latest_profile(&self) -> Result<Option<UserProfile>, Error> {
        self.profile_repo
            .find_latest()
            .await
            .map_err(|err| read_failed(&err))
    }
}

#[async_trait]
impl<R> ProfileCommand for ProfileService<R>
where
    R: ProfileRepository,
{
    async fn upsert_profile(&self, request: UpsertProfileRequest) -> Result<UserProfile, Error> {
        match request.update_target() {
            Some(raw_id) => self.update_existing(raw_id, &request.fields).await,
            None => self.create_unique(request.fields).await,
        }
    }

    async fn delete_profile(&self, id: ProfileId) -> Result<(), Error> {
        let existing = self
            .profile_repo
            .find_by_id(id)
            .await
            .map_err(|err| delete_failed(id, &err))?;

        if existing.is_none() {
            debug!(profile_id = %id, "delete requested for unknown profile");
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }

        self.profile_repo
            .delete(id)
            .await
            .map_err(|err| delete_failed(id, &err))?;
        info!(profile_id = %id, "profile deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
